use sales_core::{
    models::{LineItem, Product},
    ports::RevenueCalculator,
};

/// Revenue is the sale price times the quantity, less the line's percentage discount:
/// `sale_price × quantity × (1 − discount / 100)`.
///
/// The catalog entry is not consulted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DefaultRevenueStrategy;

impl RevenueCalculator for DefaultRevenueStrategy {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount = 1.0 - item.discount / 100.0;
        item.sale_price * item.quantity as f64 * discount
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_no_discount() {
        let item = LineItem::new("SKU_001", 2, 20.0, 0.0);
        let product = Product::new("SKU_001", 10.0);
        assert_eq!(DefaultRevenueStrategy.revenue(&item, &product), 40.0);
    }

    #[test]
    fn test_discount() {
        let item = LineItem::new("SKU_001", 3, 100.0, 15.0);
        let product = Product::new("SKU_001", 10.0);
        assert_abs_diff_eq!(
            DefaultRevenueStrategy.revenue(&item, &product),
            255.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_full_discount() {
        let item = LineItem::new("SKU_001", 3, 100.0, 100.0);
        let product = Product::new("SKU_001", 10.0);
        assert_eq!(DefaultRevenueStrategy.revenue(&item, &product), 0.0);
    }
}
