use crate::models::{LineItem, Product};

/// Interface for computing the revenue earned by a single line item.
///
/// The aggregation subtracts the product's cost (`purchase_price × quantity`)
/// from the returned value to obtain the line item's profit, so the
/// calculator decides how prices and discounts turn into revenue.
///
/// Any `Fn(&LineItem, &Product) -> f64` is a revenue calculator.
pub trait RevenueCalculator {
    /// The revenue attributed to `item`, sold from the catalog entry `product`
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&LineItem, &Product) -> f64,
{
    fn revenue(&self, item: &LineItem, product: &Product) -> f64 {
        self(item, product)
    }
}
