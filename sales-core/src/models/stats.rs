use crate::models::{Map, Seller, SellerId, Sku, TopProduct};

/// The number of products listed in a report entry
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Running totals for one seller, accumulated over the purchase records.
///
/// Stats start zeroed, are updated once per receipt and once per line item,
/// and are read (never written) once ranking begins.
#[derive(Clone, Debug, PartialEq)]
pub struct SellerStats {
    /// The seller these totals belong to
    pub seller_id: SellerId,
    /// The seller's display name
    pub name: String,
    /// Sum of invoice totals
    pub revenue: f64,
    /// Sum of line-item revenue minus cost
    pub profit: f64,
    /// Number of receipts
    pub sales_count: u64,
    /// Units sold per SKU, in order of first sale
    pub products_sold: Map<Sku, u64>,
}

impl SellerStats {
    /// Zeroed totals for a seller
    pub fn new(seller: &Seller) -> Self {
        Self {
            seller_id: seller.id.clone(),
            name: seller.display_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Map::default(),
        }
    }

    /// Count one receipt worth `total_amount`
    pub fn record_sale(&mut self, total_amount: f64) {
        self.sales_count += 1;
        self.revenue += total_amount;
    }

    /// Count one line item. Unit totals saturate at `u64::MAX`.
    pub fn record_item(&mut self, sku: &Sku, quantity: u64, profit: f64) {
        self.profit += profit;
        let sold = self.products_sold.entry(sku.clone()).or_insert(0);
        *sold = sold.saturating_add(quantity);
    }

    /// The best-selling products, most units first, at most `limit` of them.
    ///
    /// Products with equal quantities keep the order in which they were first sold.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut top = self
            .products_sold
            .iter()
            .map(|(sku, &quantity)| TopProduct {
                sku: sku.clone(),
                quantity,
            })
            .collect::<Vec<_>>();
        top.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        top.truncate(limit);
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> SellerStats {
        SellerStats::new(&Seller::new("seller_1", "Alexey", "Petrov"))
    }

    #[test]
    fn test_new_is_zeroed() {
        let stats = stats();
        assert_eq!(stats.name, "Alexey Petrov");
        assert_eq!(stats.revenue, 0.0);
        assert_eq!(stats.profit, 0.0);
        assert_eq!(stats.sales_count, 0);
        assert!(stats.top_products(TOP_PRODUCTS_LIMIT).is_empty());
    }

    #[test]
    fn test_quantities_accumulate() {
        let mut stats = stats();
        let sku = Sku::from("SKU_001");
        stats.record_item(&sku, 2, 5.0);
        stats.record_item(&sku, 3, -1.5);
        assert_eq!(stats.products_sold[&sku], 5);
        assert_eq!(stats.profit, 3.5);
    }

    #[test]
    fn test_quantities_saturate() {
        let mut stats = stats();
        let sku = Sku::from("SKU_001");
        stats.record_item(&sku, u64::MAX - 1, 0.0);
        stats.record_item(&sku, 5, 0.0);
        assert_eq!(stats.products_sold[&sku], u64::MAX);
        assert_eq!(stats.top_products(TOP_PRODUCTS_LIMIT)[0].quantity, u64::MAX);
    }

    #[test]
    fn test_top_products_order_and_ties() {
        let mut stats = stats();
        for (sku, quantity) in [("a", 1), ("b", 5), ("c", 1), ("d", 7), ("e", 5)] {
            stats.record_item(&Sku::from(sku), quantity, 0.0);
        }
        let top = stats
            .top_products(TOP_PRODUCTS_LIMIT)
            .into_iter()
            .map(|p| (p.sku.to_string(), p.quantity))
            .collect::<Vec<_>>();
        assert_eq!(
            top,
            vec![
                ("d".to_owned(), 7),
                ("b".to_owned(), 5),
                ("e".to_owned(), 5),
                ("a".to_owned(), 1),
                ("c".to_owned(), 1),
            ]
        );
    }

    #[test]
    fn test_top_products_truncated() {
        let mut stats = stats();
        for i in 0..15u64 {
            stats.record_item(&Sku::from(format!("SKU_{i:03}")), i + 1, 0.0);
        }
        let top = stats.top_products(TOP_PRODUCTS_LIMIT);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].quantity, 15);
        assert_eq!(top[9].quantity, 6);
        assert!(top.windows(2).all(|w| w[0].quantity >= w[1].quantity));
    }
}
