use crate::models::{SellerId, Sku};

/// One row of a seller performance report.
///
/// Monetary values are rounded to two decimal places. Entries are produced in
/// descending order of profit.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportEntry {
    /// The seller this entry describes
    pub seller_id: SellerId,
    /// The seller's display name
    pub name: String,
    /// Sum of the invoice totals credited to the seller
    pub revenue: f64,
    /// Sum of line-item revenue minus cost
    pub profit: f64,
    /// Number of receipts credited to the seller
    pub sales_count: u64,
    /// Up to ten best-selling products, most units first
    pub top_products: Vec<TopProduct>,
    /// The bonus awarded for the seller's profit rank
    pub bonus: f64,
}

/// A product and the number of units a seller sold of it
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopProduct {
    /// The product sold
    pub sku: Sku,
    /// Units sold across all receipts
    pub quantity: u64,
}

/// Round to two decimal places, halves away from zero.
///
/// A result of zero is always positive zero, so a small negative amount
/// never reports as `-0`.
pub fn round2(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 { 0.0 } else { rounded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(40.0), 40.0);
        assert_eq!(round2(3.0000000000000004), 3.0);
        assert_eq!(round2(2.345678), 2.35);
        assert_eq!(round2(-2.345678), -2.35);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }

    #[test]
    fn test_round2_no_negative_zero() {
        let rounded = round2(-0.001);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = ReportEntry {
            seller_id: "seller_1".into(),
            name: "Alexey Petrov".to_owned(),
            revenue: 40.0,
            profit: 20.0,
            sales_count: 1,
            top_products: vec![TopProduct {
                sku: "SKU_001".into(),
                quantity: 2,
            }],
            bonus: 3.0,
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "seller_id": "seller_1",
                "name": "Alexey Petrov",
                "revenue": 40.0,
                "profit": 20.0,
                "sales_count": 1,
                "top_products": [{"sku": "SKU_001", "quantity": 2}],
                "bonus": 3.0,
            })
        );
    }
}
