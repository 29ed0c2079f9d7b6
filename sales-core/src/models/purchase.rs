use crate::models::{CustomerId, SellerId, Sku};

/// A single receipt: one sale by one seller, made of one or more line items.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PurchaseRecord {
    /// The seller credited with the sale
    pub seller_id: SellerId,
    /// The invoice total, counted as the seller's revenue for this sale
    pub total_amount: f64,
    /// The products sold, in receipt order
    pub items: Vec<LineItem>,
    /// Receipt identifier
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub receipt_id: Option<String>,
    /// The buying customer
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub customer_id: Option<CustomerId>,
    /// Sale date, as given by the source system
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub date: Option<String>,
    /// Total discount granted on the receipt
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub total_discount: Option<f64>,
}

impl PurchaseRecord {
    /// Create a receipt with no optional metadata
    pub fn new(seller_id: impl Into<SellerId>, total_amount: f64, items: Vec<LineItem>) -> Self {
        Self {
            seller_id: seller_id.into(),
            total_amount,
            items,
            receipt_id: None,
            customer_id: None,
            date: None,
            total_discount: None,
        }
    }
}

/// One product line within a receipt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineItem {
    /// The product sold
    pub sku: Sku,
    /// Number of units sold
    pub quantity: u64,
    /// The unit price charged, before discount
    pub sale_price: f64,
    /// Discount in percent (0 to 100)
    #[cfg_attr(feature = "serde", serde(default))]
    pub discount: f64,
}

impl LineItem {
    /// Create a line item
    pub fn new(sku: impl Into<Sku>, quantity: u64, sale_price: f64, discount: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            sale_price,
            discount,
        }
    }
}
