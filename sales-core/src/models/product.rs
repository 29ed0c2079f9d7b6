use crate::models::Sku;

/// A product card from the catalog.
///
/// Only the SKU and the purchase price matter to an analysis: the purchase
/// price is the unit cost that profit is measured against. The descriptive
/// fields are carried through so catalogs can be loaded as-is.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Unique stock-keeping unit
    pub sku: Sku,
    /// The unit cost of the product
    pub purchase_price: f64,
    /// Human-readable product name
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub name: Option<String>,
    /// Catalog category
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category: Option<String>,
    /// The list price. Line items carry the price actually charged.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub sale_price: Option<f64>,
}

impl Product {
    /// Create a product with no descriptive data
    pub fn new(sku: impl Into<Sku>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }

    /// The cost of `quantity` units of this product
    pub fn cost(&self, quantity: u64) -> f64 {
        self.purchase_price * quantity as f64
    }
}
