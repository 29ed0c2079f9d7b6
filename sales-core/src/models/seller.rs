use crate::models::SellerId;

/// A seller, as listed in the dataset.
///
/// Sellers are immutable source records. Their display name in a report is
/// `"{first_name} {last_name}"`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seller {
    /// Unique identifier for the seller
    pub id: SellerId,
    /// The seller's given name
    pub first_name: String,
    /// The seller's family name
    pub last_name: String,
}

impl Seller {
    /// Create a seller record
    pub fn new(
        id: impl Into<SellerId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The name shown for this seller in a report
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
