use crate::models::CustomerId;

/// A customer. Customers are required to be present in a dataset but take no
/// part in the computation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    /// Unique identifier for the customer
    pub id: CustomerId,
    /// The customer's given name
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_name: String,
    /// The customer's family name
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_name: String,
}
