use crate::models::{Customer, Product, PurchaseRecord, Seller};
use std::fmt;

/// A validated sales dataset.
///
/// All four collections are guaranteed to be present and non-empty. Nothing
/// about the records inside them is checked; references between records are
/// resolved (and may fail) during analysis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DatasetDto", into = "DatasetDto")
)]
pub struct Dataset {
    sellers: Vec<Seller>,
    products: Vec<Product>,
    customers: Vec<Customer>,
    purchase_records: Vec<PurchaseRecord>,
}

impl Dataset {
    /// Bundle the four collections into a dataset, validating their presence
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        customers: Vec<Customer>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Result<Self, DatasetError> {
        Self::try_from(DatasetDto {
            sellers: Some(sellers),
            products: Some(products),
            customers: Some(customers),
            purchase_records: Some(purchase_records),
        })
    }

    /// The sellers, in input order
    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    /// The product catalog, in input order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The customers, in input order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// The purchase records, in input order
    pub fn purchase_records(&self) -> &[PurchaseRecord] {
        &self.purchase_records
    }
}

/// The raw, unvalidated form of a dataset, intended for use with serde.
///
/// A collection that is absent (or `null`) in the source deserializes to
/// `None`. Converting into a [`Dataset`] rejects absent and empty collections.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatasetDto {
    /// The sellers to report on
    #[cfg_attr(feature = "serde", serde(default))]
    pub sellers: Option<Vec<Seller>>,
    /// The product catalog
    #[cfg_attr(feature = "serde", serde(default))]
    pub products: Option<Vec<Product>>,
    /// The customer list
    #[cfg_attr(feature = "serde", serde(default))]
    pub customers: Option<Vec<Customer>>,
    /// The receipts to aggregate
    #[cfg_attr(feature = "serde", serde(default))]
    pub purchase_records: Option<Vec<PurchaseRecord>>,
}

impl From<Dataset> for DatasetDto {
    fn from(value: Dataset) -> Self {
        Self {
            sellers: Some(value.sellers),
            products: Some(value.products),
            customers: Some(value.customers),
            purchase_records: Some(value.purchase_records),
        }
    }
}

impl TryFrom<DatasetDto> for Dataset {
    type Error = DatasetError;

    /// Validate the top-level shape of a dataset.
    ///
    /// Collections are checked in the order sellers, products, customers,
    /// purchase records; the first failure is reported.
    fn try_from(value: DatasetDto) -> Result<Self, Self::Error> {
        let DatasetDto {
            sellers,
            products,
            customers,
            purchase_records,
        } = value;

        Ok(Self {
            sellers: require(sellers, Collection::Sellers)?,
            products: require(products, Collection::Products)?,
            customers: require(customers, Collection::Customers)?,
            purchase_records: require(purchase_records, Collection::PurchaseRecords)?,
        })
    }
}

fn require<T>(values: Option<Vec<T>>, collection: Collection) -> Result<Vec<T>, DatasetError> {
    match values {
        None => Err(DatasetError::Missing(collection)),
        Some(values) if values.is_empty() => Err(DatasetError::Empty(collection)),
        Some(values) => Ok(values),
    }
}

/// The top-level collections of a dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    /// The `sellers` collection
    Sellers,
    /// The `products` collection
    Products,
    /// The `customers` collection
    Customers,
    /// The `purchase_records` collection
    PurchaseRecords,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (match self {
            Self::Sellers => "sellers",
            Self::Products => "products",
            Self::Customers => "customers",
            Self::PurchaseRecords => "purchase_records",
        })
        .fmt(f)
    }
}

/// Errors that can occur when validating a dataset
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum DatasetError {
    /// A required collection is absent
    #[error("missing collection `{0}`")]
    Missing(Collection),
    /// A required collection has no entries
    #[error("collection `{0}` is empty")]
    Empty(Collection),
}
