mod customer;
mod dataset;
mod map;
mod product;
mod purchase;
mod report;
mod seller;
mod stats;

pub use customer::Customer;
pub use dataset::{Collection, Dataset, DatasetDto, DatasetError};
pub use map::Map;
pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{ReportEntry, TopProduct, round2};
pub use seller::Seller;
pub use stats::{SellerStats, TOP_PRODUCTS_LIMIT};

// Identifiers arrive as JSON strings in most datasets, but numeric ids are
// common enough that we accept both and normalize to the decimal string.
macro_rules! id_wrapper {
    ($struct:ident) => {
        #[doc = concat!("A string newtype for ", stringify!($struct))]
        #[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
        #[cfg_attr(
            feature = "schemars",
            derive(schemars::JsonSchema),
            schemars(transparent)
        )]
        pub struct $struct(String);

        impl $struct {
            /// Borrow the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $struct {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                serde_untagged::UntaggedEnumVisitor::new()
                    .string(|id| Ok(Self(id.to_owned())))
                    .i64(|id| Ok(Self(id.to_string())))
                    .u64(|id| Ok(Self(id.to_string())))
                    .deserialize(deserializer)
            }
        }
    };
}

id_wrapper!(SellerId);
id_wrapper!(Sku);
id_wrapper!(CustomerId);
