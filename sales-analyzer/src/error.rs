use sales_core::models::{DatasetError, SellerId, Sku};

/// Errors that abort an analysis. No partial report is ever produced.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// A required collection is missing or empty
    #[error("invalid input: {0}")]
    InvalidInput(#[from] DatasetError),

    /// A revenue or bonus calculator was not supplied
    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    /// A purchase record names a seller that is not in the dataset
    #[error("purchase record {record} references unknown seller `{seller_id}`")]
    UnknownSeller {
        /// The unresolved seller id
        seller_id: SellerId,
        /// Position of the offending purchase record
        record: usize,
    },

    /// A line item names a SKU that is not in the catalog
    #[error("purchase record {record} references unknown product `{sku}`")]
    UnknownProduct {
        /// The unresolved SKU
        sku: Sku,
        /// Position of the offending purchase record
        record: usize,
    },
}

/// Errors in the calculators supplied to [`analyze_sales_data`](crate::analyze_sales_data)
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    /// No revenue calculator was supplied
    #[error("a revenue calculator is required")]
    MissingRevenueCalculator,
    /// No bonus calculator was supplied
    #[error("a bonus calculator is required")]
    MissingBonusCalculator,
}
