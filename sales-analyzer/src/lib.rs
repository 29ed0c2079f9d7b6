#![warn(missing_docs)]
//! The seller performance analysis.
//!
//! An analysis folds every purchase record of a [`Dataset`] into per-seller
//! totals, ranks the sellers by profit, awards each a bonus for their rank and
//! projects the result into [`ReportEntry`] rows. Revenue and bonus policies
//! are pluggable through the [`RevenueCalculator`] and [`BonusCalculator`]
//! ports; [`DefaultRevenueStrategy`] and [`TieredBonusStrategy`] are the
//! standard policies.
//!
//! There are two entry points:
//!
//! - [`SalesAnalyzer`], typed over its two calculators, operating on an
//!   already validated [`Dataset`];
//! - [`analyze_sales_data`], taking a raw [`DatasetDto`] and an
//!   [`AnalysisOptions`] bag whose calculators may be absent.
//!
//! ```
//! use sales_analyzer::{SalesAnalyzer, models::*};
//!
//! let dataset = Dataset::new(
//!     vec![Seller::new("seller_1", "Alexey", "Petrov")],
//!     vec![Product::new("SKU_001", 10.0)],
//!     vec![Customer { id: "customer_1".into(), first_name: "Ivan".into(), last_name: "Sidorov".into() }],
//!     vec![PurchaseRecord::new("seller_1", 40.0, vec![LineItem::new("SKU_001", 2, 20.0, 0.0)])],
//! ).unwrap();
//!
//! let report = SalesAnalyzer::default().analyze(&dataset).unwrap();
//! assert_eq!(report[0].profit, 20.0);
//! assert_eq!(report[0].bonus, 3.0);
//! ```

/// Implementations of the revenue and bonus ports.
mod impls;
pub use impls::*;

mod analyzer;
pub use analyzer::{SalesAnalyzer, analyze_sales_data};

mod error;
pub use error::{AnalysisError, OptionsError};

mod options;
pub use options::AnalysisOptions;

// The individual stages of an analysis, in execution order
mod aggregate;
mod index;
mod rank;

pub use sales_core::models;
pub use sales_core::models::{Dataset, DatasetDto, ReportEntry};
pub use sales_core::ports::{BonusCalculator, RevenueCalculator};
