#![warn(missing_docs)]
//! Models and ports for computing seller performance reports.
//!
//! This crate holds no analysis logic of its own. It defines the records a
//! sales dataset is made of, the shape of the report produced from them, and
//! the two pluggable calculators (revenue and bonus) an analysis is
//! parameterized by. The `sales-analyzer` crate provides the analysis pass and
//! the default calculators.

/// Core domain models for seller reporting.
///
/// The source records (sellers, products, customers, purchase records) are
/// immutable inputs. `SellerStats` is the per-seller accumulator built during
/// aggregation, and `ReportEntry` is the immutable output row.
pub mod models;

/// Interface traits for the pluggable parts of an analysis.
///
/// Revenue and bonus calculation are expressed as single-method traits so an
/// analysis can be configured with any policy without touching the
/// aggregation itself. Plain closures with the matching signature implement
/// both traits.
pub mod ports;
