/// The standard discounted-price revenue calculator
mod revenue;
pub use revenue::DefaultRevenueStrategy;

/// The standard rank-tiered bonus calculator
mod bonus;
pub use bonus::TieredBonusStrategy;
