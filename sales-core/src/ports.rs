mod bonus;
mod revenue;

pub use bonus::BonusCalculator;
pub use revenue::RevenueCalculator;
