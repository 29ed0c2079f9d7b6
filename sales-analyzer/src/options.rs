use crate::{DefaultRevenueStrategy, OptionsError, TieredBonusStrategy};
use sales_core::ports::{BonusCalculator, RevenueCalculator};

/// The calculators an analysis runs with.
///
/// Both calculators start out absent; [`analyze_sales_data`](crate::analyze_sales_data)
/// refuses to run until both are set. [`AnalysisOptions::standard`] supplies the
/// default policies.
#[derive(Default)]
pub struct AnalysisOptions {
    /// Computes the revenue of each line item
    pub calculate_revenue: Option<Box<dyn RevenueCalculator>>,
    /// Computes each seller's bonus from their profit rank
    pub calculate_bonus: Option<Box<dyn BonusCalculator>>,
}

impl AnalysisOptions {
    /// Options with neither calculator set
    pub fn new() -> Self {
        Self::default()
    }

    /// Options using [`DefaultRevenueStrategy`] and [`TieredBonusStrategy`]
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(DefaultRevenueStrategy)
            .with_bonus(TieredBonusStrategy::default())
    }

    /// Set the revenue calculator
    pub fn with_revenue(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(calculator));
        self
    }

    /// Set the bonus calculator
    pub fn with_bonus(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(calculator));
        self
    }

    /// Borrow both calculators, failing if either is absent (revenue is checked first)
    pub fn calculators(
        &self,
    ) -> Result<(&dyn RevenueCalculator, &dyn BonusCalculator), OptionsError> {
        let revenue = self
            .calculate_revenue
            .as_deref()
            .ok_or(OptionsError::MissingRevenueCalculator)?;
        let bonus = self
            .calculate_bonus
            .as_deref()
            .ok_or(OptionsError::MissingBonusCalculator)?;
        Ok((revenue, bonus))
    }
}

impl std::fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}
