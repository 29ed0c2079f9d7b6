use sales_core::{models::SellerStats, ports::BonusCalculator};

/// Awards a share of profit by rank. The first matching tier wins, checked in
/// this order:
///
/// 1. rank 0 earns `first` (15% by default),
/// 2. ranks 1 and 2 earn `runner_up` (10%),
/// 3. the last rank earns `last` (0%),
/// 4. every other rank earns `rest` (5%).
///
/// Because of that order a single seller earns `first` even though they are
/// also last, and in a pool of two or three nobody reaches the `last` tier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TieredBonusStrategy {
    /// Share of profit for the most profitable seller
    pub first: f64,
    /// Share of profit for the second and third sellers
    pub runner_up: f64,
    /// Share of profit for the least profitable seller
    pub last: f64,
    /// Share of profit for everybody else
    pub rest: f64,
}

impl Default for TieredBonusStrategy {
    fn default() -> Self {
        Self {
            first: 0.15,
            runner_up: 0.10,
            last: 0.0,
            rest: 0.05,
        }
    }
}

impl TieredBonusStrategy {
    /// The share of profit awarded at `rank` out of `total`
    pub fn rate(&self, rank: usize, total: usize) -> f64 {
        if rank == 0 {
            self.first
        } else if rank == 1 || rank == 2 {
            self.runner_up
        } else if rank + 1 == total {
            self.last
        } else {
            self.rest
        }
    }
}

impl BonusCalculator for TieredBonusStrategy {
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> f64 {
        seller.profit * self.rate(rank, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case::alone(1, vec![0.15])]
    #[case::pair(2, vec![0.15, 0.10])]
    #[case::trio(3, vec![0.15, 0.10, 0.10])]
    #[case::four(4, vec![0.15, 0.10, 0.10, 0.0])]
    #[case::five(5, vec![0.15, 0.10, 0.10, 0.05, 0.0])]
    #[case::seven(7, vec![0.15, 0.10, 0.10, 0.05, 0.05, 0.05, 0.0])]
    fn test_tier_order(#[case] total: usize, #[case] expected: Vec<f64>) {
        let strategy = TieredBonusStrategy::default();
        let rates = (0..total)
            .map(|rank| strategy.rate(rank, total))
            .collect::<Vec<_>>();
        assert_eq!(rates, expected);
    }

    #[test]
    fn test_bonus_scales_profit() {
        let mut stats =
            SellerStats::new(&sales_core::models::Seller::new("seller_1", "Alexey", "Petrov"));
        stats.profit = 200.0;
        let strategy = TieredBonusStrategy::default();
        assert_abs_diff_eq!(strategy.bonus(3, 5, &stats), 10.0, epsilon = 1e-9);
        assert_eq!(strategy.bonus(4, 5, &stats), 0.0);
    }

    #[test]
    fn test_partial_settings() {
        let strategy: TieredBonusStrategy = serde_json::from_str(r#"{"first": 0.2}"#).unwrap();
        assert_eq!(strategy.first, 0.2);
        assert_eq!(strategy.runner_up, 0.10);
        assert_eq!(strategy.rest, 0.05);
    }
}
