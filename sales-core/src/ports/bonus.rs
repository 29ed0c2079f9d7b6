use crate::models::SellerStats;

/// Interface for awarding a bonus based on a seller's profit rank.
///
/// Sellers are ranked by descending profit before this is called, so `rank`
/// 0 is the most profitable seller and `rank == total - 1` the least.
///
/// Any `Fn(usize, usize, &SellerStats) -> f64` is a bonus calculator.
pub trait BonusCalculator {
    /// The bonus for the seller at `rank` out of `total` sellers
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> f64;
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStats) -> f64,
{
    fn bonus(&self, rank: usize, total: usize, seller: &SellerStats) -> f64 {
        self(rank, total, seller)
    }
}
