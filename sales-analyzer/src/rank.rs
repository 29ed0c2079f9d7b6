use sales_core::{
    models::{ReportEntry, SellerStats, TOP_PRODUCTS_LIMIT, round2},
    ports::BonusCalculator,
};

/// Order sellers by descending profit. The sort is stable, so sellers with
/// equal profit keep their input order.
pub(crate) fn rank(mut stats: Vec<SellerStats>) -> Vec<SellerStats> {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));
    stats
}

/// Award bonuses by rank and shape the report, keeping the ranked order.
pub(crate) fn project<B: BonusCalculator + ?Sized>(
    ranked: &[SellerStats],
    calculator: &B,
) -> Vec<ReportEntry> {
    let total = ranked.len();
    ranked
        .iter()
        .enumerate()
        .map(|(rank, stats)| {
            let bonus = calculator.bonus(rank, total, stats);
            ReportEntry {
                seller_id: stats.seller_id.clone(),
                name: stats.name.clone(),
                revenue: round2(stats.revenue),
                profit: round2(stats.profit),
                sales_count: stats.sales_count,
                top_products: stats.top_products(TOP_PRODUCTS_LIMIT),
                bonus: round2(bonus),
            }
        })
        .collect()
}
