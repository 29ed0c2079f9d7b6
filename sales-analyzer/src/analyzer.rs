use crate::{
    AnalysisError, AnalysisOptions, DefaultRevenueStrategy, TieredBonusStrategy,
    aggregate::aggregate,
    index::{SellerIndex, index_products},
    rank::{project, rank},
};
use sales_core::{
    models::{Dataset, DatasetDto, ReportEntry},
    ports::{BonusCalculator, RevenueCalculator},
};
use tracing::{Level, event, span};

/// A seller performance analysis, configured with its revenue and bonus policies.
#[derive(Clone, Debug)]
pub struct SalesAnalyzer<R, B> {
    revenue: R,
    bonus: B,
}

impl Default for SalesAnalyzer<DefaultRevenueStrategy, TieredBonusStrategy> {
    fn default() -> Self {
        Self::new(DefaultRevenueStrategy, TieredBonusStrategy::default())
    }
}

impl<R: RevenueCalculator, B: BonusCalculator> SalesAnalyzer<R, B> {
    /// Create an analyzer from its two calculators
    pub fn new(revenue: R, bonus: B) -> Self {
        Self { revenue, bonus }
    }

    /// Produce the report for `dataset`: one entry per seller, most profitable first.
    ///
    /// # Errors
    ///
    /// Fails if a purchase record references a seller, or a line item a
    /// product, that the dataset does not contain.
    pub fn analyze(&self, dataset: &Dataset) -> Result<Vec<ReportEntry>, AnalysisError> {
        run(dataset, &self.revenue, &self.bonus)
    }
}

/// Validate a raw dataset and the supplied calculators, then run the analysis.
///
/// The dataset is checked first: every collection must be present and
/// non-empty. Then both calculators must be set. Nothing is aggregated until
/// both checks pass.
pub fn analyze_sales_data(
    data: DatasetDto,
    options: &AnalysisOptions,
) -> Result<Vec<ReportEntry>, AnalysisError> {
    let dataset = Dataset::try_from(data).inspect_err(|err| {
        event!(Level::ERROR, err = %err, "rejected dataset");
    })?;
    let (revenue, bonus) = options.calculators().inspect_err(|err| {
        event!(Level::ERROR, err = %err, "rejected options");
    })?;
    run(&dataset, revenue, bonus)
}

fn run<R, B>(dataset: &Dataset, revenue: &R, bonus: &B) -> Result<Vec<ReportEntry>, AnalysisError>
where
    R: RevenueCalculator + ?Sized,
    B: BonusCalculator + ?Sized,
{
    let span = span!(
        Level::DEBUG,
        "analyze",
        sellers = dataset.sellers().len(),
        products = dataset.products().len(),
        purchase_records = dataset.purchase_records().len()
    );
    let _guard = span.enter();

    let mut sellers = SellerIndex::new(dataset.sellers());
    let products = index_products(dataset.products());
    event!(
        Level::DEBUG,
        sellers = sellers.len(),
        products = products.len(),
        "built indices"
    );

    aggregate(dataset.purchase_records(), &mut sellers, &products, revenue)?;

    let ranked = rank(sellers.into_stats());
    let report = project(&ranked, bonus);
    event!(
        Level::DEBUG,
        leader = report.first().map(|entry| entry.seller_id.as_str()),
        entries = report.len(),
        "ranked sellers"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::models::{
        Collection, Customer, DatasetError, LineItem, Product, PurchaseRecord, Seller,
        SellerStats,
    };

    fn customers() -> Vec<Customer> {
        vec![Customer {
            id: "customer_1".into(),
            first_name: "Ivan".to_owned(),
            last_name: "Sidorov".to_owned(),
        }]
    }

    #[test]
    fn test_single_seller_scenario() {
        let dataset = Dataset::new(
            vec![Seller::new("seller_1", "Alexey", "Petrov")],
            vec![Product::new("SKU_001", 10.0)],
            customers(),
            vec![PurchaseRecord::new(
                "seller_1",
                40.0,
                vec![LineItem::new("SKU_001", 2, 20.0, 0.0)],
            )],
        )
        .unwrap();

        let report = SalesAnalyzer::default().analyze(&dataset).unwrap();
        assert_eq!(report.len(), 1);
        let entry = &report[0];
        assert_eq!(entry.seller_id.as_str(), "seller_1");
        assert_eq!(entry.name, "Alexey Petrov");
        assert_eq!(entry.revenue, 40.0);
        assert_eq!(entry.profit, 20.0);
        assert_eq!(entry.sales_count, 1);
        assert_eq!(entry.bonus, 3.0);
        assert_eq!(entry.top_products.len(), 1);
        assert_eq!(entry.top_products[0].sku.as_str(), "SKU_001");
        assert_eq!(entry.top_products[0].quantity, 2);
    }

    #[test]
    fn test_custom_calculators() {
        let dataset = Dataset::new(
            vec![
                Seller::new("seller_1", "Alexey", "Petrov"),
                Seller::new("seller_2", "Olga", "Ivanova"),
            ],
            vec![Product::new("SKU_001", 10.0)],
            customers(),
            vec![
                PurchaseRecord::new("seller_1", 20.0, vec![LineItem::new("SKU_001", 1, 20.0, 0.0)]),
                PurchaseRecord::new("seller_2", 30.0, vec![LineItem::new("SKU_001", 1, 30.0, 0.0)]),
            ],
        )
        .unwrap();

        // revenue at list price, flat bonus of 1 per sale
        let list_price = |item: &LineItem, _: &Product| item.sale_price * item.quantity as f64;
        let per_sale = |_: usize, _: usize, stats: &SellerStats| stats.sales_count as f64;
        let report = SalesAnalyzer::new(list_price, per_sale)
            .analyze(&dataset)
            .unwrap();

        assert_eq!(report[0].seller_id.as_str(), "seller_2");
        assert_eq!(report[0].profit, 20.0);
        assert_eq!(report[1].profit, 10.0);
        assert!(report.iter().all(|entry| entry.bonus == 1.0));
    }

    #[test]
    fn test_input_checked_before_options() {
        let err = analyze_sales_data(DatasetDto::default(), &AnalysisOptions::new()).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InvalidInput(DatasetError::Missing(Collection::Sellers))
        );
    }
}
