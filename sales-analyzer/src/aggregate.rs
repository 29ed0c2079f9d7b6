use crate::{AnalysisError, index::SellerIndex};
use sales_core::{
    models::{Map, Product, PurchaseRecord, Sku},
    ports::RevenueCalculator,
};
use tracing::{Level, event};

/// Fold every purchase record, in order, into its seller's totals.
///
/// A record adds its invoice total to the seller's revenue and counts as one
/// sale. Each of its line items adds `revenue - cost` to the seller's profit,
/// where revenue comes from `calculator` and cost is the catalog purchase
/// price times the quantity, and adds its quantity to the seller's count for
/// that SKU.
pub(crate) fn aggregate<R: RevenueCalculator + ?Sized>(
    records: &[PurchaseRecord],
    sellers: &mut SellerIndex,
    products: &Map<&Sku, &Product>,
    calculator: &R,
) -> Result<(), AnalysisError> {
    for (position, record) in records.iter().enumerate() {
        let Some(stats) = sellers.get_mut(&record.seller_id) else {
            event!(
                Level::ERROR,
                record = position,
                seller_id = %record.seller_id,
                "purchase record references an unknown seller"
            );
            return Err(AnalysisError::UnknownSeller {
                seller_id: record.seller_id.clone(),
                record: position,
            });
        };

        stats.record_sale(record.total_amount);

        for item in record.items.iter() {
            let Some(product) = products.get(&item.sku) else {
                event!(
                    Level::ERROR,
                    record = position,
                    sku = %item.sku,
                    "line item references an unknown product"
                );
                return Err(AnalysisError::UnknownProduct {
                    sku: item.sku.clone(),
                    record: position,
                });
            };

            let cost = product.cost(item.quantity);
            let revenue = calculator.revenue(item, product);
            stats.record_item(&item.sku, item.quantity, revenue - cost);
        }

        event!(
            Level::TRACE,
            record = position,
            seller_id = %record.seller_id,
            items = record.items.len(),
            "purchase record aggregated"
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefaultRevenueStrategy, index::index_products};
    use approx::assert_abs_diff_eq;
    use sales_core::models::{LineItem, Seller};

    fn catalog() -> Vec<Product> {
        vec![Product::new("SKU_001", 10.0), Product::new("SKU_002", 4.0)]
    }

    #[test]
    fn test_fold() {
        let sellers = vec![Seller::new("seller_1", "Alexey", "Petrov")];
        let products = catalog();
        let records = vec![
            PurchaseRecord::new(
                "seller_1",
                52.0,
                vec![
                    LineItem::new("SKU_001", 2, 20.0, 0.0),
                    LineItem::new("SKU_002", 2, 10.0, 40.0),
                ],
            ),
            PurchaseRecord::new("seller_1", 20.0, vec![LineItem::new("SKU_001", 1, 20.0, 0.0)]),
        ];

        let mut index = SellerIndex::new(&sellers);
        aggregate(
            &records,
            &mut index,
            &index_products(&products),
            &DefaultRevenueStrategy,
        )
        .unwrap();

        let stats = index.into_stats().remove(0);
        assert_eq!(stats.sales_count, 2);
        assert_eq!(stats.revenue, 72.0);
        // (40 - 20) + (12 - 8) + (20 - 10)
        assert_abs_diff_eq!(stats.profit, 34.0, epsilon = 1e-9);
        assert_eq!(stats.products_sold[&Sku::from("SKU_001")], 3);
        assert_eq!(stats.products_sold[&Sku::from("SKU_002")], 2);
    }

    #[test]
    fn test_revenue_is_invoice_total() {
        // the invoice total is taken as-is, independent of the line items
        let sellers = vec![Seller::new("seller_1", "Alexey", "Petrov")];
        let products = catalog();
        let records = vec![PurchaseRecord::new(
            "seller_1",
            99.0,
            vec![LineItem::new("SKU_001", 1, 20.0, 0.0)],
        )];

        let mut index = SellerIndex::new(&sellers);
        let flat = |_: &LineItem, _: &Product| 15.0;
        aggregate(&records, &mut index, &index_products(&products), &flat).unwrap();

        let stats = index.into_stats().remove(0);
        assert_eq!(stats.revenue, 99.0);
        assert_eq!(stats.profit, 5.0);
    }

    #[test]
    fn test_unknown_seller() {
        let sellers = vec![Seller::new("seller_1", "Alexey", "Petrov")];
        let products = catalog();
        let records = vec![
            PurchaseRecord::new("seller_1", 20.0, vec![LineItem::new("SKU_001", 1, 20.0, 0.0)]),
            PurchaseRecord::new("seller_9", 20.0, vec![LineItem::new("SKU_001", 1, 20.0, 0.0)]),
        ];

        let mut index = SellerIndex::new(&sellers);
        let err = aggregate(
            &records,
            &mut index,
            &index_products(&products),
            &DefaultRevenueStrategy,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownSeller {
                seller_id: "seller_9".into(),
                record: 1,
            }
        );
    }

    #[test]
    fn test_unknown_product() {
        let sellers = vec![Seller::new("seller_1", "Alexey", "Petrov")];
        let products = catalog();
        let records = vec![PurchaseRecord::new(
            "seller_1",
            20.0,
            vec![
                LineItem::new("SKU_001", 1, 20.0, 0.0),
                LineItem::new("SKU_404", 1, 20.0, 0.0),
            ],
        )];

        let mut index = SellerIndex::new(&sellers);
        let err = aggregate(
            &records,
            &mut index,
            &index_products(&products),
            &DefaultRevenueStrategy,
        )
        .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::UnknownProduct {
                sku: "SKU_404".into(),
                record: 0,
            }
        );
    }
}
