use sales_core::models::{Map, Product, Seller, SellerId, SellerStats, Sku};

/// Per-seller accumulators, addressable by seller id.
///
/// There is one `SellerStats` per seller record, in input order. If a seller id
/// appears more than once, the id resolves to the last of those records; the
/// earlier ones stay in the report with zeroed totals.
pub(crate) struct SellerIndex {
    stats: Vec<SellerStats>,
    positions: Map<SellerId, usize>,
}

impl SellerIndex {
    pub(crate) fn new(sellers: &[Seller]) -> Self {
        let stats = sellers.iter().map(SellerStats::new).collect::<Vec<_>>();
        let positions = stats
            .iter()
            .enumerate()
            .map(|(position, stats)| (stats.seller_id.clone(), position))
            .collect();
        Self { stats, positions }
    }

    pub(crate) fn get_mut(&mut self, seller_id: &SellerId) -> Option<&mut SellerStats> {
        let position = *self.positions.get(seller_id)?;
        self.stats.get_mut(position)
    }

    /// The number of distinct seller ids
    pub(crate) fn len(&self) -> usize {
        self.positions.len()
    }

    pub(crate) fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

/// Catalog lookup by SKU. Duplicate SKUs resolve to the last catalog entry.
pub(crate) fn index_products(products: &[Product]) -> Map<&Sku, &Product> {
    let mut index = Map::with_capacity(products.len());
    for product in products {
        index.insert(&product.sku, product);
    }
    index
}
