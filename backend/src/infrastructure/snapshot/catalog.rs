use super::loader::{load_json, SnapshotError};
use crate::application::ports::{CatalogSearchService, ItemResponseGroup};
use crate::domain::catalog::Product;
use crate::domain::value_objects::ProductId;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Product catalog served from a JSON array of products
pub struct SnapshotCatalog {
    products: HashMap<ProductId, Product>,
}

impl SnapshotCatalog {
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        SnapshotCatalog {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let products: Vec<Product> = load_json(path).await?;
        info!("Loaded catalog snapshot with {} products", products.len());
        Ok(Self::from_products(products))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSearchService for SnapshotCatalog {
    async fn get_products(&self, ids: &[ProductId], groups: ItemResponseGroup) -> Result<Vec<Product>> {
        debug!(
            "Catalog snapshot lookup for {} ids (response groups {:#b})",
            ids.len(),
            groups.bits()
        );

        Ok(ids
            .iter()
            .filter_map(|id| self.products.get(id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ProductPrice;
    use crate::domain::value_objects::{Currency, Language, Money};
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        let currency = Currency::new(&Language::new("en-US").unwrap(), "USD");
        Product::new(
            ProductId::new(id).unwrap(),
            ProductPrice::flat(Money::new(Decimal::new(100, 2), currency)),
        )
    }

    #[tokio::test]
    async fn test_products_come_back_in_request_order() {
        let catalog = SnapshotCatalog::from_products(vec![product("a"), product("b"), product("c")]);
        let ids = vec![
            ProductId::new("c").unwrap(),
            ProductId::new("missing").unwrap(),
            ProductId::new("a").unwrap(),
        ];

        let found = catalog
            .get_products(&ids, ItemResponseGroup::ITEM_INFO)
            .await
            .unwrap();

        let found_ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(found_ids, vec!["c", "a"]);
    }
}
