use crate::domain::catalog::Product;
use crate::domain::value_objects::ProductId;
use anyhow::Result;
use async_trait::async_trait;
use std::ops::BitOr;

/// Which parts of a product the catalog should load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemResponseGroup(u32);

impl ItemResponseGroup {
    pub const ITEM_INFO: Self = Self(1);
    pub const ITEM_WITH_PRICES: Self = Self(1 << 1);
    pub const ITEM_WITH_DISCOUNTS: Self = Self(1 << 2);
    pub const INVENTORY: Self = Self(1 << 3);
    pub const ITEM_PROPERTIES: Self = Self(1 << 4);

    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn contains(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for ItemResponseGroup {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Read access to the commerce platform's product catalog
#[async_trait]
pub trait CatalogSearchService: Send + Sync {
    /// Load the products with the given ids; unknown ids are left out
    async fn get_products(&self, ids: &[ProductId], groups: ItemResponseGroup) -> Result<Vec<Product>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_group_flags() {
        let groups = ItemResponseGroup::ITEM_WITH_PRICES
            | ItemResponseGroup::ITEM_WITH_DISCOUNTS
            | ItemResponseGroup::INVENTORY;

        assert!(groups.contains(ItemResponseGroup::INVENTORY));
        assert!(groups.contains(ItemResponseGroup::ITEM_WITH_PRICES | ItemResponseGroup::INVENTORY));
        assert!(!groups.contains(ItemResponseGroup::ITEM_PROPERTIES));
        assert_eq!(groups.bits(), 0b1110);
    }
}
