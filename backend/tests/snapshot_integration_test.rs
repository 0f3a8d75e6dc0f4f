use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use storefront::application::dto::CartShippingMethod;
use storefront::application::{CartValidator, StoreContext};
use storefront::domain::{
    CartId, Currency, Language, LineItem, Money, Product, ProductId, ProductPrice, Shipment,
    ShoppingCart, ValidationError,
};
use storefront::infrastructure::{
    load_json, InMemoryCacheManager, SnapshotCartApi, SnapshotCatalog, SnapshotError,
};
use tempfile::TempDir;

fn write_json<T: serde::Serialize>(dir: &Path, name: &str, value: &T) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en_us() -> Language {
        Language::new("en-US").unwrap()
    }

    fn usd(amount: i64) -> Money {
        Money::new(Decimal::new(amount, 0), Currency::new(&en_us(), "USD"))
    }

    #[tokio::test]
    async fn test_validate_cart_from_snapshots() {
        let dir = TempDir::new().unwrap();

        let mut cart = ShoppingCart::persisted(
            CartId::new("cart-1").unwrap(),
            Currency::new(&en_us(), "USD"),
            en_us(),
        );
        cart.add_item(LineItem::new(ProductId::new("p-1").unwrap(), 1, usd(10)));
        let mut shipment = Shipment::new(&cart.currency);
        shipment.shipment_method_code = Some("Courier".to_string());
        cart.add_shipment(shipment);

        let products = vec![Product::new(
            ProductId::new("p-1").unwrap(),
            ProductPrice::flat(usd(10)),
        )];
        let mut methods: HashMap<String, Vec<CartShippingMethod>> = HashMap::new();
        methods.insert(
            "cart-1".to_string(),
            vec![CartShippingMethod {
                shipment_method_code: Some("FixedRate".to_string()),
                price: Some(5.0),
                ..Default::default()
            }],
        );

        let cart_path = write_json(dir.path(), "cart.json", &cart);
        let catalog_path = write_json(dir.path(), "catalog.json", &products);
        let methods_path = write_json(dir.path(), "methods.json", &methods);

        let mut loaded: ShoppingCart = load_json(&cart_path).await.unwrap();
        assert_eq!(loaded, cart);

        let catalog = SnapshotCatalog::load(&catalog_path).await.unwrap();
        assert_eq!(catalog.len(), 1);
        let cart_api = SnapshotCartApi::load(&methods_path).await.unwrap();

        let validator = CartValidator::new(
            Arc::new(catalog),
            Arc::new(cart_api),
            Arc::new(InMemoryCacheManager::default()),
        );
        let ctx = StoreContext::new(loaded.currency.clone(), loaded.language.clone());
        validator.validate(&mut loaded, &ctx).await.unwrap();

        assert!(loaded.items[0].is_valid());
        assert!(loaded.items[0].validation_warnings.is_empty());
        assert_eq!(
            loaded.shipments[0].validation_warnings,
            vec![ValidationError::ShippingUnavailable]
        );

        let json = serde_json::to_value(&loaded).unwrap();
        assert_eq!(
            json["shipments"][0]["validationWarnings"][0]["code"],
            "ShippingUnavailable"
        );
    }

    #[tokio::test]
    async fn test_catalog_snapshot_must_be_a_product_list() {
        let dir = TempDir::new().unwrap();
        let path = write_json(dir.path(), "catalog.json", &serde_json::json!({ "products": [] }));

        let result = SnapshotCatalog::load(&path).await;

        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_missing_methods_snapshot() {
        let dir = TempDir::new().unwrap();

        let result = SnapshotCartApi::load(dir.path().join("methods.json")).await;

        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }
}
