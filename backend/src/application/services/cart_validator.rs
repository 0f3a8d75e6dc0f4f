/// Re-validates a persisted cart against live catalog and shipping data
use crate::application::context::StoreContext;
use crate::application::converters::cart_shipping_method_to_web;
use crate::application::ports::{CacheManager, CartApi, CatalogSearchService, ItemResponseGroup};
use crate::domain::aggregates::ShoppingCart;
use crate::domain::catalog::{Inventory, Product};
use crate::domain::entities::{LineItem, Shipment};
use crate::domain::validation::ValidationError;
use crate::domain::value_objects::{CartId, Currency, ProductId, ValidationType};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failure of the validation process itself, as opposed to an invalid cart
#[derive(Error, Debug)]
pub enum CartValidationError {
    #[error("Catalog lookup failed: {0:#}")]
    Catalog(anyhow::Error),

    #[error("Shipping method lookup failed: {0:#}")]
    ShippingMethods(anyhow::Error),
}

pub type ValidationResult<T> = Result<T, CartValidationError>;

/// Configuration for the cart validator
#[derive(Debug, Clone)]
pub struct CartValidatorConfig {
    /// Cache region holding catalog lookups
    pub cache_region: String,
    /// Product data requested from the catalog
    pub response_groups: ItemResponseGroup,
    /// Stop checking further shipments once one has no usable shipping method
    pub halt_on_unavailable_shipping: bool,
}

impl Default for CartValidatorConfig {
    fn default() -> Self {
        CartValidatorConfig {
            cache_region: "ApiRegion".to_string(),
            response_groups: ItemResponseGroup::ITEM_WITH_PRICES
                | ItemResponseGroup::ITEM_WITH_DISCOUNTS
                | ItemResponseGroup::INVENTORY,
            halt_on_unavailable_shipping: true,
        }
    }
}

/// Service that recomputes validation errors and warnings of a cart
pub struct CartValidator<S, A, M> {
    catalog: Arc<S>,
    cart_api: Arc<A>,
    cache: Arc<M>,
    config: CartValidatorConfig,
}

impl<S, A, M> CartValidator<S, A, M>
where
    S: CatalogSearchService + 'static,
    A: CartApi,
    M: CacheManager,
{
    pub fn new(catalog: Arc<S>, cart_api: Arc<A>, cache: Arc<M>) -> Self {
        CartValidator {
            catalog,
            cart_api,
            cache,
            config: CartValidatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CartValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate line items and shipments of the cart in place
    ///
    /// Transient carts are always valid and cost no collaborator calls.
    /// Business-rule violations end up in the entities' error and warning
    /// lists; only failures to reach the catalog or cart service are returned
    /// as errors.
    pub async fn validate(&self, cart: &mut ShoppingCart, ctx: &StoreContext) -> ValidationResult<()> {
        let Some(cart_id) = cart.id.clone() else {
            debug!("Skipping validation of transient cart");
            return Ok(());
        };

        info!(
            "Validating cart {}: {} line items, {} shipments",
            cart_id,
            cart.items.len(),
            cart.shipments.len()
        );

        let product_ids = cart.product_ids();
        let ShoppingCart {
            items,
            shipments,
            currency,
            validation_type,
            ..
        } = &mut *cart;

        tokio::try_join!(
            self.validate_items(items, product_ids, ctx),
            self.validate_shipments(&cart_id, shipments, currency, *validation_type),
        )?;

        info!(
            "Validated cart {} (errors: {}, warnings: {})",
            cart_id,
            cart.has_validation_errors(),
            cart.has_validation_warnings()
        );

        Ok(())
    }

    async fn validate_items(
        &self,
        items: &mut [LineItem],
        product_ids: Vec<ProductId>,
        ctx: &StoreContext,
    ) -> ValidationResult<()> {
        if items.is_empty() {
            return Ok(());
        }

        let products = self.load_products(product_ids, ctx).await?;
        let by_id: HashMap<&ProductId, &Product> = products.iter().map(|p| (&p.id, p)).collect();

        for item in items.iter_mut() {
            validate_line_item(item, by_id.get(&item.product_id).copied());
        }

        debug!(
            "Line item pass finished: {} items checked against {} products",
            items.len(),
            products.len()
        );
        Ok(())
    }

    async fn load_products(&self, product_ids: Vec<ProductId>, ctx: &StoreContext) -> ValidationResult<Vec<Product>> {
        let joined_ids = product_ids
            .iter()
            .map(ProductId::as_str)
            .collect::<Vec<_>>()
            .join(":");
        let cache_key = format!(
            "CartValidator.ValidateItems-{}:{}:{}",
            ctx.currency.code(),
            ctx.language,
            joined_ids
        );

        let catalog = Arc::clone(&self.catalog);
        let groups = self.config.response_groups;

        self.cache
            .get_or_add(&cache_key, &self.config.cache_region, move || async move {
                catalog.get_products(&product_ids, groups).await
            })
            .await
            .map_err(CartValidationError::Catalog)
    }

    async fn validate_shipments(
        &self,
        cart_id: &CartId,
        shipments: &mut Vec<Shipment>,
        currency: &Currency,
        validation_type: ValidationType,
    ) -> ValidationResult<()> {
        let mut replacement = None;

        for shipment in shipments.iter_mut() {
            shipment.reset_validation();

            let available = self
                .cart_api
                .get_shipment_methods(cart_id)
                .await
                .map_err(CartValidationError::ShippingMethods)?;

            if available.is_empty() {
                shipment.validation_warnings.push(ValidationError::ShippingUnavailable);
                if self.config.halt_on_unavailable_shipping {
                    warn!("No shipping methods available for cart {}, skipping remaining shipments", cart_id);
                    break;
                }
                continue;
            }

            if shipment
                .shipment_method_code
                .as_deref()
                .map_or(true, str::is_empty)
            {
                continue;
            }

            let matched = available
                .iter()
                .map(|dto| cart_shipping_method_to_web(dto, currency))
                .find(|method| shipment.has_same_method(method));

            let Some(method) = matched else {
                debug!(
                    "Shipping method {:?} is no longer offered for cart {}",
                    shipment.shipment_method_code, cart_id
                );
                shipment.validation_warnings.push(ValidationError::ShippingUnavailable);
                if self.config.halt_on_unavailable_shipping {
                    warn!("Selected shipping method unavailable for cart {}, skipping remaining shipments", cart_id);
                    break;
                }
                continue;
            };

            if method.price != shipment.shipping_price && validation_type.checks_price() {
                let mut updated = method.to_shipment(currency);
                updated.validation_warnings.push(ValidationError::ShippingPrice {
                    old_price: shipment.shipping_price.clone(),
                });
                debug!(
                    "Shipping price of {:?} changed for cart {}",
                    updated.shipment_method_code, cart_id
                );
                // A later repriced shipment supersedes an earlier replacement.
                replacement = Some(updated);
            }
        }

        if let Some(updated) = replacement {
            warn!(
                "Shipping price changed for cart {}, replacing {} shipment(s) with method {:?}",
                cart_id,
                shipments.len(),
                updated.shipment_method_code
            );
            shipments.clear();
            shipments.push(updated);
        }

        Ok(())
    }
}

/// Check one line item against its catalog product
fn validate_line_item(item: &mut LineItem, product: Option<&Product>) {
    item.reset_validation();

    let product = match product {
        Some(product) if product.is_purchasable() => product,
        _ => {
            debug!("Product {} is unavailable", item.product_id);
            item.validation_errors.push(ValidationError::ProductUnavailable);
            return;
        }
    };

    if product.track_inventory && item.validation_type.checks_quantity() {
        let available = product
            .inventory
            .as_ref()
            .and_then(Inventory::available_quantity);
        if let Some(available) = available {
            if item.quantity > available {
                debug!(
                    "Product {}: requested {} but only {} available",
                    item.product_id, item.quantity, available
                );
                item.validation_errors.push(ValidationError::ProductQuantity {
                    available_quantity: available,
                });
            }
        }
    }

    if item.validation_type.checks_price() {
        let tier = product.price.tier_price(item.quantity);
        if tier.actual_price() != item.placed_price {
            debug!(
                "Product {}: placed price {} differs from current {}",
                item.product_id,
                item.placed_price,
                tier.actual_price()
            );
            item.validation_warnings.push(ValidationError::ProductPrice {
                old_price: item.placed_price.clone(),
                old_price_with_tax: item.placed_price_with_tax.clone(),
            });
            item.sale_price = tier.price;
            item.sale_price_with_tax = tier.price_with_tax;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::CartShippingMethod;
    use crate::domain::catalog::{ProductPrice, TierPrice};
    use crate::domain::value_objects::{Language, Money};
    use anyhow::Result;
    use async_trait::async_trait;
    use rust_decimal::Decimal;
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeCatalog {
        products: Vec<Product>,
        calls: AtomicUsize,
    }

    impl FakeCatalog {
        fn new(products: Vec<Product>) -> Self {
            Self {
                products,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CatalogSearchService for FakeCatalog {
        async fn get_products(&self, ids: &[ProductId], _groups: ItemResponseGroup) -> Result<Vec<Product>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .products
                .iter()
                .filter(|p| ids.contains(&p.id))
                .cloned()
                .collect())
        }
    }

    struct FakeCartApi {
        methods: Vec<CartShippingMethod>,
        calls: AtomicUsize,
    }

    impl FakeCartApi {
        fn new(methods: Vec<CartShippingMethod>) -> Self {
            Self {
                methods,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl CartApi for FakeCartApi {
        async fn get_shipment_methods(&self, _cart_id: &CartId) -> Result<Vec<CartShippingMethod>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.methods.clone())
        }
    }

    struct FailingCartApi;

    #[async_trait]
    impl CartApi for FailingCartApi {
        async fn get_shipment_methods(&self, _cart_id: &CartId) -> Result<Vec<CartShippingMethod>> {
            Err(anyhow::anyhow!("cart service unreachable"))
        }
    }

    /// Runs the producer on every lookup
    struct NoCache {
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl CacheManager for NoCache {
        async fn get_or_add<T, F, Fut>(&self, _key: &str, _region: &str, producer: F) -> Result<T>
        where
            T: Clone + Send + Sync + 'static,
            F: FnOnce() -> Fut + Send,
            Fut: Future<Output = Result<T>> + Send,
        {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            producer().await
        }
    }

    fn en_us() -> Language {
        Language::new("en-US").unwrap()
    }

    fn usd() -> Currency {
        Currency::new(&en_us(), "USD")
    }

    fn usd_money(amount: i64) -> Money {
        Money::new(Decimal::new(amount, 0), usd())
    }

    fn context() -> StoreContext {
        StoreContext::new(usd(), en_us())
    }

    fn product(id: &str, price: i64) -> Product {
        Product::new(ProductId::new(id).unwrap(), ProductPrice::flat(usd_money(price)))
    }

    fn line_item(id: &str, quantity: i64, price: i64) -> LineItem {
        LineItem::new(ProductId::new(id).unwrap(), quantity, usd_money(price))
    }

    fn persisted_cart() -> ShoppingCart {
        ShoppingCart::persisted(CartId::new("cart-1").unwrap(), usd(), en_us())
    }

    fn shipping_method(code: &str, option: &str, price: f64) -> CartShippingMethod {
        CartShippingMethod {
            shipment_method_code: Some(code.to_string()),
            option_name: Some(option.to_string()),
            price: Some(price),
            ..Default::default()
        }
    }

    fn shipment(code: Option<&str>, option: &str, price: i64) -> Shipment {
        let mut shipment = Shipment::new(&usd());
        shipment.shipment_method_code = code.map(str::to_string);
        shipment.shipment_method_option = Some(option.to_string());
        shipment.shipping_price = usd_money(price);
        shipment
    }

    type TestValidator = CartValidator<FakeCatalog, FakeCartApi, NoCache>;

    fn validator(products: Vec<Product>, methods: Vec<CartShippingMethod>) -> TestValidator {
        CartValidator::new(
            Arc::new(FakeCatalog::new(products)),
            Arc::new(FakeCartApi::new(methods)),
            Arc::new(NoCache {
                lookups: AtomicUsize::new(0),
            }),
        )
    }

    #[tokio::test]
    async fn test_transient_cart_skips_collaborators() {
        let validator = validator(vec![], vec![]);
        let mut cart = ShoppingCart::new(usd(), en_us());
        cart.add_item(line_item("p-1", 1, 10));
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(validator.catalog.calls.load(Ordering::SeqCst), 0);
        assert_eq!(validator.cart_api.calls.load(Ordering::SeqCst), 0);
        assert_eq!(validator.cache.lookups.load(Ordering::SeqCst), 0);
        assert!(!cart.has_validation_errors());
        assert!(!cart.has_validation_warnings());
    }

    #[test]
    fn test_missing_product_is_unavailable() {
        let mut item = line_item("p-1", 1, 10);
        validate_line_item(&mut item, None);

        assert_eq!(item.validation_errors, vec![ValidationError::ProductUnavailable]);
        assert!(item.validation_warnings.is_empty());
    }

    #[test]
    fn test_unavailable_product_skips_other_checks() {
        let mut inactive = product("p-1", 99).with_inventory(Inventory {
            in_stock_quantity: Some(0),
            ..Default::default()
        });
        inactive.is_active = false;

        let mut item = line_item("p-1", 5, 10);
        validate_line_item(&mut item, Some(&inactive));

        assert_eq!(item.validation_errors, vec![ValidationError::ProductUnavailable]);
        assert!(item.validation_warnings.is_empty());
        assert_eq!(item.sale_price, usd_money(10));
    }

    #[test]
    fn test_quantity_exceeding_stock() {
        let stocked = product("p-1", 10).with_inventory(Inventory {
            in_stock_quantity: Some(10),
            reserved_quantity: Some(3),
            ..Default::default()
        });

        let mut item = line_item("p-1", 8, 10).with_validation_type(ValidationType::Quantity);
        validate_line_item(&mut item, Some(&stocked));
        assert_eq!(
            item.validation_errors,
            vec![ValidationError::ProductQuantity { available_quantity: 7 }]
        );

        let mut item = line_item("p-1", 7, 10).with_validation_type(ValidationType::Quantity);
        validate_line_item(&mut item, Some(&stocked));
        assert!(item.validation_errors.is_empty());
    }

    #[test]
    fn test_quantity_not_checked_in_price_mode() {
        let stocked = product("p-1", 10).with_inventory(Inventory {
            in_stock_quantity: Some(1),
            ..Default::default()
        });

        let mut item = line_item("p-1", 8, 10).with_validation_type(ValidationType::Price);
        validate_line_item(&mut item, Some(&stocked));
        assert!(item.validation_errors.is_empty());
    }

    #[test]
    fn test_unknown_stock_is_not_checked() {
        let untracked = product("p-1", 10).with_inventory(Inventory::default());

        let mut item = line_item("p-1", 1000, 10);
        validate_line_item(&mut item, Some(&untracked));
        assert!(item.validation_errors.is_empty());
    }

    #[test]
    fn test_price_change_updates_sale_price_only() {
        let mut repriced = product("p-1", 12);
        repriced.price.tier_prices = vec![TierPrice {
            quantity: 2,
            price: usd_money(11),
            price_with_tax: usd_money(13),
            discount_amount: Money::zero(&usd()),
        }];

        let mut item = line_item("p-1", 2, 10).with_placed_price_with_tax(usd_money(12));
        validate_line_item(&mut item, Some(&repriced));

        assert_eq!(
            item.validation_warnings,
            vec![ValidationError::ProductPrice {
                old_price: usd_money(10),
                old_price_with_tax: usd_money(12),
            }]
        );
        assert_eq!(item.sale_price, usd_money(11));
        assert_eq!(item.sale_price_with_tax, usd_money(13));
        assert_eq!(item.placed_price, usd_money(10));
        assert!(item.validation_errors.is_empty());
    }

    #[test]
    fn test_price_not_checked_in_quantity_mode() {
        let mut item = line_item("p-1", 1, 10).with_validation_type(ValidationType::Quantity);
        validate_line_item(&mut item, Some(&product("p-1", 20)));
        assert!(item.validation_warnings.is_empty());
    }

    #[tokio::test]
    async fn test_validation_is_idempotent() {
        let validator = validator(
            vec![product("p-1", 12)],
            vec![shipping_method("FixedRate", "Ground", 5.0)],
        );
        let mut cart = persisted_cart();
        cart.add_item(line_item("p-1", 1, 10));
        cart.add_item(line_item("p-2", 1, 10));
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();
        let first = cart.clone();
        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(cart, first);
        assert_eq!(cart.items[0].validation_warnings.len(), 1);
        assert_eq!(cart.items[1].validation_errors.len(), 1);
    }

    #[tokio::test]
    async fn test_no_shipping_methods_stops_after_first_shipment() {
        let validator = validator(vec![], vec![]);
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));
        let mut second = shipment(Some("FixedRate"), "Air", 9);
        second.validation_errors.push(ValidationError::ProductUnavailable);
        cart.add_shipment(second);

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(
            cart.shipments[0].validation_warnings,
            vec![ValidationError::ShippingUnavailable]
        );
        // The second shipment is never visited, so its stale error survives.
        assert_eq!(
            cart.shipments[1].validation_errors,
            vec![ValidationError::ProductUnavailable]
        );
        assert_eq!(validator.cart_api.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_full_shipment_pass_when_not_halting() {
        let validator = validator(vec![], vec![]).with_config(CartValidatorConfig {
            halt_on_unavailable_shipping: false,
            ..Default::default()
        });
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));
        cart.add_shipment(shipment(Some("FixedRate"), "Air", 9));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert!(cart
            .shipments
            .iter()
            .all(|s| s.validation_warnings == vec![ValidationError::ShippingUnavailable]));
        assert_eq!(validator.cart_api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_unmatched_shipping_method() {
        let validator = validator(vec![], vec![shipping_method("Pickup", "Store", 0.0)]);
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(
            cart.shipments[0].validation_warnings,
            vec![ValidationError::ShippingUnavailable]
        );
    }

    #[tokio::test]
    async fn test_shipment_without_method_is_left_alone() {
        let validator = validator(vec![], vec![shipping_method("FixedRate", "Ground", 7.0)]);
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(None, "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(cart.shipments.len(), 1);
        assert!(cart.shipments[0].validation_warnings.is_empty());
    }

    #[tokio::test]
    async fn test_shipping_price_change_replaces_shipments() {
        let validator = validator(vec![], vec![shipping_method("FixedRate", "Ground", 7.0)]);
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(cart.shipments.len(), 1);
        let replaced = &cart.shipments[0];
        assert_eq!(replaced.shipping_price, usd_money(7));
        assert_eq!(replaced.shipment_method_code.as_deref(), Some("FixedRate"));
        assert_eq!(
            replaced.validation_warnings,
            vec![ValidationError::ShippingPrice { old_price: usd_money(5) }]
        );
    }

    #[tokio::test]
    async fn test_last_repriced_shipment_wins() {
        let validator = validator(
            vec![],
            vec![
                shipping_method("Courier", "Express", 7.0),
                shipping_method("FixedRate", "Ground", 9.0),
            ],
        );
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("Courier"), "Express", 1));
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 1));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(cart.shipments.len(), 1);
        let replaced = &cart.shipments[0];
        assert_eq!(replaced.shipment_method_code.as_deref(), Some("FixedRate"));
        assert_eq!(replaced.shipping_price, usd_money(9));
        assert_eq!(
            replaced.validation_warnings,
            vec![ValidationError::ShippingPrice { old_price: usd_money(1) }]
        );
        assert_eq!(validator.cart_api.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_shipping_price_ignored_without_price_checks() {
        let validator = validator(vec![], vec![shipping_method("FixedRate", "Ground", 7.0)]);
        let mut cart = persisted_cart().with_validation_type(ValidationType::Quantity);
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        validator.validate(&mut cart, &context()).await.unwrap();

        assert_eq!(cart.shipments[0].shipping_price, usd_money(5));
        assert!(cart.shipments[0].validation_warnings.is_empty());
    }

    #[tokio::test]
    async fn test_cart_api_failure_propagates() {
        let validator = CartValidator::new(
            Arc::new(FakeCatalog::new(vec![])),
            Arc::new(FailingCartApi),
            Arc::new(NoCache {
                lookups: AtomicUsize::new(0),
            }),
        );
        let mut cart = persisted_cart();
        cart.add_shipment(shipment(Some("FixedRate"), "Ground", 5));

        let result = validator.validate(&mut cart, &context()).await;

        assert!(matches!(result, Err(CartValidationError::ShippingMethods(_))));
    }
}
