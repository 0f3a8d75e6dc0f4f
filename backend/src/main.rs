use anyhow::{bail, Context, Result};
use std::sync::Arc;
use storefront::application::{CartValidator, StoreContext};
use storefront::domain::{Currency, Language, ShoppingCart};
use storefront::infrastructure::{
    load_json, CacheConfig, InMemoryCacheManager, SnapshotCartApi, SnapshotCatalog,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: storefront <cart.json> <catalog.json> <shipping-methods.json> [currency] [language]";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!(USAGE);
    }

    let mut cart: ShoppingCart = load_json(&args[0])
        .await
        .context("Failed to load cart")?;
    let catalog = SnapshotCatalog::load(&args[1])
        .await
        .context("Failed to load catalog")?;
    let cart_api = SnapshotCartApi::load(&args[2])
        .await
        .context("Failed to load shipping methods")?;

    let language = match args.get(4) {
        Some(culture_name) => Language::new(culture_name.as_str())?,
        None => cart.language.clone(),
    };
    let currency = match args.get(3) {
        Some(code) => Currency::new(&language, code),
        None => cart.currency.clone(),
    };
    let ctx = StoreContext::new(currency, language);

    let cache = InMemoryCacheManager::new(CacheConfig::from_env());
    let validator = CartValidator::new(Arc::new(catalog), Arc::new(cart_api), Arc::new(cache));

    validator
        .validate(&mut cart, &ctx)
        .await
        .context("Cart validation failed")?;

    info!(
        "Cart has {} error(s) and {} warning(s)",
        count_errors(&cart),
        count_warnings(&cart)
    );

    println!("{}", serde_json::to_string_pretty(&cart)?);
    Ok(())
}

fn count_errors(cart: &ShoppingCart) -> usize {
    cart.items.iter().map(|i| i.validation_errors.len()).sum::<usize>()
        + cart.shipments.iter().map(|s| s.validation_errors.len()).sum::<usize>()
}

fn count_warnings(cart: &ShoppingCart) -> usize {
    cart.items.iter().map(|i| i.validation_warnings.len()).sum::<usize>()
        + cart.shipments.iter().map(|s| s.validation_warnings.len()).sum::<usize>()
}
