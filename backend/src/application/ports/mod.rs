// Traits at the boundary to the commerce platform and shared services
pub mod cache;
pub mod cart_api;
pub mod catalog;

pub use cache::CacheManager;
pub use cart_api::CartApi;
pub use catalog::{CatalogSearchService, ItemResponseGroup};
