/// Caching infrastructure for catalog lookups
mod memory_cache;

pub use memory_cache::{CacheConfig, CacheError, InMemoryCacheManager};
