use anyhow::Result;
use async_trait::async_trait;
use std::future::Future;

/// Memoizes the results of expensive lookups by key within named regions
#[async_trait]
pub trait CacheManager: Send + Sync {
    /// Return the cached value for `key` in `region`, running `producer` to
    /// populate the entry on a miss
    ///
    /// A failing producer leaves the entry empty and its error is returned.
    async fn get_or_add<T, F, Fut>(&self, key: &str, region: &str, producer: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send;
}
