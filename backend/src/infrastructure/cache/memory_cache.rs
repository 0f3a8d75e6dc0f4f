use crate::application::ports::CacheManager;
use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, warn};

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
const DEFAULT_SWEEP_INTERVAL: usize = 64;
const TTL_ENV_VAR: &str = "STOREFRONT_CACHE_TTL_SECS";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cached value for '{key}' in region '{region}' has a different type")]
    TypeMismatch { region: String, key: String },
}

/// Configuration for the in-memory cache
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Lifetime of entries in regions without an override
    pub default_ttl: Duration,
    /// Expired entries are dropped every this many lookups; zero disables it
    pub sweep_interval: usize,
    region_ttls: HashMap<String, Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        CacheConfig {
            default_ttl: DEFAULT_TTL,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            region_ttls: HashMap::new(),
        }
    }
}

impl CacheConfig {
    pub fn with_default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }

    pub fn with_sweep_interval(mut self, lookups: usize) -> Self {
        self.sweep_interval = lookups;
        self
    }

    pub fn with_region_ttl(mut self, region: impl Into<String>, ttl: Duration) -> Self {
        self.region_ttls.insert(region.into(), ttl);
        self
    }

    /// Default configuration with the default TTL taken from
    /// `STOREFRONT_CACHE_TTL_SECS` when it holds a number of seconds
    pub fn from_env() -> Self {
        let config = CacheConfig::default();
        match std::env::var(TTL_ENV_VAR) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => config.with_default_ttl(Duration::from_secs(secs)),
                Err(_) => {
                    warn!("Ignoring invalid {}: {:?}", TTL_ENV_VAR, raw);
                    config
                }
            },
            Err(_) => config,
        }
    }

    pub fn ttl_for(&self, region: &str) -> Duration {
        self.region_ttls
            .get(region)
            .copied()
            .unwrap_or(self.default_ttl)
    }
}

type CachedValue = (Instant, Arc<dyn Any + Send + Sync>);

/// One cache entry; the cell is filled by the first caller that misses
#[derive(Default)]
struct CacheSlot {
    cell: OnceCell<CachedValue>,
}

impl CacheSlot {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.cell
            .get()
            .is_some_and(|(stored_at, _)| stored_at.elapsed() >= ttl)
    }
}

/// Process-local cache manager
///
/// Concurrent lookups of the same key share one producer run. A failed
/// producer run drops the entry so the next lookup retries. Expired entries
/// are swept out periodically.
pub struct InMemoryCacheManager {
    entries: DashMap<(String, String), Arc<CacheSlot>>,
    lookups: AtomicUsize,
    config: CacheConfig,
}

impl InMemoryCacheManager {
    pub fn new(config: CacheConfig) -> Self {
        InMemoryCacheManager {
            entries: DashMap::new(),
            lookups: AtomicUsize::new(0),
            config,
        }
    }

    /// Drop a single entry, returning whether it existed
    pub fn invalidate(&self, key: &str, region: &str) -> bool {
        self.entries
            .remove(&(region.to_string(), key.to_string()))
            .is_some()
    }

    /// Drop every entry of a region, returning how many were removed
    pub fn clear_region(&self, region: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(entry_region, _), _| entry_region != region);
        let removed = before.saturating_sub(self.entries.len());
        debug!("Cleared {} entries from cache region {}", removed, region);
        removed
    }

    /// Drop every expired entry, returning how many were removed
    pub fn evict_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|(region, _), slot| !slot.is_expired(self.config.ttl_for(region)));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            debug!("Evicted {} expired cache entries", removed);
        }
        removed
    }

    fn sweep_if_due(&self) {
        let interval = self.config.sweep_interval;
        if interval == 0 {
            return;
        }
        let lookups = self.lookups.fetch_add(1, Ordering::Relaxed) + 1;
        if lookups % interval == 0 {
            self.evict_expired();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn slot(&self, key: &str, region: &str) -> Arc<CacheSlot> {
        let ttl = self.config.ttl_for(region);
        let mut entry = self
            .entries
            .entry((region.to_string(), key.to_string()))
            .or_default();

        if entry.is_expired(ttl) {
            debug!("Cache entry expired: {}/{}", region, key);
            *entry = Arc::new(CacheSlot::default());
        }

        Arc::clone(entry.value())
    }
}

impl Default for InMemoryCacheManager {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

#[async_trait]
impl CacheManager for InMemoryCacheManager {
    async fn get_or_add<T, F, Fut>(&self, key: &str, region: &str, producer: F) -> Result<T>
    where
        T: Clone + Send + Sync + 'static,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = Result<T>> + Send,
    {
        self.sweep_if_due();
        let slot = self.slot(key, region);

        if slot.cell.initialized() {
            debug!("Cache hit: {}/{}", region, key);
        }

        let populated = slot
            .cell
            .get_or_try_init(move || async move {
                debug!("Cache miss: {}/{}", region, key);
                let value: Arc<dyn Any + Send + Sync> = Arc::new(producer().await?);
                Ok::<CachedValue, anyhow::Error>((Instant::now(), value))
            })
            .await;

        let (_, value) = match populated {
            Ok(entry) => entry,
            Err(err) => {
                self.entries
                    .remove_if(&(region.to_string(), key.to_string()), |_, current| {
                        Arc::ptr_eq(current, &slot)
                    });
                return Err(err);
            }
        };

        value.downcast_ref::<T>().cloned().ok_or_else(|| {
            CacheError::TypeMismatch {
                region: region.to_string(),
                key: key.to_string(),
            }
            .into()
        })
    }
}
