pub mod cache;
pub mod snapshot;

pub use cache::{CacheConfig, CacheError, InMemoryCacheManager};
pub use snapshot::{load_json, SnapshotCartApi, SnapshotCatalog, SnapshotError};
