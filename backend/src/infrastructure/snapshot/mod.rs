/// JSON snapshot adapters standing in for the remote commerce APIs
mod cart_api;
mod catalog;
mod loader;

pub use cart_api::SnapshotCartApi;
pub use catalog::SnapshotCatalog;
pub use loader::{load_json, SnapshotError};
