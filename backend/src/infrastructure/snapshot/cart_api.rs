use super::loader::{load_json, SnapshotError};
use crate::application::dto::CartShippingMethod;
use crate::application::ports::CartApi;
use crate::domain::value_objects::CartId;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Shipping methods per cart, served from a JSON object keyed by cart id
pub struct SnapshotCartApi {
    methods: HashMap<String, Vec<CartShippingMethod>>,
}

impl SnapshotCartApi {
    pub fn from_methods(methods: HashMap<String, Vec<CartShippingMethod>>) -> Self {
        SnapshotCartApi { methods }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let methods: HashMap<String, Vec<CartShippingMethod>> = load_json(path).await?;
        info!("Loaded shipping methods for {} carts", methods.len());
        Ok(Self::from_methods(methods))
    }
}

#[async_trait]
impl CartApi for SnapshotCartApi {
    async fn get_shipment_methods(&self, cart_id: &CartId) -> Result<Vec<CartShippingMethod>> {
        let methods = self.methods.get(cart_id.as_str()).cloned().unwrap_or_default();
        debug!("{} shipping methods on record for cart {}", methods.len(), cart_id);
        Ok(methods)
    }
}
