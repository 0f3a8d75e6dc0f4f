use crate::application::dto::CartShippingMethod;
use crate::domain::value_objects::CartId;
use anyhow::Result;
use async_trait::async_trait;

/// Client of the cart service API
#[async_trait]
pub trait CartApi: Send + Sync {
    /// Shipping methods currently available for the cart
    async fn get_shipment_methods(&self, cart_id: &CartId) -> Result<Vec<CartShippingMethod>>;
}
