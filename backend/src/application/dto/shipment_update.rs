use crate::domain::entities::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Shipment changes posted by the storefront checkout form
///
/// Every field is optional; only the ones present are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentUpdateRequest {
    pub id: Option<String>,
    pub shipment_method_code: Option<String>,
    pub shipment_method_option: Option<String>,
    pub fulfillment_center_id: Option<String>,
    pub delivery_address: Option<Address>,
    pub tax_type: Option<String>,
    pub weight_unit: Option<String>,
    pub weight: Option<Decimal>,
    pub measure_unit: Option<String>,
    pub height: Option<Decimal>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
}

impl ShipmentUpdateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_method(mut self, code: impl Into<String>, option: Option<String>) -> Self {
        self.shipment_method_code = Some(code.into());
        self.shipment_method_option = option;
        self
    }

    pub fn with_delivery_address(mut self, address: Address) -> Self {
        self.delivery_address = Some(address);
        self
    }
}
