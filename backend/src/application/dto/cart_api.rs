/// Wire models of the cart service API
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddress {
    pub address_type: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub organization: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub region_id: Option<String>,
    pub region_name: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub country_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTaxDetail {
    pub name: Option<String>,
    pub rate: Option<f64>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartDiscount {
    pub promotion_id: Option<String>,
    pub coupon: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartShipmentItem {
    pub id: Option<String>,
    pub line_item_id: Option<String>,
    pub barcode: Option<String>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartShipment {
    pub id: Option<String>,
    pub shipment_method_code: Option<String>,
    pub shipment_method_option: Option<String>,
    pub fulfillment_center_id: Option<String>,
    pub delivery_address: Option<CartAddress>,
    pub currency: Option<String>,
    pub shipping_price: Option<f64>,
    pub tax_total: Option<f64>,
    pub discount_total: Option<f64>,
    pub total: Option<f64>,
    pub tax_type: Option<String>,
    pub weight_unit: Option<String>,
    pub weight: Option<f64>,
    pub measure_unit: Option<String>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub items: Option<Vec<CartShipmentItem>>,
    pub tax_details: Option<Vec<CartTaxDetail>>,
    pub discounts: Option<Vec<CartDiscount>>,
}

/// A shipping method the cart service offers for a cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartShippingMethod {
    pub shipment_method_code: Option<String>,
    pub name: Option<String>,
    pub option_name: Option<String>,
    pub option_description: Option<String>,
    pub logo_url: Option<String>,
    pub priority: Option<i32>,
    pub currency: Option<String>,
    pub price: Option<f64>,
}
