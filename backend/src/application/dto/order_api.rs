/// Wire models of the order service API
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAddress {
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
pub struct OrderTaxDetail {
    pub name: Option<String>,
    pub rate: Option<f64>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDiscount {
    pub promotion_id: Option<String>,
    pub coupon: Option<String>,
    pub description: Option<String>,
    pub currency: Option<String>,
    pub discount_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDynamicPropertyValue {
    pub locale: Option<String>,
    pub value: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDynamicProperty {
    pub name: Option<String>,
    pub value_type: Option<String>,
    pub is_array: Option<bool>,
    pub is_dictionary: Option<bool>,
    pub values: Option<Vec<OrderDynamicPropertyValue>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOperation {
    pub id: Option<String>,
    pub number: Option<String>,
    pub operation_type: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub is_approved: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub created_date: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub sum: Option<f64>,
    pub tax: Option<f64>,
    pub children_operations: Option<Vec<OrderOperation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPaymentIn {
    pub id: Option<String>,
    pub number: Option<String>,
    pub gateway_code: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<String>,
    pub outer_id: Option<String>,
    pub is_approved: Option<bool>,
    pub incoming_date: Option<DateTime<Utc>>,
    pub currency: Option<String>,
    pub sum: Option<f64>,
    pub tax: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemDto {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub currency: Option<String>,
    pub price: Option<f64>,
    pub price_with_tax: Option<f64>,
    pub discount_amount: Option<f64>,
    pub tax_total: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipmentItemDto {
    pub id: Option<String>,
    pub line_item_id: Option<String>,
    pub barcode: Option<String>,
    pub quantity: Option<i64>,
    pub line_item: Option<OrderLineItemDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipmentPackage {
    pub id: Option<String>,
    pub barcode: Option<String>,
    pub package_type: Option<String>,
    pub weight_unit: Option<String>,
    pub weight: Option<f64>,
    pub items: Option<Vec<OrderShipmentItemDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShippingMethod {
    pub code: Option<String>,
    pub name: Option<String>,
    pub option_name: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipmentDto {
    pub id: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub is_approved: Option<bool>,
    pub is_cancelled: Option<bool>,
    pub cancel_reason: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub organization_id: Option<String>,
    pub fulfillment_center_id: Option<String>,
    pub employee_id: Option<String>,
    pub currency: Option<String>,
    pub shipping_method: Option<OrderShippingMethod>,
    pub delivery_address: Option<OrderAddress>,
    pub discount: Option<OrderDiscount>,
    pub discount_amount: Option<f64>,
    pub sum: Option<f64>,
    pub tax: Option<f64>,
    pub children_operations: Option<Vec<OrderOperation>>,
    pub dynamic_properties: Option<Vec<OrderDynamicProperty>>,
    pub in_payments: Option<Vec<OrderPaymentIn>>,
    pub items: Option<Vec<OrderShipmentItemDto>>,
    pub packages: Option<Vec<OrderShipmentPackage>>,
    pub tax_details: Option<Vec<OrderTaxDetail>>,
}
