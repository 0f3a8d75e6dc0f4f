/// Order view models: shipments of a placed customer order
use super::entities::{Address, Discount, TaxDetail};
use super::value_objects::{Currency, Money};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dynamic (admin-defined) property attached to an order document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicProperty {
    pub name: Option<String>,
    pub value_type: Option<String>,
    pub is_array: bool,
    pub is_dictionary: bool,
    pub values: Vec<LocalizedValue>,
}

/// A property value, optionally bound to a locale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedValue {
    pub locale: Option<String>,
    pub value: serde_json::Value,
}

/// Generic order document nested under another (e.g. a return)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: Option<String>,
    pub number: Option<String>,
    pub operation_type: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub is_approved: bool,
    pub is_cancelled: bool,
    pub created_date: Option<DateTime<Utc>>,
    pub currency: Currency,
    pub sum: Money,
    pub tax: Money,
    pub children_operations: Vec<Operation>,
}

/// An incoming payment registered against an order document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIn {
    pub id: Option<String>,
    pub number: Option<String>,
    pub gateway_code: Option<String>,
    pub status: Option<String>,
    pub purpose: Option<String>,
    pub outer_id: Option<String>,
    pub is_approved: bool,
    pub incoming_date: Option<DateTime<Utc>>,
    pub currency: Currency,
    pub sum: Money,
    pub tax: Money,
}

/// An ordered line item as it appears in a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub id: Option<String>,
    pub product_id: Option<String>,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: i64,
    pub currency: Currency,
    pub price: Money,
    pub price_with_tax: Money,
    pub discount_amount: Money,
    pub tax_total: Money,
}

/// A quantity of an order line item placed in a shipment or package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipmentItem {
    pub id: Option<String>,
    pub line_item_id: Option<String>,
    pub barcode: Option<String>,
    pub quantity: i64,
    pub line_item: Option<OrderLineItem>,
}

/// A physical package in a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentPackage {
    pub id: Option<String>,
    pub barcode: Option<String>,
    pub package_type: Option<String>,
    pub weight_unit: Option<String>,
    pub weight: Option<f64>,
    pub items: Vec<OrderShipmentItem>,
}

/// A shipment of a placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipment {
    pub id: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub comment: Option<String>,
    pub is_approved: bool,
    pub is_cancelled: bool,
    pub cancel_reason: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub organization_id: Option<String>,
    pub fulfillment_center_id: Option<String>,
    pub employee_id: Option<String>,
    pub shipment_method_code: Option<String>,
    pub shipment_method_option: Option<String>,
    pub currency: Currency,
    pub delivery_address: Option<Address>,
    pub discount: Option<Discount>,
    pub discount_amount: Money,
    pub sum: Money,
    pub tax: Money,
    pub children_operations: Vec<Operation>,
    pub dynamic_properties: Vec<DynamicProperty>,
    pub in_payments: Vec<PaymentIn>,
    pub items: Vec<OrderShipmentItem>,
    pub packages: Vec<ShipmentPackage>,
    pub tax_details: Vec<TaxDetail>,
}
