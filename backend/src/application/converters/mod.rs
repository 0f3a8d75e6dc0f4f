// Explicit field-by-field mappings between API wire models and view models
mod address;
pub mod cart_shipment;
pub mod common;
pub mod order_shipment;

pub use cart_shipment::{
    cart_discount_to_web, cart_shipment_to_web, cart_shipping_method_to_web,
    cart_tax_detail_to_web, discount_to_cart_dto, shipment_to_cart_dto,
    shipment_update_to_shipment, tax_detail_to_cart_dto,
};
pub use common::{resolve_currency, to_money, to_raw_amount};
pub use order_shipment::{order_shipment_to_web, CurrencyScope};
