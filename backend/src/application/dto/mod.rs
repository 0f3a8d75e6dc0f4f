pub mod cart_api;
pub mod order_api;
pub mod shipment_update;

pub use cart_api::{
    CartAddress, CartDiscount, CartShipment, CartShipmentItem, CartShippingMethod, CartTaxDetail,
};
pub use order_api::{
    OrderAddress, OrderDiscount, OrderDynamicProperty, OrderDynamicPropertyValue,
    OrderLineItemDto, OrderOperation, OrderPaymentIn, OrderShipmentDto, OrderShipmentItemDto,
    OrderShipmentPackage, OrderShippingMethod, OrderTaxDetail,
};
pub use shipment_update::ShipmentUpdateRequest;
