/// Conversions between cart service shipments and storefront shipments
use super::common::{
    from_decimal, resolve_currency, to_decimal, to_money, to_optional_money, to_raw_amount,
};
use crate::application::dto::{
    CartAddress, CartDiscount, CartShipment, CartShipmentItem, CartShippingMethod, CartTaxDetail,
    ShipmentUpdateRequest,
};
use crate::domain::aggregates::ShoppingCart;
use crate::domain::entities::{Address, Discount, Shipment, ShipmentItem, ShippingMethod, TaxDetail};
use crate::domain::value_objects::{Currency, Language};

pub fn cart_tax_detail_to_web(dto: &CartTaxDetail, currency: &Currency) -> TaxDetail {
    TaxDetail {
        name: dto.name.clone(),
        rate: to_money(dto.rate, currency),
        amount: to_money(dto.amount, currency),
    }
}

pub fn tax_detail_to_cart_dto(tax_detail: &TaxDetail) -> CartTaxDetail {
    CartTaxDetail {
        name: tax_detail.name.clone(),
        rate: to_raw_amount(&tax_detail.rate),
        amount: to_raw_amount(&tax_detail.amount),
    }
}

pub fn cart_discount_to_web(
    dto: &CartDiscount,
    available_currencies: &[Currency],
    language: &Language,
) -> Discount {
    let currency = resolve_currency(available_currencies, language, dto.currency.as_deref());
    Discount {
        promotion_id: dto.promotion_id.clone(),
        coupon: dto.coupon.clone(),
        description: dto.description.clone(),
        amount: to_money(dto.discount_amount, &currency),
    }
}

pub fn discount_to_cart_dto(discount: &Discount) -> CartDiscount {
    CartDiscount {
        promotion_id: discount.promotion_id.clone(),
        coupon: discount.coupon.clone(),
        description: discount.description.clone(),
        currency: Some(discount.amount.currency().code().to_string()),
        discount_amount: to_raw_amount(&discount.amount),
    }
}

impl From<&CartShipmentItem> for ShipmentItem {
    fn from(dto: &CartShipmentItem) -> Self {
        ShipmentItem {
            id: dto.id.clone(),
            line_item_id: dto.line_item_id.clone(),
            barcode: dto.barcode.clone(),
            quantity: dto.quantity.unwrap_or_default(),
        }
    }
}

impl From<&ShipmentItem> for CartShipmentItem {
    fn from(item: &ShipmentItem) -> Self {
        CartShipmentItem {
            id: item.id.clone(),
            line_item_id: item.line_item_id.clone(),
            barcode: item.barcode.clone(),
            quantity: Some(item.quantity),
        }
    }
}

/// Convert a cart service shipment into the storefront model
///
/// Amounts are taken to be in the cart currency; discounts are resolved
/// against that single currency and the cart language.
pub fn cart_shipment_to_web(dto: &CartShipment, cart: &ShoppingCart) -> Shipment {
    let currency = &cart.currency;
    let mut shipment = Shipment::new(currency);

    shipment.id = dto.id.clone();
    shipment.shipment_method_code = dto.shipment_method_code.clone();
    shipment.shipment_method_option = dto.shipment_method_option.clone();
    shipment.fulfillment_center_id = dto.fulfillment_center_id.clone();
    shipment.tax_type = dto.tax_type.clone();
    shipment.weight_unit = dto.weight_unit.clone();
    shipment.weight = to_decimal(dto.weight);
    shipment.measure_unit = dto.measure_unit.clone();
    shipment.height = to_decimal(dto.height);
    shipment.length = to_decimal(dto.length);
    shipment.width = to_decimal(dto.width);

    shipment.shipping_price = to_money(dto.shipping_price, currency);
    shipment.tax_total = to_optional_money(dto.tax_total, currency);
    shipment.discount_total = to_optional_money(dto.discount_total, currency);

    shipment.delivery_address = dto.delivery_address.as_ref().map(Address::from);

    if let Some(items) = &dto.items {
        shipment.items = items.iter().map(ShipmentItem::from).collect();
    }

    if let Some(tax_details) = &dto.tax_details {
        shipment.tax_details = tax_details
            .iter()
            .map(|td| cart_tax_detail_to_web(td, currency))
            .collect();
    }

    if let Some(discounts) = &dto.discounts {
        let candidates = [currency.clone()];
        shipment.discounts = discounts
            .iter()
            .map(|d| cart_discount_to_web(d, &candidates, &cart.language))
            .collect();
    }

    shipment
}

/// Convert a storefront shipment back into the cart service wire model
pub fn shipment_to_cart_dto(shipment: &Shipment) -> CartShipment {
    CartShipment {
        id: shipment.id.clone(),
        shipment_method_code: shipment.shipment_method_code.clone(),
        shipment_method_option: shipment.shipment_method_option.clone(),
        fulfillment_center_id: shipment.fulfillment_center_id.clone(),
        delivery_address: shipment.delivery_address.as_ref().map(CartAddress::from),
        currency: Some(shipment.currency.code().to_string()),
        shipping_price: to_raw_amount(&shipment.shipping_price),
        tax_total: shipment.tax_total.as_ref().and_then(to_raw_amount),
        discount_total: shipment.discount_total.as_ref().and_then(to_raw_amount),
        total: to_raw_amount(&shipment.total()),
        tax_type: shipment.tax_type.clone(),
        weight_unit: shipment.weight_unit.clone(),
        weight: from_decimal(shipment.weight),
        measure_unit: shipment.measure_unit.clone(),
        height: from_decimal(shipment.height),
        length: from_decimal(shipment.length),
        width: from_decimal(shipment.width),
        items: convert_non_empty(&shipment.items, |item| CartShipmentItem::from(item)),
        tax_details: convert_non_empty(&shipment.tax_details, tax_detail_to_cart_dto),
        discounts: convert_non_empty(&shipment.discounts, discount_to_cart_dto),
    }
}

// Empty collections go back on the wire as absent
fn convert_non_empty<T, U>(values: &[T], convert: impl Fn(&T) -> U) -> Option<Vec<U>> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(convert).collect())
    }
}

/// Convert a shipping method offered by the cart service, priced in `currency`
pub fn cart_shipping_method_to_web(dto: &CartShippingMethod, currency: &Currency) -> ShippingMethod {
    ShippingMethod {
        shipment_method_code: dto.shipment_method_code.clone(),
        name: dto.name.clone(),
        option_name: dto.option_name.clone(),
        option_description: dto.option_description.clone(),
        logo_url: dto.logo_url.clone(),
        priority: dto.priority.unwrap_or_default(),
        currency: currency.clone(),
        price: to_money(dto.price, currency),
    }
}

/// Build a new shipment in `currency` from the fields present in an update
pub fn shipment_update_to_shipment(request: &ShipmentUpdateRequest, currency: &Currency) -> Shipment {
    let mut shipment = Shipment::new(currency);

    if let Some(id) = &request.id {
        shipment.id = Some(id.clone());
    }
    if let Some(code) = &request.shipment_method_code {
        shipment.shipment_method_code = Some(code.clone());
    }
    if let Some(option) = &request.shipment_method_option {
        shipment.shipment_method_option = Some(option.clone());
    }
    if let Some(center) = &request.fulfillment_center_id {
        shipment.fulfillment_center_id = Some(center.clone());
    }
    if let Some(address) = &request.delivery_address {
        shipment.delivery_address = Some(address.clone());
    }
    if let Some(tax_type) = &request.tax_type {
        shipment.tax_type = Some(tax_type.clone());
    }
    if let Some(unit) = &request.weight_unit {
        shipment.weight_unit = Some(unit.clone());
    }
    if let Some(weight) = request.weight {
        shipment.weight = Some(weight);
    }
    if let Some(unit) = &request.measure_unit {
        shipment.measure_unit = Some(unit.clone());
    }
    if let Some(height) = request.height {
        shipment.height = Some(height);
    }
    if let Some(length) = request.length {
        shipment.length = Some(length);
    }
    if let Some(width) = request.width {
        shipment.width = Some(width);
    }

    shipment
}
