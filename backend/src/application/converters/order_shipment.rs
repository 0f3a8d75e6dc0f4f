/// Conversions from order service shipments into order view models
use super::common::{resolve_currency, to_money};
use crate::application::dto::{
    OrderDiscount, OrderDynamicProperty, OrderLineItemDto, OrderOperation, OrderPaymentIn,
    OrderShipmentDto, OrderShipmentItemDto, OrderShipmentPackage, OrderTaxDetail,
};
use crate::domain::entities::{Address, Discount, TaxDetail};
use crate::domain::order::{
    DynamicProperty, LocalizedValue, Operation, OrderLineItem, OrderShipment, OrderShipmentItem,
    PaymentIn, ShipmentPackage,
};
use crate::domain::value_objects::{Currency, Language};

/// Currencies known to the store plus the language used for unknown ones
#[derive(Debug, Clone, Copy)]
pub struct CurrencyScope<'a> {
    pub available: &'a [Currency],
    pub language: &'a Language,
}

impl<'a> CurrencyScope<'a> {
    pub fn new(available: &'a [Currency], language: &'a Language) -> Self {
        Self { available, language }
    }

    fn resolve(&self, code: Option<&str>) -> Currency {
        resolve_currency(self.available, self.language, code)
    }
}

fn convert_all<T, U>(source: Option<&Vec<T>>, convert: impl Fn(&T) -> U) -> Vec<U> {
    source
        .map(|values| values.iter().map(convert).collect())
        .unwrap_or_default()
}

pub fn order_tax_detail_to_web(dto: &OrderTaxDetail, currency: &Currency) -> TaxDetail {
    TaxDetail {
        name: dto.name.clone(),
        rate: to_money(dto.rate, currency),
        amount: to_money(dto.amount, currency),
    }
}

pub fn order_discount_to_web(dto: &OrderDiscount, scope: CurrencyScope<'_>) -> Discount {
    let currency = scope.resolve(dto.currency.as_deref());
    Discount {
        promotion_id: dto.promotion_id.clone(),
        coupon: dto.coupon.clone(),
        description: dto.description.clone(),
        amount: to_money(dto.discount_amount, &currency),
    }
}

pub fn order_dynamic_property_to_web(dto: &OrderDynamicProperty) -> DynamicProperty {
    DynamicProperty {
        name: dto.name.clone(),
        value_type: dto.value_type.clone(),
        is_array: dto.is_array.unwrap_or_default(),
        is_dictionary: dto.is_dictionary.unwrap_or_default(),
        values: convert_all(dto.values.as_ref(), |v| LocalizedValue {
            locale: v.locale.clone(),
            value: v.value.clone().unwrap_or(serde_json::Value::Null),
        }),
    }
}

pub fn order_operation_to_web(dto: &OrderOperation, scope: CurrencyScope<'_>) -> Operation {
    let currency = scope.resolve(dto.currency.as_deref());
    Operation {
        id: dto.id.clone(),
        number: dto.number.clone(),
        operation_type: dto.operation_type.clone(),
        status: dto.status.clone(),
        comment: dto.comment.clone(),
        is_approved: dto.is_approved.unwrap_or_default(),
        is_cancelled: dto.is_cancelled.unwrap_or_default(),
        created_date: dto.created_date,
        sum: to_money(dto.sum, &currency),
        tax: to_money(dto.tax, &currency),
        children_operations: convert_all(dto.children_operations.as_ref(), |child| {
            order_operation_to_web(child, scope)
        }),
        currency,
    }
}

pub fn order_payment_to_web(dto: &OrderPaymentIn, scope: CurrencyScope<'_>) -> PaymentIn {
    let currency = scope.resolve(dto.currency.as_deref());
    PaymentIn {
        id: dto.id.clone(),
        number: dto.number.clone(),
        gateway_code: dto.gateway_code.clone(),
        status: dto.status.clone(),
        purpose: dto.purpose.clone(),
        outer_id: dto.outer_id.clone(),
        is_approved: dto.is_approved.unwrap_or_default(),
        incoming_date: dto.incoming_date,
        sum: to_money(dto.sum, &currency),
        tax: to_money(dto.tax, &currency),
        currency,
    }
}

pub fn order_line_item_to_web(dto: &OrderLineItemDto, scope: CurrencyScope<'_>) -> OrderLineItem {
    let currency = scope.resolve(dto.currency.as_deref());
    OrderLineItem {
        id: dto.id.clone(),
        product_id: dto.product_id.clone(),
        sku: dto.sku.clone(),
        name: dto.name.clone(),
        quantity: dto.quantity.unwrap_or_default(),
        price: to_money(dto.price, &currency),
        price_with_tax: to_money(dto.price_with_tax, &currency),
        discount_amount: to_money(dto.discount_amount, &currency),
        tax_total: to_money(dto.tax_total, &currency),
        currency,
    }
}

pub fn order_shipment_item_to_web(
    dto: &OrderShipmentItemDto,
    scope: CurrencyScope<'_>,
) -> OrderShipmentItem {
    OrderShipmentItem {
        id: dto.id.clone(),
        line_item_id: dto.line_item_id.clone(),
        barcode: dto.barcode.clone(),
        quantity: dto.quantity.unwrap_or_default(),
        line_item: dto
            .line_item
            .as_ref()
            .map(|li| order_line_item_to_web(li, scope)),
    }
}

pub fn order_package_to_web(dto: &OrderShipmentPackage, scope: CurrencyScope<'_>) -> ShipmentPackage {
    ShipmentPackage {
        id: dto.id.clone(),
        barcode: dto.barcode.clone(),
        package_type: dto.package_type.clone(),
        weight_unit: dto.weight_unit.clone(),
        weight: dto.weight,
        items: convert_all(dto.items.as_ref(), |item| order_shipment_item_to_web(item, scope)),
    }
}

/// Convert an order service shipment into the order view model
///
/// The shipment currency is looked up among `available_currencies` by code;
/// an unknown code produces a new currency for `language`.
pub fn order_shipment_to_web(
    dto: &OrderShipmentDto,
    available_currencies: &[Currency],
    language: &Language,
) -> OrderShipment {
    let scope = CurrencyScope::new(available_currencies, language);
    let currency = scope.resolve(dto.currency.as_deref());

    OrderShipment {
        id: dto.id.clone(),
        number: dto.number.clone(),
        status: dto.status.clone(),
        comment: dto.comment.clone(),
        is_approved: dto.is_approved.unwrap_or_default(),
        is_cancelled: dto.is_cancelled.unwrap_or_default(),
        cancel_reason: dto.cancel_reason.clone(),
        created_date: dto.created_date,
        organization_id: dto.organization_id.clone(),
        fulfillment_center_id: dto.fulfillment_center_id.clone(),
        employee_id: dto.employee_id.clone(),
        shipment_method_code: dto.shipping_method.as_ref().and_then(|m| m.code.clone()),
        shipment_method_option: dto
            .shipping_method
            .as_ref()
            .and_then(|m| m.option_name.clone()),
        delivery_address: dto.delivery_address.as_ref().map(Address::from),
        discount: dto
            .discount
            .as_ref()
            .map(|d| order_discount_to_web(d, scope)),
        discount_amount: to_money(dto.discount_amount, &currency),
        sum: to_money(dto.sum, &currency),
        tax: to_money(dto.tax, &currency),
        children_operations: convert_all(dto.children_operations.as_ref(), |op| {
            order_operation_to_web(op, scope)
        }),
        dynamic_properties: convert_all(dto.dynamic_properties.as_ref(), order_dynamic_property_to_web),
        in_payments: convert_all(dto.in_payments.as_ref(), |p| order_payment_to_web(p, scope)),
        items: convert_all(dto.items.as_ref(), |i| order_shipment_item_to_web(i, scope)),
        packages: convert_all(dto.packages.as_ref(), |p| order_package_to_web(p, scope)),
        tax_details: convert_all(dto.tax_details.as_ref(), |td| {
            order_tax_detail_to_web(td, &currency)
        }),
        currency,
    }
}
