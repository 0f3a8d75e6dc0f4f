/// Domain entities
use super::base::Entity;
use super::validation::ValidationError;
use super::value_objects::{Currency, LineItemId, Money, ProductId, ValidationType};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What an address is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressType {
    Billing,
    Shipping,
    BillingAndShipping,
    Pickup,
}

impl FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Billing" => Ok(AddressType::Billing),
            "Shipping" => Ok(AddressType::Shipping),
            "BillingAndShipping" => Ok(AddressType::BillingAndShipping),
            "Pickup" => Ok(AddressType::Pickup),
            other => Err(format!("Unknown address type: {}", other)),
        }
    }
}

impl AddressType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressType::Billing => "Billing",
            AddressType::Shipping => "Shipping",
            AddressType::BillingAndShipping => "BillingAndShipping",
            AddressType::Pickup => "Pickup",
        }
    }
}

/// A postal address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_type: Option<AddressType>,
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

/// A single tax line (e.g. state tax) applied to a priced entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDetail {
    pub name: Option<String>,
    pub rate: Money,
    pub amount: Money,
}

/// A promotion discount applied to a priced entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub promotion_id: Option<String>,
    pub coupon: Option<String>,
    pub description: Option<String>,
    pub amount: Money,
}

/// A product/quantity entry in a shopping cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: Option<LineItemId>,
    pub product_id: ProductId,
    pub sku: Option<String>,
    pub name: Option<String>,
    pub quantity: i64,
    pub currency: Currency,
    pub list_price: Money,
    pub placed_price: Money,
    pub placed_price_with_tax: Money,
    pub sale_price: Money,
    pub sale_price_with_tax: Money,
    #[serde(default)]
    pub validation_type: ValidationType,
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
    #[serde(default)]
    pub validation_warnings: Vec<ValidationError>,
}

impl LineItem {
    /// Create a line item priced at `placed_price` for every price field
    pub fn new(product_id: ProductId, quantity: i64, placed_price: Money) -> Self {
        LineItem {
            id: None,
            product_id,
            sku: None,
            name: None,
            quantity,
            currency: placed_price.currency().clone(),
            list_price: placed_price.clone(),
            placed_price: placed_price.clone(),
            placed_price_with_tax: placed_price.clone(),
            sale_price: placed_price.clone(),
            sale_price_with_tax: placed_price,
            validation_type: ValidationType::default(),
            validation_errors: Vec::new(),
            validation_warnings: Vec::new(),
        }
    }

    pub fn with_validation_type(mut self, validation_type: ValidationType) -> Self {
        self.validation_type = validation_type;
        self
    }

    pub fn with_placed_price_with_tax(mut self, price: Money) -> Self {
        self.placed_price_with_tax = price;
        self
    }

    /// Drop all errors and warnings from a previous validation run
    pub fn reset_validation(&mut self) {
        self.validation_errors.clear();
        self.validation_warnings.clear();
    }

    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

/// A line item allocated to a shipment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentItem {
    pub id: Option<String>,
    pub line_item_id: Option<String>,
    pub barcode: Option<String>,
    pub quantity: i64,
}

/// A cart shipment as presented by the storefront
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub id: Option<String>,
    pub shipment_method_code: Option<String>,
    pub shipment_method_option: Option<String>,
    pub fulfillment_center_id: Option<String>,
    pub delivery_address: Option<Address>,
    pub currency: Currency,
    pub shipping_price: Money,
    pub tax_total: Option<Money>,
    pub discount_total: Option<Money>,
    pub tax_type: Option<String>,
    pub weight_unit: Option<String>,
    pub weight: Option<Decimal>,
    pub measure_unit: Option<String>,
    pub height: Option<Decimal>,
    pub length: Option<Decimal>,
    pub width: Option<Decimal>,
    #[serde(default)]
    pub items: Vec<ShipmentItem>,
    #[serde(default)]
    pub tax_details: Vec<TaxDetail>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
    #[serde(default)]
    pub validation_errors: Vec<ValidationError>,
    #[serde(default)]
    pub validation_warnings: Vec<ValidationError>,
}

impl Shipment {
    /// Create an empty shipment priced at zero in `currency`, without tax or
    /// discount totals
    pub fn new(currency: &Currency) -> Self {
        Shipment {
            id: None,
            shipment_method_code: None,
            shipment_method_option: None,
            fulfillment_center_id: None,
            delivery_address: None,
            currency: currency.clone(),
            shipping_price: Money::zero(currency),
            tax_total: None,
            discount_total: None,
            tax_type: None,
            weight_unit: None,
            weight: None,
            measure_unit: None,
            height: None,
            length: None,
            width: None,
            items: Vec::new(),
            tax_details: Vec::new(),
            discounts: Vec::new(),
            validation_errors: Vec::new(),
            validation_warnings: Vec::new(),
        }
    }

    /// Shipping price plus tax, less discounts
    ///
    /// Absent totals count as zero. Should the sum overflow or one of the
    /// amounts be in a foreign currency, only the shipping price is reported.
    pub fn total(&self) -> Money {
        let zero = Money::zero(&self.currency);
        let tax = self.tax_total.as_ref().unwrap_or(&zero);
        let discount = self.discount_total.as_ref().unwrap_or(&zero);

        self.shipping_price
            .checked_add(tax)
            .and_then(|gross| gross.checked_sub(discount))
            .unwrap_or_else(|_| self.shipping_price.clone())
    }

    /// Whether the shipment uses the given method and option
    pub fn has_same_method(&self, method: &ShippingMethod) -> bool {
        let same_code = match (&self.shipment_method_code, &method.shipment_method_code) {
            (Some(own), Some(other)) => own.eq_ignore_ascii_case(other),
            _ => false,
        };
        same_code
            && optional_eq_ignore_case(
                self.shipment_method_option.as_deref(),
                method.option_name.as_deref(),
            )
    }

    /// Drop all errors and warnings from a previous validation run
    pub fn reset_validation(&mut self) {
        self.validation_errors.clear();
        self.validation_warnings.clear();
    }
}

fn optional_eq_ignore_case(left: Option<&str>, right: Option<&str>) -> bool {
    match (left, right) {
        (Some(l), Some(r)) => l.eq_ignore_ascii_case(r),
        (None, None) => true,
        _ => false,
    }
}

/// A shipping method offered for a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    pub shipment_method_code: Option<String>,
    pub name: Option<String>,
    pub option_name: Option<String>,
    pub option_description: Option<String>,
    pub logo_url: Option<String>,
    pub priority: i32,
    pub currency: Currency,
    pub price: Money,
}

impl ShippingMethod {
    /// Build a fresh shipment that uses this method
    pub fn to_shipment(&self, currency: &Currency) -> Shipment {
        let mut shipment = Shipment::new(currency);
        shipment.shipment_method_code = self.shipment_method_code.clone();
        shipment.shipment_method_option = self.option_name.clone();
        shipment.shipping_price = Money::new(self.price.amount(), currency.clone());
        shipment
    }
}
