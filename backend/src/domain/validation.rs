/// Validation outcomes attached to cart entities
use super::value_objects::Money;
use serde::{Deserialize, Serialize};

/// A business-rule violation found while validating a cart
///
/// These are data, not faults: they are attached to the line item or
/// shipment they concern and left for the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all_fields = "camelCase")]
pub enum ValidationError {
    /// The product is missing from the catalog, inactive, or not buyable
    ProductUnavailable,
    /// The requested quantity exceeds what is in stock
    ProductQuantity { available_quantity: i64 },
    /// The placed price no longer matches the catalog price
    ProductPrice {
        old_price: Money,
        old_price_with_tax: Money,
    },
    /// No shipping method is available, or the selected one is gone
    ShippingUnavailable,
    /// The selected shipping method now costs something else
    ShippingPrice { old_price: Money },
}

impl ValidationError {
    /// Stable identifier for the kind of violation
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::ProductUnavailable => "ProductUnavailable",
            ValidationError::ProductQuantity { .. } => "ProductQuantity",
            ValidationError::ProductPrice { .. } => "ProductPrice",
            ValidationError::ShippingUnavailable => "ShippingUnavailable",
            ValidationError::ShippingPrice { .. } => "ShippingPrice",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Currency, Language};
    use rust_decimal::Decimal;

    #[test]
    fn test_codes() {
        assert_eq!(ValidationError::ProductUnavailable.code(), "ProductUnavailable");
        assert_eq!(
            ValidationError::ProductQuantity { available_quantity: 2 }.code(),
            "ProductQuantity"
        );
        assert_eq!(ValidationError::ShippingUnavailable.code(), "ShippingUnavailable");
    }

    #[test]
    fn test_serialized_form_carries_code() {
        let usd = Currency::new(&Language::new("en-US").unwrap(), "USD");
        let error = ValidationError::ShippingPrice {
            old_price: Money::new(Decimal::new(5, 0), usd),
        };

        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["code"], "ShippingPrice");
        assert!(json.get("oldPrice").is_some());

        let quantity = serde_json::to_value(ValidationError::ProductQuantity {
            available_quantity: 7,
        })
        .unwrap();
        assert_eq!(quantity["availableQuantity"], 7);
    }
}
