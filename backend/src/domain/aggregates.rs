/// Domain aggregates
use super::base::Entity;
use super::entities::{LineItem, Shipment};
use super::value_objects::{CartId, Currency, Language, ProductId, ValidationType};
use serde::{Deserialize, Serialize};

/// A ShoppingCart is the aggregate root for a customer's pending order
///
/// It owns its line items and shipments. A cart without an id has not been
/// persisted by the cart service yet and is treated as transient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingCart {
    pub id: Option<CartId>,
    pub name: Option<String>,
    pub store_id: Option<String>,
    pub customer_id: Option<String>,
    pub currency: Currency,
    pub language: Language,
    #[serde(default)]
    pub validation_type: ValidationType,
    #[serde(default)]
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
}

impl ShoppingCart {
    /// Create an empty transient cart
    pub fn new(currency: Currency, language: Language) -> Self {
        ShoppingCart {
            id: None,
            name: None,
            store_id: None,
            customer_id: None,
            currency,
            language,
            validation_type: ValidationType::default(),
            items: Vec::new(),
            shipments: Vec::new(),
        }
    }

    /// Create an empty cart that already exists in the cart service
    pub fn persisted(id: CartId, currency: Currency, language: Language) -> Self {
        ShoppingCart {
            id: Some(id),
            ..ShoppingCart::new(currency, language)
        }
    }

    pub fn with_validation_type(mut self, validation_type: ValidationType) -> Self {
        self.validation_type = validation_type;
        self
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn add_shipment(&mut self, shipment: Shipment) {
        self.shipments.push(shipment);
    }

    /// Ids of every product referenced by a line item, sorted and unique
    pub fn product_ids(&self) -> Vec<ProductId> {
        let mut ids: Vec<ProductId> = self.items.iter().map(|i| i.product_id.clone()).collect();
        ids.sort();
        ids.dedup();
        ids
    }

    /// Whether any line item or shipment carries a validation error
    pub fn has_validation_errors(&self) -> bool {
        self.items.iter().any(|i| !i.validation_errors.is_empty())
            || self.shipments.iter().any(|s| !s.validation_errors.is_empty())
    }

    /// Whether any line item or shipment carries a validation warning
    pub fn has_validation_warnings(&self) -> bool {
        self.items.iter().any(|i| !i.validation_warnings.is_empty())
            || self.shipments.iter().any(|s| !s.validation_warnings.is_empty())
    }
}

impl Entity for ShoppingCart {
    type Id = CartId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
