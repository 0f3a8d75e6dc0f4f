/// Catalog data as returned by the catalog search service
use super::value_objects::{Currency, Money, ProductId};
use serde::{Deserialize, Serialize};

/// Stock information for a product in a fulfillment center
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inventory {
    pub fulfillment_center_id: Option<String>,
    pub in_stock_quantity: Option<i64>,
    pub reserved_quantity: Option<i64>,
    #[serde(default)]
    pub allow_backorder: bool,
    #[serde(default)]
    pub allow_preorder: bool,
}

impl Inventory {
    /// In-stock quantity less reservations; `None` when stock is unknown
    pub fn available_quantity(&self) -> Option<i64> {
        self.in_stock_quantity
            .map(|in_stock| in_stock.saturating_sub(self.reserved_quantity.unwrap_or(0)))
    }
}

/// The price for buying at least `quantity` units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierPrice {
    pub quantity: i64,
    pub price: Money,
    pub price_with_tax: Money,
    pub discount_amount: Money,
}

impl TierPrice {
    /// Price after discounts
    pub fn actual_price(&self) -> Money {
        self.price
            .checked_sub(&self.discount_amount)
            .unwrap_or_else(|_| self.price.clone())
    }
}

/// A product's price list in one currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPrice {
    pub currency: Currency,
    pub list_price: Money,
    pub sale_price: Money,
    pub sale_price_with_tax: Money,
    pub discount_amount: Money,
    #[serde(default)]
    pub tier_prices: Vec<TierPrice>,
}

impl ProductPrice {
    /// A single-tier price list where list and sale price are `price`
    pub fn flat(price: Money) -> Self {
        ProductPrice {
            currency: price.currency().clone(),
            list_price: price.clone(),
            sale_price: price.clone(),
            sale_price_with_tax: price.clone(),
            discount_amount: Money::zero(price.currency()),
            tier_prices: Vec::new(),
        }
    }

    /// The tier that applies when buying `quantity` units
    ///
    /// Picks the tier with the highest minimum quantity not above
    /// `quantity`, falling back to the sale price.
    pub fn tier_price(&self, quantity: i64) -> TierPrice {
        self.tier_prices
            .iter()
            .filter(|tier| tier.quantity <= quantity)
            .max_by_key(|tier| tier.quantity)
            .cloned()
            .unwrap_or_else(|| TierPrice {
                quantity: 1,
                price: self.sale_price.clone(),
                price_with_tax: self.sale_price_with_tax.clone(),
                discount_amount: self.discount_amount.clone(),
            })
    }
}

/// A catalog product with the data the cart validator needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: Option<String>,
    pub sku: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_buyable: bool,
    #[serde(default)]
    pub track_inventory: bool,
    pub inventory: Option<Inventory>,
    pub price: ProductPrice,
}

impl Product {
    pub fn new(id: ProductId, price: ProductPrice) -> Self {
        Product {
            id,
            name: None,
            sku: None,
            is_active: true,
            is_buyable: true,
            track_inventory: false,
            inventory: None,
            price,
        }
    }

    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.track_inventory = true;
        self.inventory = Some(inventory);
        self
    }

    /// Whether the product can be put in a cart at all
    pub fn is_purchasable(&self) -> bool {
        self.is_active && self.is_buyable
    }
}
