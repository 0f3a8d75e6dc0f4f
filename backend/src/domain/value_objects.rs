/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Unique identifier for a ShoppingCart
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CartId(String);

impl CartId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidValue("CartId cannot be empty".to_string()));
        }
        Ok(CartId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for CartId {}

impl TryFrom<String> for CartId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        CartId::new(value)
    }
}

impl From<CartId> for String {
    fn from(id: CartId) -> Self {
        id.0
    }
}

impl fmt::Display for CartId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a catalog product
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidValue("ProductId cannot be empty".to_string()));
        }
        Ok(ProductId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ProductId {}

impl TryFrom<String> for ProductId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        ProductId::new(value)
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a LineItem within a cart
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LineItemId(String);

impl LineItemId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidValue("LineItemId cannot be empty".to_string()));
        }
        Ok(LineItemId(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for LineItemId {}

impl TryFrom<String> for LineItemId {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        LineItemId::new(value)
    }
}

impl From<LineItemId> for String {
    fn from(id: LineItemId) -> Self {
        id.0
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A storefront language identified by its culture name (e.g. "en-US")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language {
    culture_name: String,
}

impl Language {
    pub fn new(culture_name: impl Into<String>) -> DomainResult<Self> {
        let culture_name = culture_name.into();
        if culture_name.trim().is_empty() {
            return Err(DomainError::InvalidValue(
                "Language culture name cannot be empty".to_string(),
            ));
        }
        Ok(Language { culture_name })
    }

    pub fn culture_name(&self) -> &str {
        &self.culture_name
    }
}

impl ValueObject for Language {}

impl TryFrom<String> for Language {
    type Error = DomainError;

    fn try_from(value: String) -> DomainResult<Self> {
        Language::new(value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.culture_name
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.culture_name)
    }
}

/// A currency, identified by its ISO code
///
/// Two currencies are equal when their codes are equal; the culture the
/// currency was created for only affects presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    code: String,
    culture_name: String,
}

impl Currency {
    pub fn new(language: &Language, code: impl AsRef<str>) -> Self {
        Currency {
            code: code.as_ref().trim().to_ascii_uppercase(),
            culture_name: language.culture_name().to_string(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn culture_name(&self) -> &str {
        &self.culture_name
    }

    /// Whether this currency has the given ISO code
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code.trim())
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl ValueObject for Currency {}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// An amount tagged with its currency
///
/// Equality compares both parts: amounts in different currencies are never
/// equal. Arithmetic across currencies fails instead of converting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Money { amount, currency }
    }

    pub fn zero(currency: &Currency) -> Self {
        Money::new(Decimal::ZERO, currency.clone())
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    pub fn checked_add(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let amount = self.amount.checked_add(other.amount).ok_or_else(|| {
            DomainError::AmountOverflow(format!("{} + {}", self.amount, other.amount))
        })?;
        Ok(Money::new(amount, self.currency.clone()))
    }

    pub fn checked_sub(&self, other: &Money) -> DomainResult<Money> {
        self.ensure_same_currency(other)?;
        let amount = self.amount.checked_sub(other.amount).ok_or_else(|| {
            DomainError::AmountOverflow(format!("{} - {}", self.amount, other.amount))
        })?;
        Ok(Money::new(amount, self.currency.clone()))
    }

    fn ensure_same_currency(&self, other: &Money) -> DomainResult<()> {
        if self.currency != other.currency {
            return Err(DomainError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl ValueObject for Money {}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Which checks the validator applies to a cart or line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValidationType {
    #[default]
    PriceAndQuantity,
    Price,
    Quantity,
    None,
}

impl ValidationType {
    pub fn checks_price(&self) -> bool {
        matches!(self, ValidationType::PriceAndQuantity | ValidationType::Price)
    }

    pub fn checks_quantity(&self) -> bool {
        matches!(self, ValidationType::PriceAndQuantity | ValidationType::Quantity)
    }
}

impl ValueObject for ValidationType {}
