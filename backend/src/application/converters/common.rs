/// Amount and currency normalization shared by all converters
use crate::domain::value_objects::{Currency, Language, Money};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Wrap a raw wire amount as money; absent or non-finite amounts become zero
pub fn to_money(amount: Option<f64>, currency: &Currency) -> Money {
    Money::new(to_decimal(amount).unwrap_or(Decimal::ZERO), currency.clone())
}

/// Wrap a raw wire amount as money, keeping an absent amount absent
pub fn to_optional_money(amount: Option<f64>, currency: &Currency) -> Option<Money> {
    to_decimal(amount).map(|value| Money::new(value, currency.clone()))
}

/// Unwrap money into a raw wire amount
pub fn to_raw_amount(money: &Money) -> Option<f64> {
    from_decimal(Some(money.amount()))
}

// Both directions go through the shortest decimal text so that 19.99 on the
// wire is exactly 19.99 in the model and back.
pub fn to_decimal(amount: Option<f64>) -> Option<Decimal> {
    amount
        .filter(|value| value.is_finite())
        .and_then(|value| Decimal::from_str(&value.to_string()).ok())
}

pub fn from_decimal(amount: Option<Decimal>) -> Option<f64> {
    amount.and_then(|value| value.normalize().to_string().parse::<f64>().ok())
}

/// Pick the currency matching `code` among the available ones
///
/// An unknown code yields a new currency for `language`. Without a code the
/// first available currency is used.
pub fn resolve_currency(available: &[Currency], language: &Language, code: Option<&str>) -> Currency {
    match code {
        Some(code) if !code.trim().is_empty() => available
            .iter()
            .find(|currency| currency.has_code(code))
            .cloned()
            .unwrap_or_else(|| Currency::new(language, code)),
        _ => available
            .first()
            .cloned()
            .unwrap_or_else(|| Currency::new(language, "")),
    }
}
