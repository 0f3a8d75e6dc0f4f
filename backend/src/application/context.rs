use crate::domain::value_objects::{Currency, Language};

/// The currency and language a storefront request is served in
#[derive(Debug, Clone, PartialEq)]
pub struct StoreContext {
    pub currency: Currency,
    pub language: Language,
}

impl StoreContext {
    pub fn new(currency: Currency, language: Language) -> Self {
        Self { currency, language }
    }
}
