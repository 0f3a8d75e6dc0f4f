pub mod context;
pub mod converters;
pub mod dto;
pub mod ports;
pub mod services;

// Re-export key types to avoid naming conflicts
pub use context::StoreContext;
pub use dto::{CartShipment, CartShippingMethod, OrderShipmentDto, ShipmentUpdateRequest};
pub use ports::{CacheManager, CartApi, CatalogSearchService, ItemResponseGroup};
pub use services::{CartValidationError, CartValidator, CartValidatorConfig, ValidationResult};
