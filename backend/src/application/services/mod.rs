pub mod cart_validator;

pub use cart_validator::{CartValidationError, CartValidator, CartValidatorConfig, ValidationResult};
