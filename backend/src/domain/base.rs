/// Base DDD abstractions for the domain layer
use std::fmt::Debug;

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Debug {}

/// Trait for entities - objects with identity that can change over time
///
/// Storefront entities are assembled before the backend assigns them an id,
/// so the identity is optional. An entity without one is transient.
pub trait Entity: Debug {
    type Id: ValueObject;

    fn id(&self) -> Option<&Self::Id>;

    /// Whether the entity has not been persisted by the backend yet
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value provided
    InvalidValue(String),
    /// Arithmetic between amounts tagged with different currencies
    CurrencyMismatch { left: String, right: String },
    /// An amount outside the representable range
    AmountOverflow(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidValue(msg) => write!(f, "Invalid value: {}", msg),
            DomainError::CurrencyMismatch { left, right } => {
                write!(f, "Currency mismatch: {} vs {}", left, right)
            }
            DomainError::AmountOverflow(msg) => write!(f, "Amount overflow: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
