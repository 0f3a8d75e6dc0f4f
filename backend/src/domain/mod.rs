// Domain layer module
pub mod aggregates;
pub mod base;
pub mod catalog;
pub mod entities;
pub mod order;
pub mod validation;
pub mod value_objects;

pub use aggregates::*;
pub use base::*;
pub use catalog::*;
pub use entities::*;
pub use order::*;
pub use validation::*;
pub use value_objects::*;
