//! Filter definitions as the host view exposes them

mod registry;
mod types;
mod validation;

pub use registry::FilterRegistry;
pub use types::*;
pub use validation::{DefinitionError, ValidationResult, validate_definitions};
