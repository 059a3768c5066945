//! Doublecheck Domain - values exchanged with the example service.

pub mod dependency;
pub mod error;
pub mod value;

pub use dependency::{ExampleDependency, EXAMPLE_STRING};
pub use error::DomainError;
pub use value::{Value, ValueKind};
