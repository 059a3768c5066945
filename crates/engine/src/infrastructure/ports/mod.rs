//! Port traits for infrastructure boundaries.
//!
//! The service is the only abstraction in the engine. The command depends on
//! the trait, never on the concrete adapter, so tests can hand it a
//! substitute.

mod error;
mod service;

pub use service::ExampleService;

#[cfg(test)]
pub use service::MockExampleService;

pub use error::ServiceError;
