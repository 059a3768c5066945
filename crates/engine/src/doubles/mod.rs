//! Test doubles for the example service.
//!
//! - [`ServiceDouble`] replaces every operation
//! - [`PartialService`] replaces only the operations asked for
//!
//! Both record calls, answer from configured [`Expectation`]s and check call
//! counts on [`ServiceDouble::verify`] (or on drop).

mod error;
mod expectation;
mod matcher;
mod partial;
mod service_double;
mod times;

pub use error::{VerificationError, Violation};
pub use expectation::{Expectation, Operation};
pub use matcher::ArgMatcher;
pub use partial::PartialService;
pub use service_double::{Invocation, ServiceDouble};
pub use times::Times;
