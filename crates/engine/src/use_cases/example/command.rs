//! Example command use case.
//!
//! Forwards its argument to the service's primary operation.

use std::sync::Arc;

use doublecheck_domain::Value;

use crate::infrastructure::ports::{ExampleService, ServiceError};

/// Runs the service's primary operation on behalf of a caller.
///
/// No validation and no error translation: the service's result, success or
/// failure, reaches the caller untouched.
pub struct ExampleCommand {
    service: Arc<dyn ExampleService>,
}

impl ExampleCommand {
    pub fn new(service: Arc<dyn ExampleService>) -> Self {
        Self { service }
    }

    /// Execute the command.
    ///
    /// # Arguments
    /// * `arg` - Passed unchanged to `ExampleService::do_something`
    ///
    /// # Returns
    /// * `Ok(Value)` - Whatever the service returned
    /// * `Err(ServiceError)` - Whatever the service raised
    pub fn execute(&self, arg: &Value) -> Result<Value, ServiceError> {
        tracing::debug!(arg = %arg, "Executing example command");

        let result = self.service.do_something(arg);
        if let Err(e) = &result {
            tracing::debug!(error = %e, "Example service failed");
        }
        result
    }
}
