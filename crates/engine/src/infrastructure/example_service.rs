//! Real example service implementation.

use doublecheck_domain::Value;

use crate::infrastructure::ports::{ExampleService, ServiceError};

/// Literal returned by [`DefaultExampleService::do_something`].
pub const SOME_RANDOM_TEXT: &str = "Some random text";

/// The production service. Its construction parameters are carried but play
/// no part in any operation.
#[derive(Debug, Clone)]
pub struct DefaultExampleService {
    param1: Value,
    param2: Value,
}

impl DefaultExampleService {
    pub fn new(param1: impl Into<Value>, param2: impl Into<Value>) -> Self {
        Self {
            param1: param1.into(),
            param2: param2.into(),
        }
    }

    pub fn param1(&self) -> &Value {
        &self.param1
    }

    pub fn param2(&self) -> &Value {
        &self.param2
    }
}

impl Default for DefaultExampleService {
    fn default() -> Self {
        Self::new(Value::Null, Value::Null)
    }
}

impl ExampleService for DefaultExampleService {
    fn do_something(&self, arg: &Value) -> Result<Value, ServiceError> {
        tracing::debug!(arg = %arg, "DefaultExampleService::do_something");
        Ok(Value::from(SOME_RANDOM_TEXT))
    }
}
