//! The example service port.

use doublecheck_domain::Value;

use super::error::ServiceError;

#[cfg_attr(test, mockall::automock)]
pub trait ExampleService: Send + Sync {
    /// The primary operation.
    fn do_something(&self, arg: &Value) -> Result<Value, ServiceError>;

    /// Forwards to [`ExampleService::do_something`] with the same argument.
    ///
    /// Dispatch goes through `self`, so an implementor that replaces
    /// `do_something` also intercepts calls arriving here.
    fn non_mocked_method(&self, arg: &Value) -> Result<Value, ServiceError> {
        self.do_something(arg)
    }
}
