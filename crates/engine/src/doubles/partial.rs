//! Partial substitute: replaces selected operations, keeps the rest real.

use std::collections::HashSet;

use doublecheck_domain::Value;

use crate::infrastructure::ports::{ExampleService, ServiceError};

use super::error::VerificationError;
use super::expectation::{Expectation, Operation};
use super::service_double::ServiceDouble;

/// Wraps a real service and intercepts only the operations passed to
/// [`PartialService::replace`].
///
/// An unreplaced `do_something` forwards to the wrapped instance, or answers
/// [`Value::Null`] when the partial was built with
/// [`PartialService::detached`]. An unreplaced `non_mocked_method` runs the
/// port's default body against the partial itself, dispatching through
/// `self.do_something`, so replacing `do_something` alone is enough to
/// change what it returns. An override of `non_mocked_method` on the wrapped
/// `S` is never called.
pub struct PartialService<S> {
    real: Option<S>,
    replaced: HashSet<Operation>,
    double: ServiceDouble,
}

impl<S: ExampleService> PartialService<S> {
    /// Wrap an already constructed service.
    pub fn new(real: S) -> Self {
        Self {
            real: Some(real),
            replaced: HashSet::new(),
            double: ServiceDouble::new(),
        }
    }

    /// A partial with no real instance behind it.
    pub fn detached() -> Self {
        Self {
            real: None,
            replaced: HashSet::new(),
            double: ServiceDouble::new(),
        }
    }

    /// Replace `operation` and return an expectation configuring it.
    ///
    /// Calling this again for the same operation adds another expectation.
    pub fn replace(&mut self, operation: Operation) -> &mut Expectation {
        self.replaced.insert(operation);
        self.double.expect(operation)
    }

    pub fn is_replaced(&self, operation: Operation) -> bool {
        self.replaced.contains(&operation)
    }

    pub fn real(&self) -> Option<&S> {
        self.real.as_ref()
    }

    /// Calls that reached a replaced operation.
    pub fn invocation_count(&self, operation: Operation) -> usize {
        self.double.invocation_count(operation)
    }

    pub fn verify(&self) -> Result<(), VerificationError> {
        self.double.verify()
    }
}

impl<S: ExampleService> ExampleService for PartialService<S> {
    fn do_something(&self, arg: &Value) -> Result<Value, ServiceError> {
        if self.is_replaced(Operation::DoSomething) {
            return self.double.invoke(Operation::DoSomething, arg);
        }
        match &self.real {
            Some(real) => real.do_something(arg),
            None => Ok(Value::Null),
        }
    }

    fn non_mocked_method(&self, arg: &Value) -> Result<Value, ServiceError> {
        if self.is_replaced(Operation::NonMockedMethod) {
            return self.double.invoke(Operation::NonMockedMethod, arg);
        }
        // Default port body, run on `self` so a replaced do_something is seen.
        self.do_something(arg)
    }
}
