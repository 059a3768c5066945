//! A full substitute for the example service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use doublecheck_domain::Value;

use crate::infrastructure::ports::{ExampleService, ServiceError};

use super::error::{VerificationError, Violation};
use super::expectation::{Expectation, Operation};

/// One recorded call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub operation: Operation,
    pub arg: Value,
}

#[derive(Default)]
struct DoubleState {
    expectations: Vec<Expectation>,
    invocations: Vec<Invocation>,
    unexpected: Vec<Violation>,
}

/// Substitute that replaces every operation of the service.
///
/// Expectations for an operation are tried in the order they were added.
/// The first one that accepts the argument and has room for another call
/// answers it. An operation with no expectations answers [`Value::Null`].
/// A call that none of the operation's expectations accept is recorded as
/// a violation and also answers [`Value::Null`].
///
/// Dropping a double that received calls after its last
/// [`ServiceDouble::verify`] (or was never verified) runs the check again
/// and panics on failure.
#[derive(Default)]
pub struct ServiceDouble {
    state: Mutex<DoubleState>,
    verified: AtomicBool,
}

impl ServiceDouble {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expectation for `operation` and return it for configuration.
    pub fn expect(&mut self, operation: Operation) -> &mut Expectation {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.expectations.push(Expectation::new(operation));
        let last = state.expectations.len() - 1;
        &mut state.expectations[last]
    }

    /// Every call received so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.lock().invocations.clone()
    }

    pub fn invocation_count(&self, operation: Operation) -> usize {
        self.lock()
            .invocations
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    /// Check every expectation's call count and report unexpected calls.
    pub fn verify(&self) -> Result<(), VerificationError> {
        self.verified.store(true, Ordering::SeqCst);

        let state = self.lock();
        let mut violations = state.unexpected.clone();
        violations.extend(
            state
                .expectations
                .iter()
                .filter(|e| !e.expected_times().contains(e.call_count()))
                .map(|e| Violation::CallCount {
                    operation: e.operation(),
                    constraint: e.describe_constraint(),
                    expected: e.expected_times(),
                    actual: e.call_count(),
                }),
        );

        if violations.is_empty() {
            Ok(())
        } else {
            Err(VerificationError(violations))
        }
    }

    pub(crate) fn invoke(&self, operation: Operation, arg: &Value) -> Result<Value, ServiceError> {
        self.verified.store(false, Ordering::SeqCst);

        let outcome = {
            let mut state = self.lock();
            state.invocations.push(Invocation {
                operation,
                arg: arg.clone(),
            });

            let handler = state
                .expectations
                .iter()
                .position(|e| e.accepts(operation, arg));

            match handler {
                Some(index) => Some(state.expectations[index].record_call()),
                None => {
                    let configured = state
                        .expectations
                        .iter()
                        .any(|e| e.operation() == operation);
                    if configured {
                        tracing::debug!(
                            %operation,
                            arg = %arg,
                            "Unexpected call on service double"
                        );
                        state.unexpected.push(Violation::UnexpectedCall {
                            operation,
                            arg: arg.clone(),
                        });
                    }
                    None
                }
            }
        };

        match outcome {
            Some(outcome) => outcome.run(arg),
            None => Ok(Value::Null),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DoubleState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ExampleService for ServiceDouble {
    fn do_something(&self, arg: &Value) -> Result<Value, ServiceError> {
        self.invoke(Operation::DoSomething, arg)
    }

    fn non_mocked_method(&self, arg: &Value) -> Result<Value, ServiceError> {
        self.invoke(Operation::NonMockedMethod, arg)
    }
}

impl Drop for ServiceDouble {
    fn drop(&mut self) {
        if std::thread::panicking() || self.verified.load(Ordering::SeqCst) {
            return;
        }
        if let Err(e) = self.verify() {
            panic!("{e}");
        }
    }
}
