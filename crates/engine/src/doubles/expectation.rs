//! Expectations: what a substitute accepts, how often, and how it answers.

use std::fmt;
use std::sync::Arc;

use doublecheck_domain::Value;

use crate::infrastructure::ports::ServiceError;

use super::matcher::ArgMatcher;
use super::times::Times;

/// The named operations of [`crate::infrastructure::ports::ExampleService`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    DoSomething,
    NonMockedMethod,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DoSomething => f.write_str("do_something"),
            Self::NonMockedMethod => f.write_str("non_mocked_method"),
        }
    }
}

pub(crate) type Callback = dyn Fn(&Value) -> Result<Value, ServiceError> + Send + Sync;

#[derive(Clone, Default)]
enum ArgConstraint {
    #[default]
    Any,
    Single(ArgMatcher),
    /// One matcher per call, in order. Calls past the end are unconstrained.
    Consecutive(Vec<ArgMatcher>),
}

impl ArgConstraint {
    fn accepts(&self, call_index: usize, arg: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Single(matcher) => matcher.matches(arg),
            Self::Consecutive(matchers) => match matchers.get(call_index) {
                Some(matcher) => matcher.matches(arg),
                None => true,
            },
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Any => "any arguments".to_string(),
            Self::Single(matcher) => format!("argument {matcher}"),
            Self::Consecutive(matchers) => format!(
                "consecutive arguments [{}]",
                matchers
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; ")
            ),
        }
    }
}

#[derive(Clone, Default)]
enum Response {
    #[default]
    Neutral,
    Return(Value),
    Consecutive(Vec<Value>),
    Callback(Arc<Callback>),
    Fail(ServiceError),
}

/// What a matched call resolves to. Callbacks run after the double releases
/// its lock, so a callback may call back into the same double.
pub(crate) enum Outcome {
    Ready(Result<Value, ServiceError>),
    Deferred(Arc<Callback>),
}

impl Outcome {
    pub(crate) fn run(self, arg: &Value) -> Result<Value, ServiceError> {
        match self {
            Self::Ready(result) => result,
            Self::Deferred(callback) => callback(arg),
        }
    }
}

/// A configured expectation on one operation of a substitute.
///
/// Obtained from `ServiceDouble::expect` or `PartialService::replace`; every
/// setter returns `&mut Self` so calls chain.
pub struct Expectation {
    operation: Operation,
    times: Times,
    constraint: ArgConstraint,
    response: Response,
    calls: usize,
}

impl Expectation {
    pub(crate) fn new(operation: Operation) -> Self {
        Self {
            operation,
            times: Times::Any,
            constraint: ArgConstraint::Any,
            response: Response::Neutral,
            calls: 0,
        }
    }

    /// Bound the number of calls this expectation must receive.
    pub fn times(&mut self, times: Times) -> &mut Self {
        self.times = times;
        self
    }

    /// Accept only arguments satisfying `matcher`.
    pub fn with(&mut self, matcher: impl Into<ArgMatcher>) -> &mut Self {
        self.constraint = ArgConstraint::Single(matcher.into());
        self
    }

    /// Accept only a list of positional arguments satisfying `matchers`.
    pub fn with_args(&mut self, matchers: Vec<ArgMatcher>) -> &mut Self {
        self.with(ArgMatcher::positional(matchers))
    }

    /// Check the n-th call's argument against the n-th matcher.
    pub fn with_consecutive(&mut self, matchers: Vec<ArgMatcher>) -> &mut Self {
        self.constraint = ArgConstraint::Consecutive(matchers);
        self
    }

    pub fn will_return(&mut self, value: impl Into<Value>) -> &mut Self {
        self.response = Response::Return(value.into());
        self
    }

    /// Answer successive calls with successive values, then with
    /// [`Value::Null`] once the values run out.
    pub fn will_return_consecutive<I, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.response = Response::Consecutive(values.into_iter().map(Into::into).collect());
        self
    }

    /// Compute each answer from the call's argument.
    pub fn will_return_callback<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value, ServiceError> + Send + Sync + 'static,
    {
        self.response = Response::Callback(Arc::new(callback));
        self
    }

    /// Raise `error` instead of returning.
    pub fn will_fail(&mut self, error: ServiceError) -> &mut Self {
        self.response = Response::Fail(error);
        self
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn call_count(&self) -> usize {
        self.calls
    }

    pub(crate) fn expected_times(&self) -> Times {
        self.times
    }

    pub(crate) fn describe_constraint(&self) -> String {
        self.constraint.describe()
    }

    /// True if this expectation should handle a call with `arg`.
    pub(crate) fn accepts(&self, operation: Operation, arg: &Value) -> bool {
        self.operation == operation
            && !self.times.is_saturated(self.calls)
            && self.constraint.accepts(self.calls, arg)
    }

    /// Record a call and resolve its answer.
    pub(crate) fn record_call(&mut self) -> Outcome {
        let index = self.calls;
        self.calls += 1;
        match &self.response {
            Response::Neutral => Outcome::Ready(Ok(Value::Null)),
            Response::Return(value) => Outcome::Ready(Ok(value.clone())),
            Response::Consecutive(values) => {
                Outcome::Ready(Ok(values.get(index).cloned().unwrap_or_default()))
            }
            Response::Callback(callback) => Outcome::Deferred(Arc::clone(callback)),
            Response::Fail(error) => Outcome::Ready(Err(error.clone())),
        }
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("operation", &self.operation)
            .field("times", &self.times)
            .field("constraint", &self.constraint.describe())
            .field("calls", &self.calls)
            .finish()
    }
}
