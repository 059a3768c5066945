//! Verification failures reported by the test doubles.

use std::fmt;

use doublecheck_domain::Value;

use super::expectation::Operation;
use super::times::Times;

/// One broken expectation.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// An expectation was invoked a number of times outside its bound.
    CallCount {
        operation: Operation,
        constraint: String,
        expected: Times,
        actual: usize,
    },

    /// A call arrived that no expectation for the operation accepted.
    UnexpectedCall { operation: Operation, arg: Value },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CallCount {
                operation,
                constraint,
                expected,
                actual,
            } => write!(
                f,
                "{operation} with {constraint} was expected to be called {expected} time(s), \
                 actually called {actual} time(s)"
            ),
            Self::UnexpectedCall { operation, arg } => {
                write!(f, "unexpected call to {operation} with {arg}")
            }
        }
    }
}

/// Every violation found when verifying a double.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expectations failed: {}", render(.0))]
pub struct VerificationError(pub Vec<Violation>);

impl VerificationError {
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

fn render(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
