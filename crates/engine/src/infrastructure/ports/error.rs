//! Error types for port operations.

/// Failure raised by a service operation.
///
/// The real adapter never produces one; substitutes are configured to raise
/// it, and callers receive it exactly as raised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ServiceError {
    /// Create a Runtime error.
    pub fn runtime(message: impl ToString) -> Self {
        Self::Runtime(message.to_string())
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(message: impl ToString) -> Self {
        Self::InvalidArgument(message.to_string())
    }

    /// Check if this is an InvalidArgument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
