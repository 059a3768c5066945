//! Error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Creates a validation error for a violated construction rule.
    ///
    /// # Example
    /// ```ignore
    /// if label.is_empty() {
    ///     return Err(DomainError::validation("Dependency label cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
