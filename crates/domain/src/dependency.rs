//! Collaborator object passed to the service as an argument.

use std::fmt;

use crate::error::DomainError;

/// Maximum length for a dependency label
const MAX_LABEL_LENGTH: usize = 200;

/// Literal returned by [`ExampleDependency::example_method`].
pub const EXAMPLE_STRING: &str = "Example string";

/// An object handed to the service as an argument.
///
/// Two dependencies with the same label compare equal; whether they are the
/// *same instance* is a question for pointer identity on the `Arc` that
/// wraps them inside a [`crate::Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExampleDependency {
    label: String,
}

impl ExampleDependency {
    /// Create a dependency with a validated label.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The label is empty after trimming
    /// - The label exceeds 200 characters after trimming
    pub fn labelled(label: impl Into<String>) -> Result<Self, DomainError> {
        let label = label.into();
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Dependency label cannot be empty"));
        }
        if trimmed.len() > MAX_LABEL_LENGTH {
            return Err(DomainError::validation(format!(
                "Dependency label cannot exceed {} characters",
                MAX_LABEL_LENGTH
            )));
        }
        Ok(Self {
            label: trimmed.to_string(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Always returns [`EXAMPLE_STRING`].
    pub fn example_method(&self) -> &'static str {
        EXAMPLE_STRING
    }
}

impl Default for ExampleDependency {
    fn default() -> Self {
        Self {
            label: "default".to_string(),
        }
    }
}

impl fmt::Display for ExampleDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExampleDependency({})", self.label)
    }
}
