//! Application configuration loaded from the environment.

use doublecheck_domain::{DomainError, ExampleDependency, Value};

/// Environment variable holding the service's first construction parameter.
pub const PARAM1_VAR: &str = "EXAMPLE_PARAM1";
/// Environment variable holding the service's second construction parameter.
pub const PARAM2_VAR: &str = "EXAMPLE_PARAM2";
/// Environment variable holding the argument used when none is given.
pub const ARG_VAR: &str = "EXAMPLE_ARG";
/// Environment variable naming an [`ExampleDependency`] to pass as the
/// argument instead of [`ARG_VAR`].
pub const DEPENDENCY_LABEL_VAR: &str = "EXAMPLE_DEPENDENCY_LABEL";

const DEFAULT_ARG: &str = "bar";

/// Settings for wiring the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub param1: Value,
    pub param2: Value,
    pub default_arg: Value,
    pub dependency_label: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            param1: Value::Null,
            param2: Value::Null,
            default_arg: Value::from(DEFAULT_ARG),
            dependency_label: None,
        }
    }
}

impl AppConfig {
    /// Read the configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing or blank keys fall back to the defaults. Present values are
    /// parsed with [`Value::parse_literal`].
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|raw| !raw.trim().is_empty());
        let read = |key: &str| present(key).map(|raw| Value::parse_literal(&raw));

        let defaults = Self::default();
        Self {
            param1: read(PARAM1_VAR).unwrap_or(defaults.param1),
            param2: read(PARAM2_VAR).unwrap_or(defaults.param2),
            default_arg: read(ARG_VAR).unwrap_or(defaults.default_arg),
            dependency_label: present(DEPENDENCY_LABEL_VAR),
        }
    }

    /// Pick the argument for a single run.
    ///
    /// A command-line literal wins. Otherwise a configured dependency label
    /// yields an object argument, and failing that the default argument is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the dependency label is rejected
    /// by [`ExampleDependency::labelled`].
    pub fn resolve_arg(&self, cli_arg: Option<&str>) -> Result<Value, DomainError> {
        if let Some(raw) = cli_arg {
            return Ok(Value::parse_literal(raw));
        }
        match &self.dependency_label {
            Some(label) => {
                let dependency = ExampleDependency::labelled(label.as_str())?;
                tracing::debug!(label = dependency.label(), "Using dependency argument");
                Ok(Value::from(dependency))
            }
            None => Ok(self.default_arg.clone()),
        }
    }
}
