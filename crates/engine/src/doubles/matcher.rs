//! Argument matchers.
//!
//! An [`ArgMatcher`] is a predicate over the argument a substitute receives,
//! paired with a description used in verification reports.

use std::fmt;
use std::sync::Arc;

use doublecheck_domain::{ExampleDependency, Value, ValueKind};

type Predicate = dyn Fn(&Value) -> bool + Send + Sync;

/// A composable predicate over a service argument.
#[derive(Clone)]
pub struct ArgMatcher {
    description: String,
    predicate: Arc<Predicate>,
}

impl ArgMatcher {
    fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn anything() -> Self {
        Self::new("anything", |_| true)
    }

    /// Structural equality.
    pub fn equal_to(expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        Self::new(format!("is equal to {expected}"), move |v| *v == expected)
    }

    /// Matches only the given dependency instance, not merely an equal one.
    pub fn identical_to(expected: &Arc<ExampleDependency>) -> Self {
        let expected = Arc::clone(expected);
        Self::new(format!("is identical to {expected}"), move |v| {
            v.is_same_instance(&expected)
        })
    }

    pub fn is_null() -> Self {
        Self::new("is null", Value::is_null)
    }

    pub fn is_instance_of(kind: ValueKind) -> Self {
        Self::new(format!("is of type {kind}"), move |v| v.kind() == kind)
    }

    pub fn string_contains(needle: impl Into<String>) -> Self {
        let needle = needle.into();
        Self::new(format!("contains \"{needle}\""), move |v| {
            v.as_str().is_some_and(|s| s.contains(needle.as_str()))
        })
    }

    pub fn greater_than(bound: i64) -> Self {
        Self::new(format!("is greater than {bound}"), move |v| {
            v.as_int().is_some_and(|n| n > bound)
        })
    }

    pub fn greater_than_or_equal(bound: i64) -> Self {
        let description = format!("is equal to {bound} or is greater than {bound}");
        Self::new(description, move |v| v.as_int().is_some_and(|n| n >= bound))
    }

    pub fn less_than(bound: i64) -> Self {
        Self::new(format!("is less than {bound}"), move |v| {
            v.as_int().is_some_and(|n| n < bound)
        })
    }

    pub fn less_than_or_equal(bound: i64) -> Self {
        let description = format!("is equal to {bound} or is less than {bound}");
        Self::new(description, move |v| v.as_int().is_some_and(|n| n <= bound))
    }

    /// A caller-supplied predicate.
    pub fn callback<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new("is accepted by specified callback", predicate)
    }

    /// Matches a [`Value::List`] of the same length whose elements satisfy
    /// the matchers position by position.
    pub fn positional(matchers: Vec<ArgMatcher>) -> Self {
        let description = format!(
            "({})",
            matchers
                .iter()
                .map(ArgMatcher::description)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self::new(description, move |v| {
            v.as_list().is_some_and(|items| {
                items.len() == matchers.len()
                    && items.iter().zip(&matchers).all(|(item, m)| m.matches(item))
            })
        })
    }

    pub fn logical_not(inner: ArgMatcher) -> Self {
        Self::new(format!("not ({})", inner.description), move |v| {
            !inner.matches(v)
        })
    }

    pub fn logical_and(matchers: Vec<ArgMatcher>) -> Self {
        let description = join_descriptions(&matchers, " and ");
        Self::new(description, move |v| matchers.iter().all(|m| m.matches(v)))
    }

    pub fn logical_or(matchers: Vec<ArgMatcher>) -> Self {
        let description = join_descriptions(&matchers, " or ");
        Self::new(description, move |v| matchers.iter().any(|m| m.matches(v)))
    }

    pub fn matches(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

fn join_descriptions(matchers: &[ArgMatcher], separator: &str) -> String {
    matchers
        .iter()
        .map(|m| format!("({})", m.description))
        .collect::<Vec<_>>()
        .join(separator)
}

impl fmt::Debug for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArgMatcher")
            .field(&self.description)
            .finish()
    }
}

impl fmt::Display for ArgMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl From<Value> for ArgMatcher {
    fn from(value: Value) -> Self {
        Self::equal_to(value)
    }
}

impl From<&str> for ArgMatcher {
    fn from(value: &str) -> Self {
        Self::equal_to(value)
    }
}

impl From<i64> for ArgMatcher {
    fn from(value: i64) -> Self {
        Self::equal_to(value)
    }
}
