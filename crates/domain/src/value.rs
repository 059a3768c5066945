//! Argument and result values exchanged with the service.
//!
//! The service accepts a single dynamically shaped argument. Several
//! positional arguments travel as a [`Value::List`].

use std::fmt;
use std::sync::Arc;

use crate::dependency::ExampleDependency;

/// A value passed to or returned from a service operation.
///
/// `PartialEq` is structural: two `Object` values holding equal
/// dependencies compare equal even when they are different instances.
/// Use [`Value::is_same_instance`] for identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// The neutral value; what an unconfigured substitute returns.
    #[default]
    Null,
    Int(i64),
    Str(String),
    /// Several positional arguments.
    List(Vec<Value>),
    Object(Arc<ExampleDependency>),
}

/// The variant of a [`Value`], used for type matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Int,
    Str,
    List,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Int => "int",
            Self::Str => "string",
            Self::List => "list",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Parse a literal as written in configuration or on the command line.
    ///
    /// `null` becomes [`Value::Null`], integer text becomes [`Value::Int`],
    /// anything else is kept verbatim as [`Value::Str`].
    pub fn parse_literal(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("null") {
            return Self::Null;
        }
        match trimmed.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Str(raw.to_string()),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Int(_) => ValueKind::Int,
            Self::Str(_) => ValueKind::Str,
            Self::List(_) => ValueKind::List,
            Self::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ExampleDependency>> {
        match self {
            Self::Object(dep) => Some(dep),
            _ => None,
        }
    }

    /// True only when `self` holds exactly the given dependency instance.
    pub fn is_same_instance(&self, other: &Arc<ExampleDependency>) -> bool {
        self.as_object().is_some_and(|dep| Arc::ptr_eq(dep, other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(dep) => write!(f, "{dep}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<Arc<ExampleDependency>> for Value {
    fn from(dep: Arc<ExampleDependency>) -> Self {
        Self::Object(dep)
    }
}

impl From<ExampleDependency> for Value {
    fn from(dep: ExampleDependency) -> Self {
        Self::Object(Arc::new(dep))
    }
}
