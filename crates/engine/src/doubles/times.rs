//! Invocation count bounds.

use std::fmt;

/// How many times an expectation may be, and must be, invoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Times {
    Exactly(usize),
    AtLeast(usize),
    AtMost(usize),
    /// Inclusive on both ends.
    Between(usize, usize),
    #[default]
    Any,
}

impl Times {
    pub fn once() -> Self {
        Self::Exactly(1)
    }

    pub fn never() -> Self {
        Self::Exactly(0)
    }

    pub fn exactly(n: usize) -> Self {
        Self::Exactly(n)
    }

    pub fn at_least(n: usize) -> Self {
        Self::AtLeast(n)
    }

    pub fn at_most(n: usize) -> Self {
        Self::AtMost(n)
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self::Between(min.min(max), max.max(min))
    }

    pub fn any() -> Self {
        Self::Any
    }

    /// True if `count` calls satisfy this bound.
    pub fn contains(&self, count: usize) -> bool {
        match *self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
            Self::AtMost(n) => count <= n,
            Self::Between(min, max) => (min..=max).contains(&count),
            Self::Any => true,
        }
    }

    /// The largest call count this bound allows, if any.
    pub fn upper_bound(&self) -> Option<usize> {
        match *self {
            Self::Exactly(n) | Self::AtMost(n) | Self::Between(_, n) => Some(n),
            Self::AtLeast(_) | Self::Any => None,
        }
    }

    /// True once `count` calls leave no room for another.
    pub fn is_saturated(&self, count: usize) -> bool {
        self.upper_bound().is_some_and(|max| count >= max)
    }
}

impl fmt::Display for Times {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::AtMost(n) => write!(f, "at most {n}"),
            Self::Between(min, max) => write!(f, "between {min} and {max}"),
            Self::Any => f.write_str("any number of"),
        }
    }
}
