use crate::layout::breakpoint::Breakpoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Either one value for every screen size or explicit per-breakpoint values.
///
/// Deserializes from a bare value (`4`, `"row"`) or an object keyed by
/// breakpoint name (`{"md": 4, "lg": 8}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveValue<T> {
    Single(T),
    PerBreakpoint(BTreeMap<Breakpoint, T>),
}

impl<T> ResponsiveValue<T> {
    pub fn per_breakpoint<I>(values: I) -> Self
    where
        I: IntoIterator<Item = (Breakpoint, T)>,
    {
        ResponsiveValue::PerBreakpoint(values.into_iter().collect())
    }

    /// The explicit value at `breakpoint`. A single value counts as explicit
    /// everywhere.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        match self {
            ResponsiveValue::Single(value) => Some(value),
            ResponsiveValue::PerBreakpoint(map) => map.get(&breakpoint),
        }
    }

    /// The smallest breakpoint with a value, which acts as the mobile-first base.
    pub fn base(&self) -> Option<(Breakpoint, &T)> {
        match self {
            ResponsiveValue::Single(_) => None,
            ResponsiveValue::PerBreakpoint(map) => map.iter().next().map(|(bp, v)| (*bp, v)),
        }
    }
}

impl<T> From<T> for ResponsiveValue<T> {
    fn from(value: T) -> Self {
        ResponsiveValue::Single(value)
    }
}
