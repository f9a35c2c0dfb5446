//! Element types accepted by the responsive props.
//!
//! Each type carries a naming convention used when a class table has no entry
//! for a value: the unprefixed utility class names below, which the resolver
//! prefixes with `<breakpoint>:` where needed. The convention assumes the raw
//! value is itself a valid class-name fragment in the styling system.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::hash::Hash;

pub type Tokens = SmallVec<[String; 2]>;

pub trait ClassValue: Copy + Eq + Hash {
    /// Used as the base when a per-breakpoint value names no breakpoint.
    fn default_value() -> Self;

    /// Unprefixed token(s) for this value by naming convention.
    fn fallback_tokens(&self) -> Tokens;
}

/// Spacing step between children: `gap-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gap(pub u16);

impl ClassValue for Gap {
    fn default_value() -> Self {
        Gap(0)
    }

    fn fallback_tokens(&self) -> Tokens {
        smallvec![format!("gap-{}", self.0)]
    }
}

/// Grid column count: `grid-cols-<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Columns(pub u8);

impl ClassValue for Columns {
    fn default_value() -> Self {
        Columns(0)
    }

    fn fallback_tokens(&self) -> Tokens {
        smallvec![format!("grid-cols-{}", self.0)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl ClassValue for Direction {
    fn default_value() -> Self {
        Direction::Column
    }

    fn fallback_tokens(&self) -> Tokens {
        match self {
            Direction::Row => smallvec!["flex-row".to_string()],
            Direction::Column => smallvec!["flex-col".to_string()],
        }
    }
}

/// Cross-axis and text alignment, always emitted as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    Center,
    End,
}

impl ClassValue for Align {
    fn default_value() -> Self {
        Align::Center
    }

    fn fallback_tokens(&self) -> Tokens {
        let (items, text) = match self {
            Align::Start => ("items-start", "text-left"),
            Align::Center => ("items-center", "text-center"),
            Align::End => ("items-end", "text-right"),
        };
        smallvec![items.to_string(), text.to_string()]
    }
}
