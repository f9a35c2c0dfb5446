use serde::{Deserialize, Serialize};
use std::fmt;

/// Responsive thresholds in ascending order; `Ord` follows that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Breakpoint {
    #[serde(rename = "sm")]
    Sm,
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
            Breakpoint::Xxl => "2xl",
        }
    }

    /// `md` + `gap-4` becomes `md:gap-4`.
    #[inline]
    pub fn prefixed(&self, token: &str) -> String {
        format!("{}:{}", self.as_str(), token)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies an optional breakpoint prefix; `None` is the unprefixed base.
#[inline]
pub(crate) fn scoped(breakpoint: Option<Breakpoint>, token: &str) -> String {
    match breakpoint {
        Some(bp) => bp.prefixed(token),
        None => token.to_string(),
    }
}
