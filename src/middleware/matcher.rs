use crate::constants::{BYPASS_PREFIXES, STATIC_EXTENSIONS};

/// What the security middleware does with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Static assets and API routes pass through untouched.
    Bypass,
    /// Pages get a nonce and the full header set.
    Secured,
}

pub fn classify(path: &str) -> Disposition {
    if BYPASS_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) || is_static_asset(path) {
        Disposition::Bypass
    } else {
        Disposition::Secured
    }
}

fn is_static_asset(path: &str) -> bool {
    path.rsplit_once('.')
        .map(|(_, ext)| STATIC_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
