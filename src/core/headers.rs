use crate::core::policy::CspPolicy;
use crate::error::Result;
use actix_web::http::header::{HeaderName, HeaderValue};

const STATIC_HEADERS: &[(&str, &str)] = &[
    ("cross-origin-embedder-policy", "require-corp"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    ("origin-agent-cluster", "?1"),
    ("referrer-policy", "no-referrer"),
    (
        "strict-transport-security",
        "max-age=31536000; includeSubDomains",
    ),
    ("x-content-type-options", "nosniff"),
    ("x-dns-prefetch-control", "off"),
    ("x-download-options", "noopen"),
    ("x-frame-options", "SAMEORIGIN"),
    ("x-permitted-cross-domain-policies", "none"),
    ("x-xss-protection", "0"),
];

/// The full response header set for a secured page: the policy first, then
/// the fixed hardening headers.
pub fn security_headers(policy: &CspPolicy) -> Result<Vec<(HeaderName, HeaderValue)>> {
    let mut headers = Vec::with_capacity(STATIC_HEADERS.len() + 1);
    headers.push((policy.header_name(), policy.header_value()?));

    headers.extend(STATIC_HEADERS.iter().map(|&(name, value)| {
        (
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        )
    }));

    Ok(headers)
}
