pub mod csp;
pub mod extensions;
pub mod matcher;

pub use csp::{security_headers_middleware, RequestId, SecurityHeaders, SecurityHeadersService};
pub use extensions::NonceExtensions;
pub use matcher::{classify, Disposition};
