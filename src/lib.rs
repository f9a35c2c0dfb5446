pub mod config;
pub mod constants;
pub mod content;
pub mod core;
pub mod error;
pub mod layout;
pub mod middleware;
pub mod pages;
pub mod prelude;
pub mod security;
pub mod seo;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{Environment, SiteConfig, SiteConfigBuilder};
pub use content::{LegalCollection, LegalDocument};
pub use crate::core::{build_policy, security_headers, CspConfig, CspConfigBuilder, CspPolicy, CspPolicyBuilder, Source};
pub use error::{Result, SiteError};
pub use layout::{resolve, resolve_direction, Breakpoint, ClassTable, ClassTables, ResponsiveValue};
pub use middleware::{security_headers_middleware, NonceExtensions, SecurityHeaders};
pub use pages::{configure, SiteState};
pub use security::{generate_nonce, is_valid_nonce, Nonce, NonceGenerator, RequestNonce};
pub use seo::{robots, sitemap, PageMetadata};
