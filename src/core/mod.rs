pub mod config;
pub mod directives;
pub mod headers;
pub mod policy;
pub mod source;

pub use config::{build_policy, CspConfig, CspConfigBuilder};
pub use directives::Directive;
pub use headers::security_headers;
pub use policy::{CspPolicy, CspPolicyBuilder, DirectiveSet};
pub use source::Source;
