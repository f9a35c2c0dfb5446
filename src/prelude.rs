pub use crate::config::{Environment, SiteConfig};
pub use crate::core::{CspConfig, CspPolicy, CspPolicyBuilder, Source};
pub use crate::layout::{
    Align, Breakpoint, ClassTables, Columns, Direction, Gap, GridProps, ResponsiveValue,
    SectionProps, StackProps,
};
pub use crate::middleware::{security_headers_middleware, NonceExtensions, SecurityHeaders};
pub use crate::security::{Nonce, NonceGenerator};
