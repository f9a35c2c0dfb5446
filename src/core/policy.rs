use crate::constants::{
    BASE_URI, CHILD_SRC, CONNECT_SRC, DEFAULT_BUFFER_CAPACITY, DEFAULT_SRC, FONT_SRC, FORM_ACTION,
    FRAME_ANCESTORS, FRAME_SRC, HEADER_CSP, IMG_SRC, MANIFEST_SRC, MEDIA_SRC, OBJECT_SRC,
    SCRIPT_SRC, SEMICOLON_SPACE, STYLE_SRC, UPGRADE_INSECURE_REQUESTS, WORKER_SRC,
};
use crate::core::directives::Directive;
use crate::core::source::Source;
use crate::error::{Result, SiteError};
use crate::utils::BufferWriter;
use actix_web::http::header::{HeaderName, HeaderValue};
use bytes::BytesMut;
use indexmap::IndexMap;
use std::borrow::Cow;

/// Directive name to its ordered source tokens.
pub type DirectiveSet = IndexMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspPolicy {
    directives: IndexMap<Cow<'static, str>, Directive>,
}

impl CspPolicy {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a directive. A replaced directive keeps its
    /// original position.
    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        let name = directive.name().to_owned();
        self.directives.insert(Cow::Owned(name), directive);
        self
    }

    #[inline]
    pub fn header_name(&self) -> HeaderName {
        HeaderName::from_static(HEADER_CSP)
    }

    pub fn header_value(&self) -> Result<HeaderValue> {
        let estimated = self
            .directives
            .values()
            .map(|d| d.estimated_size() + SEMICOLON_SPACE.len())
            .sum::<usize>();
        let mut buffer = BytesMut::with_capacity(estimated.max(DEFAULT_BUFFER_CAPACITY));

        let mut first = true;
        for directive in self.directives.values() {
            if !first {
                buffer.extend_from_slice(SEMICOLON_SPACE);
            }
            directive.write_to_buffer(&mut buffer);
            first = false;
        }

        HeaderValue::from_maybe_shared(buffer.freeze()).map_err(|_| {
            SiteError::InvalidDirectiveValue("Failed to create header value".to_string())
        })
    }

    pub fn directive_set(&self) -> DirectiveSet {
        self.directives
            .iter()
            .map(|(name, directive)| {
                let tokens = directive.sources().iter().map(|s| s.to_string()).collect();
                (name.to_string(), tokens)
            })
            .collect()
    }

    pub fn validate(&self) -> Result<()> {
        for directive in self.directives.values() {
            directive.validate()?;
        }
        Ok(())
    }

    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.get(name)
    }

    #[inline]
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.values()
    }

    #[inline]
    pub fn contains_nonce(&self) -> bool {
        self.directives.values().any(|d| d.contains_nonce())
    }
}

#[derive(Debug, Default)]
pub struct CspPolicyBuilder {
    policy: CspPolicy,
}

impl CspPolicyBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            policy: CspPolicy::new(),
        }
    }

    #[inline]
    pub fn with_directive(mut self, directive: Directive) -> Self {
        self.policy.add_directive(directive);
        self
    }

    fn sources(self, name: &'static str, sources: impl IntoIterator<Item = Source>) -> Self {
        self.with_directive(Directive::with_sources(name, sources))
    }

    pub fn base_uri(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(BASE_URI, sources)
    }

    pub fn child_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(CHILD_SRC, sources)
    }

    pub fn connect_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(CONNECT_SRC, sources)
    }

    pub fn default_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(DEFAULT_SRC, sources)
    }

    pub fn font_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(FONT_SRC, sources)
    }

    pub fn form_action(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(FORM_ACTION, sources)
    }

    pub fn frame_ancestors(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(FRAME_ANCESTORS, sources)
    }

    pub fn frame_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(FRAME_SRC, sources)
    }

    pub fn img_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(IMG_SRC, sources)
    }

    pub fn manifest_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(MANIFEST_SRC, sources)
    }

    pub fn media_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(MEDIA_SRC, sources)
    }

    pub fn object_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(OBJECT_SRC, sources)
    }

    pub fn script_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(SCRIPT_SRC, sources)
    }

    pub fn style_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(STYLE_SRC, sources)
    }

    pub fn worker_src(self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources(WORKER_SRC, sources)
    }

    pub fn upgrade_insecure_requests(self) -> Self {
        self.with_directive(Directive::new(UPGRADE_INSECURE_REQUESTS))
    }

    pub fn build(self) -> Result<CspPolicy> {
        self.policy.validate()?;
        Ok(self.policy)
    }

    #[inline]
    pub fn build_unchecked(self) -> CspPolicy {
        self.policy
    }
}
