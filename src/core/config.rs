use crate::config::Environment;
use crate::constants::{GOOGLE_FONTS_FILES, GOOGLE_FONTS_STYLESHEETS};
use crate::core::policy::{CspPolicy, CspPolicyBuilder};
use crate::core::source::Source;
use crate::security::nonce::Nonce;
use smallvec::{smallvec, SmallVec};
use std::borrow::Cow;

type Sources = SmallVec<[Source; 4]>;

/// Process-wide policy inputs. Everything request-specific (the nonce) is
/// passed to [`CspConfig::build_policy`].
#[derive(Debug, Clone)]
pub struct CspConfig {
    environment: Environment,
    script_hosts: Sources,
    font_hosts: Sources,
    img_sources: Sources,
}

impl CspConfig {
    #[inline]
    pub fn new(environment: Environment) -> Self {
        CspConfigBuilder::new().environment(environment).build()
    }

    #[inline]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn build_policy(&self, nonce: &Nonce) -> CspPolicy {
        let mut script_src: Sources = smallvec![Source::Self_, Source::from_nonce(nonce)];
        script_src.extend(self.script_hosts.iter().cloned());

        let mut font_src: Sources = smallvec![Source::Self_];
        font_src.extend(self.font_hosts.iter().cloned());

        let mut img_src: Sources = smallvec![Source::Self_];
        img_src.extend(self.img_sources.iter().cloned());

        let builder = CspPolicyBuilder::new()
            .base_uri([Source::None])
            .child_src([Source::None])
            .connect_src([Source::Self_])
            .default_src([Source::Self_])
            .font_src(font_src)
            .form_action([Source::Self_])
            .frame_ancestors([Source::None])
            .frame_src([Source::None])
            .img_src(img_src)
            .manifest_src([Source::Self_])
            .media_src([Source::Self_])
            .object_src([Source::None])
            .script_src(script_src)
            .style_src([Source::Self_, Source::UnsafeInline])
            .worker_src([Source::Self_]);

        if self.environment.is_production() {
            builder.upgrade_insecure_requests().build_unchecked()
        } else {
            builder.build_unchecked()
        }
    }
}

impl Default for CspConfig {
    fn default() -> Self {
        CspConfigBuilder::new().build()
    }
}

/// Builds the site policy for `nonce` with the default host allow-lists.
#[inline]
pub fn build_policy(nonce: &Nonce, environment: &Environment) -> CspPolicy {
    CspConfig::new(*environment).build_policy(nonce)
}

#[derive(Debug)]
pub struct CspConfigBuilder {
    environment: Environment,
    script_hosts: Sources,
    font_hosts: Sources,
    img_sources: Sources,
}

impl Default for CspConfigBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            script_hosts: smallvec![Source::Host(Cow::Borrowed(GOOGLE_FONTS_STYLESHEETS))],
            font_hosts: smallvec![Source::Host(Cow::Borrowed(GOOGLE_FONTS_FILES))],
            img_sources: smallvec![Source::Scheme(Cow::Borrowed("blob"))],
        }
    }
}

impl CspConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn script_host(mut self, host: impl Into<Cow<'static, str>>) -> Self {
        self.script_hosts.push(Source::Host(host.into()));
        self
    }

    pub fn font_host(mut self, host: impl Into<Cow<'static, str>>) -> Self {
        self.font_hosts.push(Source::Host(host.into()));
        self
    }

    pub fn img_source(mut self, source: Source) -> Self {
        self.img_sources.push(source);
        self
    }

    pub fn build(self) -> CspConfig {
        CspConfig {
            environment: self.environment,
            script_hosts: self.script_hosts,
            font_hosts: self.font_hosts,
            img_sources: self.img_sources,
        }
    }
}
