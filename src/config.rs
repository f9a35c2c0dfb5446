//! Site-wide configuration: deployment environment, public URL and the
//! navigation data shared by every page.

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_PUBLIC_URL};
use crate::error::{Result, SiteError};
use serde::Serialize;
use std::{env, path::PathBuf};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Only the exact value `production` selects production.
    pub fn from_env() -> Self {
        Self::from_value(env::var("NODE_ENV").ok().as_deref())
    }

    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Development,
        }
    }

    #[inline]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl NavLink {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinks {
    pub twitter: String,
    pub github: String,
    pub docs: String,
}

/// Resolves the public base URL from the deployment variables, falling back
/// to the local dev server.
pub fn public_url() -> Result<Url> {
    let candidate = env::var("VERCEL_PROJECT_PRODUCTION_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .or_else(|| env::var("VERCEL_URL").ok().filter(|v| !v.is_empty()));

    parse_public_url(candidate.as_deref().unwrap_or(DEFAULT_PUBLIC_URL))
}

/// Bare hosts are assumed to be served over https.
pub fn parse_public_url(value: &str) -> Result<Url> {
    let value = value.trim();
    let url = if value.starts_with("http") {
        Url::parse(value)?
    } else {
        Url::parse(&format!("https://{}", value))?
    };
    Ok(url)
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    name: String,
    environment: Environment,
    public_url: Url,
    bind_addr: String,
    legal_content: Option<PathBuf>,
    main_nav: Vec<NavLink>,
    policy_links: Vec<NavLink>,
    links: SocialLinks,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        let mut builder = SiteConfigBuilder::new()
            .environment(Environment::from_env())
            .public_url(public_url()?);

        if let Ok(addr) = env::var("BIND_ADDR") {
            builder = builder.bind_addr(addr);
        }
        if let Ok(path) = env::var("LEGAL_CONTENT") {
            builder = builder.legal_content(path);
        }

        builder.build()
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn environment(&self) -> Environment {
        self.environment
    }

    #[inline]
    pub fn public_url(&self) -> &Url {
        &self.public_url
    }

    #[inline]
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    #[inline]
    pub fn legal_content(&self) -> Option<&PathBuf> {
        self.legal_content.as_ref()
    }

    #[inline]
    pub fn main_nav(&self) -> &[NavLink] {
        &self.main_nav
    }

    #[inline]
    pub fn policy_links(&self) -> &[NavLink] {
        &self.policy_links
    }

    #[inline]
    pub fn links(&self) -> &SocialLinks {
        &self.links
    }

    pub fn absolute_url(&self, path: &str) -> Result<String> {
        Ok(self.public_url.join(path)?.to_string())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Supafox".to_string(),
            environment: Environment::Development,
            public_url: Url::parse(DEFAULT_PUBLIC_URL).expect("default public URL is valid"),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            legal_content: None,
            main_nav: vec![
                NavLink::new("Legal", "/legal"),
                NavLink::new("Terms", "/legal/terms"),
                NavLink::new("Privacy", "/legal/privacy"),
            ],
            policy_links: vec![
                NavLink::new("Terms", "/legal/terms"),
                NavLink::new("Privacy", "/legal/privacy"),
            ],
            links: SocialLinks {
                twitter: "https://x.com/supafoxDEV".to_string(),
                github: "https://github.com/supafox".to_string(),
                docs: "https://supafox.com/docs".to_string(),
            },
        }
    }
}

#[derive(Debug, Default)]
pub struct SiteConfigBuilder {
    config: SiteConfig,
}

impl SiteConfigBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    #[inline]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    #[inline]
    pub fn public_url(mut self, url: Url) -> Self {
        self.config.public_url = url;
        self
    }

    pub fn bind_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.bind_addr = addr.into();
        self
    }

    pub fn legal_content(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.legal_content = Some(path.into());
        self
    }

    pub fn main_nav(mut self, links: Vec<NavLink>) -> Self {
        self.config.main_nav = links;
        self
    }

    pub fn policy_links(mut self, links: Vec<NavLink>) -> Self {
        self.config.policy_links = links;
        self
    }

    pub fn build(self) -> Result<SiteConfig> {
        if self.config.public_url.cannot_be_a_base() {
            return Err(SiteError::ConfigError(format!(
                "public URL '{}' cannot be used as a base",
                self.config.public_url
            )));
        }
        if self.config.bind_addr.is_empty() {
            return Err(SiteError::ConfigError("bind address is empty".to_string()));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_host_gets_https() {
        let url = parse_public_url("supafox.vercel.app").unwrap();
        assert_eq!(url.as_str(), "https://supafox.vercel.app/");
    }

    #[test]
    fn explicit_scheme_is_kept() {
        let url = parse_public_url("http://localhost:3000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn node_env_selects_production() {
        assert!(Environment::from_value(Some("production")).is_production());
        assert!(!Environment::from_value(Some("development")).is_production());
        assert!(!Environment::from_value(None).is_production());
    }
}
