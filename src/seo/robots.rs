//! robots.txt rules.

use crate::constants::ROBOTS_DISALLOW;
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsRules {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
}

impl RobotsRules {
    /// True if some rule has an `Allow` line for exactly `path`. No prefix
    /// matching is done.
    pub fn lists_allow(&self, path: &str) -> bool {
        self.rules.iter().any(|rule| rule.allow.iter().any(|a| a == path))
    }

    /// True if some rule has a `Disallow` line for exactly `path`.
    pub fn lists_disallow(&self, path: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.disallow.iter().any(|d| d == path))
    }

    pub fn to_txt(&self) -> String {
        let mut out = String::new();

        for rule in &self.rules {
            let _ = writeln!(out, "User-Agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {}", path);
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {}", path);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

/// Crawl rules for every user agent plus the absolute sitemap location.
pub fn robots(base_url: &Url) -> Result<RobotsRules> {
    Ok(RobotsRules {
        rules: vec![RobotsRule {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: ROBOTS_DISALLOW.iter().map(|p| p.to_string()).collect(),
        }],
        sitemap: base_url.join("/sitemap.xml")?.to_string(),
    })
}
