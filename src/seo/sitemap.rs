//! sitemap.xml entries.

use crate::error::Result;
use crate::utils::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

const PAGES: &[(&str, ChangeFrequency, f32)] = &[
    ("/legal", ChangeFrequency::Monthly, 0.7),
    ("/legal/privacy", ChangeFrequency::Yearly, 0.5),
    ("/legal/terms", ChangeFrequency::Yearly, 0.5),
];

/// Home first, then the legal pages in descending priority.
pub fn sitemap(base_url: &Url, now: DateTime<Utc>) -> Result<Vec<SitemapEntry>> {
    let mut entries = Vec::with_capacity(PAGES.len() + 1);
    entries.push(SitemapEntry {
        url: base_url.to_string(),
        last_modified: now,
        change_frequency: ChangeFrequency::Weekly,
        priority: 1.0,
    });

    for &(path, change_frequency, priority) in PAGES {
        entries.push(SitemapEntry {
            url: base_url.join(path)?.to_string(),
            last_modified: now,
            change_frequency,
            priority,
        });
    }

    Ok(entries)
}

pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let mut xml = String::from(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for entry in entries {
        let _ = write!(
            xml,
            "<url>\n<loc>{}</loc>\n<lastmod>{}</lastmod>\n<changefreq>{}</changefreq>\n<priority>{:.1}</priority>\n</url>\n",
            escape_xml(&entry.url),
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.change_frequency.as_str(),
            entry.priority,
        );
    }

    xml.push_str("</urlset>\n");
    xml
}
