//! Published legal documents (privacy policy, terms, ...) as delivered by the
//! content pipeline: a JSON array of pre-compiled records.

use crate::error::{Result, SiteError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalBody {
    #[serde(default)]
    pub raw: String,
    /// Pre-rendered HTML for the document body.
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocument {
    #[serde(rename = "_id")]
    pub id: String,
    /// Site path, e.g. `/legal/privacy`.
    pub slug: String,
    /// Path below `/legal`, e.g. `privacy`.
    pub slug_as_params: String,
    pub page_title: String,
    #[serde(default)]
    pub page_description: Option<String>,
    pub meta_title: String,
    pub meta_description: String,
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub body: LegalBody,
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_date(&value).map_err(serde::de::Error::custom)
}

pub(crate) fn parse_date(value: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("invalid date '{}'", value))
}

#[derive(Debug, Clone, Default)]
pub struct LegalCollection {
    documents: Vec<LegalDocument>,
}

impl LegalCollection {
    pub fn new(documents: Vec<LegalDocument>) -> Self {
        Self { documents }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let documents: Vec<LegalDocument> = serde_json::from_str(json)?;
        log::debug!("Loaded {} legal documents", documents.len());
        Ok(Self::new(documents))
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    #[inline]
    pub fn all(&self) -> &[LegalDocument] {
        &self.documents
    }

    /// Published documents, newest first.
    pub fn published(&self) -> Vec<&LegalDocument> {
        let mut published: Vec<&LegalDocument> =
            self.documents.iter().filter(|doc| doc.published).collect();
        published.sort_by(|a, b| b.date.cmp(&a.date));
        published
    }

    /// Looks up a published document by its path segments below `/legal`.
    pub fn find<S: AsRef<str>>(&self, segments: &[S]) -> Result<&LegalDocument> {
        let slug = segments
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join("/");

        self.documents
            .iter()
            .find(|doc| doc.published && doc.slug_as_params == slug)
            .ok_or_else(|| SiteError::NotFound(format!("legal document '{}'", slug)))
    }

    /// Path segments of every published document, for pre-rendering.
    pub fn static_params(&self) -> Vec<Vec<String>> {
        self.documents
            .iter()
            .filter(|doc| doc.published)
            .map(|doc| doc.slug_as_params.split('/').map(str::to_string).collect())
            .collect()
    }
}

/// `January 5, 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}
