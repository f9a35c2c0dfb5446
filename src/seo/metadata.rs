//! Page `<head>` metadata: title, description, OpenGraph and Twitter cards.

use crate::config::SiteConfig;
use crate::constants::{OG_IMAGE_HEIGHT, OG_IMAGE_PATH, OG_IMAGE_WIDTH};
use crate::content::legal::LegalDocument;
use crate::error::Result;
use crate::utils::escape_html;
use serde::Serialize;
use std::fmt::Write;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
}

impl PageMetadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Site-wide defaults used by pages without their own metadata.
    pub fn site_default(config: &SiteConfig) -> Self {
        let description = format!("{} starter site.", config.name());
        let open_graph = OpenGraph {
            title: config.name().to_string(),
            description: description.clone(),
            kind: "website".to_string(),
            url: config.public_url().to_string(),
            images: Vec::new(),
        };
        Self {
            title: config.name().to_string(),
            description,
            open_graph: Some(open_graph),
            twitter: None,
        }
    }

    /// The page title with the site name appended, unless they are equal.
    pub fn full_title(&self, site_name: &str) -> String {
        if self.title == site_name {
            self.title.clone()
        } else {
            format!("{} | {}", self.title, site_name)
        }
    }

    pub fn to_html(&self, site_name: &str) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.full_title(site_name)));
        meta_name(&mut html, "description", &self.description);

        if let Some(og) = &self.open_graph {
            meta_property(&mut html, "og:title", &og.title);
            meta_property(&mut html, "og:description", &og.description);
            meta_property(&mut html, "og:type", &og.kind);
            meta_property(&mut html, "og:url", &og.url);
            for image in &og.images {
                meta_property(&mut html, "og:image", &image.url);
                meta_property(&mut html, "og:image:width", &image.width.to_string());
                meta_property(&mut html, "og:image:height", &image.height.to_string());
                meta_property(&mut html, "og:image:alt", &image.alt);
            }
        }

        if let Some(twitter) = &self.twitter {
            meta_name(&mut html, "twitter:card", &twitter.card);
            meta_name(&mut html, "twitter:title", &twitter.title);
            meta_name(&mut html, "twitter:description", &twitter.description);
            for image in &twitter.images {
                meta_name(&mut html, "twitter:image", image);
            }
        }

        html
    }
}

fn meta_name(html: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        html,
        r#"<meta name="{}" content="{}">"#,
        name,
        escape_html(content)
    );
}

fn meta_property(html: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        html,
        r#"<meta property="{}" content="{}">"#,
        property,
        escape_html(content)
    );
}

/// `<base>/api/og?heading=<heading>&type=<kind>&mode=dark`.
pub fn og_image_url(base_url: &Url, heading: &str, kind: &str) -> Result<String> {
    let mut url = base_url.join(OG_IMAGE_PATH)?;
    url.query_pairs_mut()
        .append_pair("heading", heading)
        .append_pair("type", kind)
        .append_pair("mode", "dark");
    Ok(url.to_string())
}

/// Metadata for a legal document page. The generated OpenGraph image comes
/// first, followed by any images inherited from the parent layout.
pub fn legal_metadata(
    doc: &LegalDocument,
    config: &SiteConfig,
    parent_images: &[OgImage],
) -> Result<PageMetadata> {
    let og_url = og_image_url(config.public_url(), &doc.meta_title, "Legal")?;

    let mut images = Vec::with_capacity(parent_images.len() + 1);
    images.push(OgImage {
        url: og_url.clone(),
        width: OG_IMAGE_WIDTH,
        height: OG_IMAGE_HEIGHT,
        alt: doc.meta_title.clone(),
    });
    images.extend_from_slice(parent_images);

    Ok(PageMetadata {
        title: doc.meta_title.clone(),
        description: doc.meta_description.clone(),
        open_graph: Some(OpenGraph {
            title: doc.meta_title.clone(),
            description: doc.meta_description.clone(),
            kind: "article".to_string(),
            url: config.absolute_url(&doc.slug)?,
            images,
        }),
        twitter: Some(TwitterCard {
            card: "summary_large_image".to_string(),
            title: doc.meta_title.clone(),
            description: doc.meta_description.clone(),
            images: vec![og_url],
        }),
    })
}
