pub mod metadata;
pub mod robots;
pub mod sitemap;

pub use metadata::{legal_metadata, og_image_url, OgImage, OpenGraph, PageMetadata, TwitterCard};
pub use robots::{robots, RobotsRule, RobotsRules};
pub use sitemap::{render_sitemap, sitemap, ChangeFrequency, SitemapEntry};
