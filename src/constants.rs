pub(crate) const HEADER_CSP: &str = "content-security-policy";
pub(crate) const HEADER_NONCE: &str = "x-nonce";

pub(crate) const BASE_URI: &str = "base-uri";
pub(crate) const CHILD_SRC: &str = "child-src";
pub(crate) const CONNECT_SRC: &str = "connect-src";
pub(crate) const DEFAULT_SRC: &str = "default-src";
pub(crate) const FONT_SRC: &str = "font-src";
pub(crate) const FORM_ACTION: &str = "form-action";
pub(crate) const FRAME_ANCESTORS: &str = "frame-ancestors";
pub(crate) const FRAME_SRC: &str = "frame-src";
pub(crate) const IMG_SRC: &str = "img-src";
pub(crate) const MANIFEST_SRC: &str = "manifest-src";
pub(crate) const MEDIA_SRC: &str = "media-src";
pub(crate) const OBJECT_SRC: &str = "object-src";
pub(crate) const SCRIPT_SRC: &str = "script-src";
pub(crate) const STYLE_SRC: &str = "style-src";
pub(crate) const WORKER_SRC: &str = "worker-src";
pub(crate) const UPGRADE_INSECURE_REQUESTS: &str = "upgrade-insecure-requests";

pub(crate) const NONE_SOURCE: &str = "'none'";
pub(crate) const SELF_SOURCE: &str = "'self'";
pub(crate) const UNSAFE_INLINE_SOURCE: &str = "'unsafe-inline'";
pub(crate) const NONCE_PREFIX: &str = "'nonce-";
pub(crate) const SUFFIX_QUOTE: &str = "'";

pub(crate) const GOOGLE_FONTS_STYLESHEETS: &str = "https://fonts.googleapis.com";
pub(crate) const GOOGLE_FONTS_FILES: &str = "https://fonts.gstatic.com";

pub(crate) const DEFAULT_NONCE_LENGTH: usize = 16;
pub(crate) const SEMICOLON_SPACE: &[u8] = b"; ";
pub(crate) const DEFAULT_BUFFER_CAPACITY: usize = 512;

pub(crate) const BYPASS_PREFIXES: &[&str] = &["/_next", "/api"];

pub(crate) const STATIC_EXTENSIONS: &[&str] = &[
    "ico", "png", "jpg", "jpeg", "gif", "svg", "webp", "avif", "mp4", "webm", "mov", "avi", "css",
    "js", "woff", "woff2", "ttf", "eot", "otf", "pdf", "zip", "rar", "7z", "mp3", "wav", "ogg",
    "m4a", "json", "xml", "txt", "md",
];

pub(crate) const ROBOTS_DISALLOW: &[&str] = &[
    "/api/",
    "/_next/",
    "/_static/",
    "/admin/",
    "/dashboard/",
    "/private/",
    "/internal/",
    "/temp/",
    "/test/",
    "/debug/",
    "/.well-known/",
    "/robots.txt",
    "/sitemap.xml",
];

pub(crate) const DEFAULT_PUBLIC_URL: &str = "http://localhost:3000";
pub(crate) const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

pub(crate) const OG_IMAGE_PATH: &str = "/api/og";
pub(crate) const OG_IMAGE_WIDTH: u32 = 1200;
pub(crate) const OG_IMAGE_HEIGHT: u32 = 630;
