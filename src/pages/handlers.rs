use crate::config::SiteConfig;
use crate::content::legal::LegalCollection;
use crate::error::{Result, SiteError};
use crate::layout::ClassTables;
use crate::middleware::extensions::NonceExtensions;
use crate::pages::shell::{render_document, Shell};
use crate::pages::views;
use crate::seo::metadata::{legal_metadata, PageMetadata};
use crate::seo::robots::robots;
use crate::seo::sitemap::{render_sitemap, sitemap};
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};
use chrono::{Datelike, Utc};

/// Shared, read-only application state.
pub struct SiteState {
    pub config: SiteConfig,
    pub legal: LegalCollection,
}

impl SiteState {
    pub fn new(config: SiteConfig, legal: LegalCollection) -> Self {
        Self { config, legal }
    }
}

fn html_page(
    req: &HttpRequest,
    state: &SiteState,
    status: StatusCode,
    metadata: &PageMetadata,
    body: String,
) -> HttpResponse {
    let nonce = req.nonce();
    let shell = Shell {
        config: &state.config,
        metadata,
        path: req.path(),
        nonce: nonce.as_ref(),
        year: Utc::now().year(),
        body,
    };

    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(render_document(&shell, ClassTables::global()))
}

pub async fn robots_txt(state: web::Data<SiteState>) -> Result<HttpResponse> {
    let rules = robots(state.config.public_url())?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(rules.to_txt()))
}

pub async fn sitemap_xml(state: web::Data<SiteState>) -> Result<HttpResponse> {
    let entries = sitemap(state.config.public_url(), Utc::now())?;
    Ok(HttpResponse::Ok()
        .content_type("application/xml; charset=utf-8")
        .body(render_sitemap(&entries)))
}

pub async fn home(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let metadata = PageMetadata::site_default(&state.config);
    let body = views::home(ClassTables::global(), &state.config);
    html_page(&req, &state, StatusCode::OK, &metadata, body)
}

pub async fn legal_index(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    let metadata = PageMetadata::new(views::LEGAL_HEADING, views::LEGAL_DESCRIPTION);
    let documents = state.legal.published();
    let body = views::legal_index(ClassTables::global(), &documents);
    html_page(&req, &state, StatusCode::OK, &metadata, body)
}

pub async fn legal_page(
    req: HttpRequest,
    state: web::Data<SiteState>,
    slug: web::Path<String>,
) -> Result<HttpResponse> {
    let segments: Vec<&str> = slug.split('/').filter(|s| !s.is_empty()).collect();

    let doc = match state.legal.find(&segments) {
        Ok(doc) => doc,
        Err(SiteError::NotFound(what)) => {
            log::debug!("No published {} for {}", what, req.path());
            return Ok(not_found_page(&req, &state));
        }
        Err(e) => return Err(e),
    };

    let parent = PageMetadata::site_default(&state.config);
    let parent_images = parent
        .open_graph
        .as_ref()
        .map(|og| og.images.as_slice())
        .unwrap_or_default();
    let metadata = legal_metadata(doc, &state.config, parent_images)?;
    let body = views::legal_document(ClassTables::global(), doc);

    Ok(html_page(&req, &state, StatusCode::OK, &metadata, body))
}

fn not_found_page(req: &HttpRequest, state: &SiteState) -> HttpResponse {
    let metadata = PageMetadata::new("Not Found", "The page you requested does not exist.");
    let body = views::not_found(ClassTables::global());
    html_page(req, state, StatusCode::NOT_FOUND, &metadata, body)
}

pub async fn not_found(req: HttpRequest, state: web::Data<SiteState>) -> HttpResponse {
    not_found_page(&req, &state)
}

/// Registers every route. The caller provides `web::Data<SiteState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/robots.txt", web::get().to(robots_txt))
        .route("/sitemap.xml", web::get().to(sitemap_xml))
        .route("/", web::get().to(home))
        .route("/legal", web::get().to(legal_index))
        .route("/legal/{slug:.*}", web::get().to(legal_page))
        .default_service(web::to(not_found));
}
