use actix_web::body::{BoxBody, EitherBody};
use actix_web::middleware::NormalizePath;
use actix_web::{test, web, App};
use supafox_web::config::{Environment, SiteConfigBuilder};
use supafox_web::content::LegalCollection;
use supafox_web::core::CspConfig;
use supafox_web::middleware::SecurityHeaders;
use supafox_web::pages::{configure, SiteState};
use url::Url;

fn state(legal: &str) -> web::Data<SiteState> {
    let config = SiteConfigBuilder::new()
        .environment(Environment::Production)
        .public_url(Url::parse("https://supafox.example").unwrap())
        .build()
        .unwrap();
    web::Data::new(SiteState::new(
        config,
        LegalCollection::from_json(legal).unwrap(),
    ))
}

fn bundled() -> web::Data<SiteState> {
    state(include_str!("../content/legal.json"))
}

/// The production app wiring around `state`.
fn site_app(
    state: web::Data<SiteState>,
) -> App<
    impl actix_service::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<EitherBody<BoxBody>>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(SecurityHeaders::new(CspConfig::new(Environment::Production)))
        .wrap(NormalizePath::trim())
        .configure(configure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[actix_web::test]
    async fn test_page_scripts_carry_response_nonce() {
        let app = test::init_service(site_app(bundled())).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let nonce = resp.headers().get("x-nonce").unwrap().to_str().unwrap().to_string();
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

        assert!(body.contains(&format!(r#"<script nonce="{}">"#, nonce)));
        assert!(body.contains(&format!(r#"<style nonce="{}">"#, nonce)));
        assert!(body.contains("<title>Supafox</title>"));
        assert!(body.contains(r#"<a href="https://github.com/supafox""#));
        assert!(body.contains(r#"<a href="https://supafox.com/docs""#));
    }

    #[actix_web::test]
    async fn test_legal_index_lists_published_documents() {
        let app = test::init_service(site_app(bundled())).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/legal").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

        assert!(body.contains("grid grid-cols-1 md:grid-cols-2 gap-4"));
        assert!(body.contains("Privacy Policy"));
        assert!(body.contains("June 1, 2024"));
        assert!(body.find("Privacy Policy") < body.find("Terms of Service"));
    }

    #[actix_web::test]
    async fn test_empty_legal_index() {
        let app = test::init_service(site_app(state("[]"))).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/legal").to_request()).await;
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("No legal documents published."));
    }

    #[actix_web::test]
    async fn test_legal_document_page() {
        let app = test::init_service(site_app(bundled())).await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/legal/terms").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();

        assert!(body.contains("<h2>Acceptance of terms</h2>"));
        assert!(body.contains("See all legal docs"));
        assert!(body.contains(
            r#"<meta property="og:url" content="https://supafox.example/legal/terms">"#
        ));
        assert!(body.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    }

    #[actix_web::test]
    async fn test_trailing_slash_is_trimmed() {
        let app = test::init_service(site_app(bundled())).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/legal/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("This section includes legal documents for the app."));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/legal/privacy/").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<h2>Information we collect</h2>"));
    }

    #[actix_web::test]
    async fn test_unknown_pages_are_404() {
        let app = test::init_service(site_app(bundled())).await;

        for uri in ["/legal/cookies", "/nowhere"] {
            let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
            assert!(resp.headers().contains_key("content-security-policy"));
            let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
            assert!(body.contains("Go to Home"));
        }
    }

    #[actix_web::test]
    async fn test_robots_and_sitemap_bypass_headers() {
        let app = test::init_service(site_app(bundled())).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/robots.txt").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("content-security-policy").is_none());
        let body = test::read_body(resp).await;
        assert!(body.ends_with(b"Sitemap: https://supafox.example/sitemap.xml\n"));

        let resp = test::call_service(&app, test::TestRequest::get().uri("/sitemap.xml").to_request()).await;
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/xml; charset=utf-8"
        );
        let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(body.contains("<loc>https://supafox.example/legal</loc>"));
    }
}
