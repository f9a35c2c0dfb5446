use actix_web::{test, web, App, HttpRequest, HttpResponse};
use mockall::mock;
use std::sync::Arc;
use supafox_web::config::Environment;
use supafox_web::core::CspConfig;
use supafox_web::error::{Result, SiteError};
use supafox_web::middleware::{classify, Disposition, NonceExtensions, SecurityHeaders};
use supafox_web::security::{is_valid_nonce, EntropySource, NonceGenerator};

mock! {
    pub Entropy {}

    impl EntropySource for Entropy {
        fn fill(&self, buffer: &mut [u8]) -> Result<()>;
    }
}

async fn echo_nonce(req: HttpRequest) -> HttpResponse {
    let nonce = req.nonce().map(|n| n.into_inner()).unwrap_or_default();
    HttpResponse::Ok().body(nonce)
}

async fn plain() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

fn script_nonce(csp: &str) -> Option<&str> {
    csp.split("; ")
        .find(|d| d.starts_with("script-src"))?
        .split(' ')
        .find_map(|token| token.strip_prefix("'nonce-")?.strip_suffix('\''))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use test_case::test_case;

    #[test_case("/_next/static/chunk.js" ; "framework assets")]
    #[test_case("/api/og" ; "api")]
    #[test_case("/favicon.ico" ; "icon")]
    #[test_case("/images/hero.webp" ; "image")]
    #[test_case("/robots.txt" ; "robots")]
    #[test_case("/sitemap.xml" ; "sitemap")]
    fn test_bypassed_paths(path: &str) {
        assert_eq!(classify(path), Disposition::Bypass);
    }

    #[test_case("/" ; "home")]
    #[test_case("/legal" ; "legal index")]
    #[test_case("/legal/privacy" ; "legal page")]
    #[test_case("/photo.PNG" ; "extension match is case sensitive")]
    fn test_secured_paths(path: &str) {
        assert_eq!(classify(path), Disposition::Secured);
    }

    #[actix_web::test]
    async fn test_secured_response_has_all_headers() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::new(CspConfig::new(Environment::Production)))
                .route("/", web::get().to(echo_nonce)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let headers = resp.headers().clone();
        let csp = headers
            .get("content-security-policy")
            .expect("CSP header not found")
            .to_str()
            .unwrap()
            .to_string();
        let header_nonce = headers.get("x-nonce").unwrap().to_str().unwrap().to_string();

        assert!(is_valid_nonce(&header_nonce));
        assert_eq!(script_nonce(&csp), Some(header_nonce.as_str()));
        assert!(csp.ends_with("upgrade-insecure-requests"));

        for name in [
            "cross-origin-embedder-policy",
            "cross-origin-opener-policy",
            "cross-origin-resource-policy",
            "origin-agent-cluster",
            "referrer-policy",
            "strict-transport-security",
            "x-content-type-options",
            "x-dns-prefetch-control",
            "x-download-options",
            "x-frame-options",
            "x-permitted-cross-domain-policies",
            "x-xss-protection",
        ] {
            assert!(headers.contains_key(name), "missing {}", name);
        }

        let body = test::read_body(resp).await;
        assert_eq!(body, header_nonce.as_bytes());
    }

    #[actix_web::test]
    async fn test_each_request_gets_fresh_nonce() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::new(CspConfig::default()))
                .route("/", web::get().to(plain)),
        )
        .await;

        let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let second = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_ne!(
            first.headers().get("x-nonce"),
            second.headers().get("x-nonce")
        );
    }

    #[actix_web::test]
    async fn test_bypassed_request_is_untouched() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::new(CspConfig::default()))
                .route("/api/health", web::get().to(echo_nonce))
                .route("/logo.svg", web::get().to(plain)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers().get("content-security-policy").is_none());
        assert!(resp.headers().get("x-nonce").is_none());
        assert!(test::read_body(resp).await.is_empty());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/logo.svg").to_request()).await;
        assert!(resp.headers().get("x-frame-options").is_none());
    }

    #[actix_web::test]
    async fn test_client_nonce_header_is_replaced() {
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::new(CspConfig::default()))
                .route("/", web::get().to(echo_nonce)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("x-nonce", "Zm9yZ2VkLW5vbmNl"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        let header_nonce = resp.headers().get("x-nonce").unwrap().to_str().unwrap().to_string();
        assert_ne!(header_nonce, "Zm9yZ2VkLW5vbmNl");
        assert_eq!(test::read_body(resp).await, header_nonce.as_bytes());
    }

    #[actix_web::test]
    async fn test_entropy_failure_returns_500() {
        let mut entropy = MockEntropy::new();
        entropy
            .expect_fill()
            .times(1)
            .returning(|_| Err(SiteError::EntropyUnavailable("exhausted".to_string())));

        let generator = NonceGenerator::with_source(16, Arc::new(entropy));
        let app = test::init_service(
            App::new()
                .wrap(SecurityHeaders::with_generator(CspConfig::default(), generator))
                .route("/", web::get().to(plain)),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(resp.headers().get("content-security-policy").is_none());
        assert!(resp.headers().get("x-nonce").is_none());
        assert_eq!(test::read_body(resp).await, "Internal Server Error");
    }

    #[actix_web::test]
    async fn test_handler_without_middleware_falls_back_to_header() {
        let app = test::init_service(App::new().route("/", web::get().to(echo_nonce))).await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("x-nonce", "abc\"onload=alert(1)"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(test::read_body(resp).await.is_empty());

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("x-nonce", "YWJjZGVm"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(test::read_body(resp).await, "YWJjZGVm");
    }
}
