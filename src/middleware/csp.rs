use crate::constants::HEADER_NONCE;
use crate::core::config::CspConfig;
use crate::core::headers::security_headers;
use crate::error::SiteError;
use crate::middleware::matcher::{classify, Disposition};
use crate::security::nonce::{NonceGenerator, RequestNonce};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error, HttpMessage, HttpResponse,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::{rc::Rc, sync::Arc};
use uuid::Uuid;

/// Identifier attached to every secured request for log correlation.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

#[derive(Clone)]
pub struct SecurityHeaders {
    config: Arc<CspConfig>,
    generator: Arc<NonceGenerator>,
}

impl SecurityHeaders {
    #[inline]
    pub fn new(config: CspConfig) -> Self {
        Self::with_generator(config, NonceGenerator::default())
    }

    #[inline]
    pub fn with_generator(config: CspConfig, generator: NonceGenerator) -> Self {
        Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
        }
    }

    #[inline]
    pub fn config(&self) -> Arc<CspConfig> {
        self.config.clone()
    }
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = SecurityHeadersService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersService {
            service: Rc::new(service),
            config: self.config.clone(),
            generator: self.generator.clone(),
        }))
    }
}

pub struct SecurityHeadersService<S> {
    service: Rc<S>,
    config: Arc<CspConfig>,
    generator: Arc<NonceGenerator>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        if classify(req.path()) == Disposition::Bypass {
            return Box::pin(async move {
                service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body)
            });
        }

        let config = self.config.clone();
        let generator = self.generator.clone();

        Box::pin(async move {
            let request_id = Uuid::new_v4()
                .hyphenated()
                .encode_lower(&mut Uuid::encode_buffer())
                .to_owned();

            let nonce = match generator.generate() {
                Ok(nonce) => nonce,
                Err(e) => {
                    log::error!("Failed to generate nonce for request {}: {}", request_id, e);
                    let (http_req, _) = req.into_parts();
                    let res = HttpResponse::InternalServerError()
                        .content_type("text/plain; charset=utf-8")
                        .body("Internal Server Error");
                    return Ok(ServiceResponse::new(http_req, res).map_into_right_body());
                }
            };

            let nonce_value = HeaderValue::from_str(nonce.as_str())
                .map_err(|e| SiteError::HeaderError(e.to_string()))?;
            let headers = security_headers(&config.build_policy(&nonce))?;

            log::debug!(
                "Securing {} {} (request {})",
                req.method(),
                req.path(),
                request_id
            );

            req.headers_mut()
                .insert(HeaderName::from_static(HEADER_NONCE), nonce_value.clone());
            req.extensions_mut().insert(RequestId(request_id));
            req.extensions_mut().insert(RequestNonce(nonce));

            let mut res = service.call(req).await?;

            let response_headers = res.headers_mut();
            for (name, value) in headers {
                response_headers.insert(name, value);
            }
            response_headers.insert(HeaderName::from_static(HEADER_NONCE), nonce_value);

            Ok(res.map_into_left_body())
        })
    }
}

#[inline]
pub fn security_headers_middleware(config: CspConfig) -> SecurityHeaders {
    SecurityHeaders::new(config)
}
