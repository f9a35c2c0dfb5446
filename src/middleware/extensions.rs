use crate::constants::HEADER_NONCE;
use crate::middleware::csp::RequestId;
use crate::security::nonce::{Nonce, RequestNonce};
use actix_web::HttpMessage;

pub trait NonceExtensions {
    /// The nonce assigned by the middleware, or a validated `x-nonce` header
    /// when the extension is missing.
    fn nonce(&self) -> Option<Nonce>;

    fn request_id(&self) -> Option<String>;
}

impl<T> NonceExtensions for T
where
    T: HttpMessage,
{
    fn nonce(&self) -> Option<Nonce> {
        if let Some(nonce) = self.extensions().get::<RequestNonce>() {
            return Some(nonce.0.clone());
        }

        let header = self.headers().get(HEADER_NONCE)?;
        match header.to_str() {
            Ok(value) => Nonce::parse(value),
            Err(_) => {
                log::warn!("Non-ASCII nonce header detected, nonce will be omitted");
                None
            }
        }
    }

    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}
