use crate::constants::DEFAULT_NONCE_LENGTH;
use crate::error::{Result, SiteError};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use smallvec::{smallvec, SmallVec};
use std::{fmt, ops::Deref, sync::Arc};

/// Source of cryptographically secure random bytes.
pub trait EntropySource: Send + Sync {
    fn fill(&self, buffer: &mut [u8]) -> Result<()>;
}

/// The operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    #[inline]
    fn fill(&self, buffer: &mut [u8]) -> Result<()> {
        getrandom::getrandom(buffer).map_err(|e| SiteError::EntropyUnavailable(e.to_string()))
    }
}

/// A base64 (standard alphabet, padded) token valid for a single response.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nonce(String);

impl Nonce {
    /// Accepts an externally supplied value only if it is well-formed base64.
    ///
    /// Malformed input is dropped with a warning so callers can carry on
    /// without a nonce.
    pub fn parse(candidate: &str) -> Option<Self> {
        if is_valid_nonce(candidate) {
            Some(Self(candidate.to_owned()))
        } else {
            log::warn!("Invalid nonce format detected, nonce will be omitted");
            None
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for Nonce {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Nonce {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Returns true iff `candidate` matches `^[A-Za-z0-9+/]+={0,2}$`.
pub fn is_valid_nonce(candidate: &str) -> bool {
    let body = candidate.trim_end_matches('=');
    let padding = candidate.len() - body.len();

    padding <= 2
        && !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}

/// Generates a fresh 16-byte nonce from the OS random source.
#[inline]
pub fn generate_nonce() -> Result<Nonce> {
    NonceGenerator::default().generate()
}

#[derive(Clone)]
pub struct NonceGenerator {
    length: usize,
    source: Arc<dyn EntropySource>,
}

impl fmt::Debug for NonceGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonceGenerator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

impl NonceGenerator {
    #[inline]
    pub fn new(length: usize) -> Self {
        Self::with_source(length, Arc::new(OsEntropy))
    }

    #[inline]
    pub fn with_source(length: usize, source: Arc<dyn EntropySource>) -> Self {
        Self { length, source }
    }

    pub fn generate(&self) -> Result<Nonce> {
        if self.length == 0 {
            return Err(SiteError::InvalidNonceValue(
                "nonce length must be non-zero".to_string(),
            ));
        }

        let mut buffer: SmallVec<[u8; 32]> = smallvec![0u8; self.length];
        self.source.fill(&mut buffer)?;

        Ok(Nonce(BASE64.encode(&buffer)))
    }

    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for NonceGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_NONCE_LENGTH)
    }
}

/// The nonce assigned to the current request, stored in its extensions.
#[derive(Debug, Clone)]
pub struct RequestNonce(pub Nonce);

impl Deref for RequestNonce {
    type Target = Nonce;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
