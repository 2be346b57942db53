//! Request signing
//!
//! The session calls a [`RequestSigner`] on every fully-built request, after
//! default and per-call headers are applied. Provider signing schemes plug in
//! here; the crate ships an unsigned signer and a static bearer token signer.

use crate::error::SignError;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::Request;
use std::fmt;

/// Signs outgoing requests in place
pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &mut Request) -> Result<(), SignError>;
}

impl<F> RequestSigner for F
where
    F: Fn(&mut Request) -> Result<(), SignError> + Send + Sync,
{
    fn sign(&self, request: &mut Request) -> Result<(), SignError> {
        self(request)
    }
}

/// Leaves requests untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsigned;

impl RequestSigner for Unsigned {
    fn sign(&self, _request: &mut Request) -> Result<(), SignError> {
        Ok(())
    }
}

/// Adds `Authorization: Bearer <token>`
#[derive(Clone)]
pub struct BearerToken {
    token: String,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Security: never print the token
impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken").field("token", &"<redacted>").finish()
    }
}

impl RequestSigner for BearerToken {
    fn sign(&self, request: &mut Request) -> Result<(), SignError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
