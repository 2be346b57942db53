//! Session
//!
//! The session is the transport collaborator every family client delegates
//! to. It owns the HTTP client, base URL, default headers and request signer,
//! and runs the shared operation pipeline: build URL, attach body and
//! headers, sign, send once, classify the status and decode.
//!
//! # Module Structure
//!
//! - [`endpoint`] - Deterministic path/query construction and per-call options
//! - [`http`] - reqwest transport with sanitized logging
//! - [`signer`] - Request signing seam

pub mod endpoint;
pub mod http;
pub mod signer;

pub use endpoint::{CallOptions, Endpoint};
pub use http::{HttpTransport, RawResponse};
pub use signer::{BearerToken, RequestSigner, Unsigned};

use crate::config::{ClientConfig, ConfigError};
use crate::error::{ApiError, Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use url::Url;

/// Shared, immutable API session
#[derive(Clone)]
pub struct Session {
    http: HttpTransport,
    signer: Arc<dyn RequestSigner>,
    base_url: Url,
    default_headers: HeaderMap,
    account_switch_key: Option<String>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url.as_str())
            .field("default_headers", &self.default_headers)
            .field("account_switch_key", &self.account_switch_key)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create a session that sends unsigned requests
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, ConfigError> {
        Self::with_signer(config, Unsigned)
    }

    /// Create a session that signs every request with `signer`
    pub fn with_signer(
        config: &ClientConfig,
        signer: impl RequestSigner + 'static,
    ) -> std::result::Result<Self, ConfigError> {
        let base_url = Url::parse(&config.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let mut default_headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| ConfigError::InvalidHeader(name.clone()))?;
            let value = HeaderValue::from_str(value)
                .map_err(|_| ConfigError::InvalidHeader(name.to_string()))?;
            default_headers.insert(name, value);
        }

        let http = HttpTransport::new(&config.user_agent, config.timeout())?;

        Ok(Self {
            http,
            signer: Arc::new(signer),
            base_url,
            default_headers,
            account_switch_key: config.account_switch_key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `endpoint` under the base URL's path, including the account switch key
    pub fn url_for(&self, endpoint: &Endpoint) -> std::result::Result<Url, url::ParseError> {
        let prefix = self.base_url.path().trim_end_matches('/');
        let mut url = self
            .base_url
            .join(&format!("{}{}", prefix, endpoint.path_and_query()))?;
        if let Some(key) = &self.account_switch_key {
            url.query_pairs_mut().append_pair("accountSwitchKey", key);
        }
        Ok(url)
    }

    /// Run one API call: send `body` (if any) to `endpoint` and decode the reply as `T`.
    ///
    /// A 2xx reply is decoded into `T`; an empty 2xx body yields `T::default()`. Any other status becomes [`Error::Api`], or [`Error::NotFound`]
    /// for endpoints that opted into the not-found rule.
    pub async fn exec<T, B>(
        &self,
        operation: &'static str,
        endpoint: &Endpoint,
        body: Option<&B>,
        opts: &CallOptions,
    ) -> Result<T>
    where
        T: DeserializeOwned + Default,
        B: Serialize + ?Sized,
    {
        let url = self
            .url_for(endpoint)
            .map_err(|source| Error::InvalidUrl { operation, source })?;

        let mut builder = self
            .http
            .client()
            .request(endpoint.method().clone(), url)
            .headers(self.default_headers.clone());

        if let Some(body) = body {
            let payload =
                serde_json::to_vec(body).map_err(|source| Error::Encode { operation, source })?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(payload);
        }

        let mut request = builder
            .headers(opts.headers().clone())
            .build()
            .map_err(|source| Error::Transport { operation, source })?;

        self.signer
            .sign(&mut request)
            .map_err(|source| Error::Signing { operation, source })?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| Error::Transport { operation, source })?;

        decode(operation, endpoint, response)
    }
}

/// Classify a raw response and decode it
fn decode<T: DeserializeOwned + Default>(
    operation: &'static str,
    endpoint: &Endpoint,
    response: RawResponse,
) -> Result<T> {
    if response.status.is_success() {
        if response.body.trim().is_empty() {
            return Ok(T::default());
        }
        return serde_json::from_str(&response.body)
            .map_err(|source| Error::Decode { operation, source });
    }

    if response.status == StatusCode::NOT_FOUND && endpoint.reports_not_found_as_path() {
        return Err(Error::NotFound {
            path: endpoint.path_and_query(),
        });
    }

    Err(Error::Api {
        operation,
        source: ApiError::from_response(response.status, &response.body),
    })
}
