//! Error types
//!
//! `ApiError` is the decoded form of a non-2xx JSON response. `Error` is the
//! crate-wide error returned by every operation; `ErrorKind` lets callers
//! branch on the failure class without matching on message text.

use crate::validation::ValidationError;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result alias used by every operation in the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by request signers
pub type SignError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Title used when an error body is not valid problem JSON
pub const UNDECODABLE_ERROR_TITLE: &str = "Failed to unmarshal error body";

/// One entry of the `errors` list attached to a problem response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Structured error decoded from a non-success API response.
///
/// Two values compare equal when `error_type`, `title`, `detail` and
/// `status_code` match. The `errors` lists are compared only when both sides
/// carry one; `instance` is never compared.
#[derive(Debug, Clone, Default, Error, Serialize, Deserialize)]
#[error("API error {status_code}: {title}: {detail} ({error_type})")]
pub struct ApiError {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(rename = "status", default)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorDetail>,
}

impl ApiError {
    /// Build an error from a response status and its raw body.
    ///
    /// The status code always comes from the HTTP status line, even when the
    /// body carries its own `status` field (or none at all).
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let mut error = match serde_json::from_str::<ApiError>(body) {
            Ok(decoded) => decoded,
            Err(e) => ApiError {
                title: UNDECODABLE_ERROR_TITLE.to_string(),
                detail: e.to_string(),
                ..Default::default()
            },
        };
        error.status_code = status.as_u16();
        error
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        if self.error_type != other.error_type
            || self.title != other.title
            || self.detail != other.detail
            || self.status_code != other.status_code
        {
            return false;
        }
        if self.errors.is_empty() || other.errors.is_empty() {
            return true;
        }
        self.errors == other.errors
    }
}

/// Failure class of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required request field was missing; nothing was sent
    StructValidation,
    /// The API answered with a non-success status
    Api,
    /// A lookup answered 404
    NotFound,
    /// The request never produced a response
    Transport,
    /// The request body could not be serialized
    Encode,
    /// The response body did not match the expected shape
    Decode,
    /// The request URL could not be built
    InvalidUrl,
    /// The signer rejected the request
    Signing,
}

/// Errors returned by API operations
#[derive(Debug, Error)]
pub enum Error {
    #[error("{operation}: struct validation: {source}")]
    Validation {
        operation: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{operation}: {source}")]
    Api {
        operation: &'static str,
        #[source]
        source: ApiError,
    },

    /// Rendered verbatim as `resource not found, <path>`
    #[error("resource not found, {path}")]
    NotFound { path: String },

    #[error("{operation}: request failed: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: failed to encode request body: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation}: invalid request URL: {source}")]
    InvalidUrl {
        operation: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{operation}: signing request: {source}")]
    Signing {
        operation: &'static str,
        #[source]
        source: SignError,
    },
}

impl Error {
    /// Failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::StructValidation,
            Error::Api { .. } => ErrorKind::Api,
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Encode { .. } => ErrorKind::Encode,
            Error::Decode { .. } => ErrorKind::Decode,
            Error::InvalidUrl { .. } => ErrorKind::InvalidUrl,
            Error::Signing { .. } => ErrorKind::Signing,
        }
    }

    /// True when the request was rejected locally before any I/O
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::StructValidation
    }

    /// The decoded API error, if the server answered with one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The validation failure, if the request was rejected locally
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Error::Validation { source, .. } => Some(source),
            _ => None,
        }
    }

    /// HTTP status associated with this error, when one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { source, .. } => Some(source.status_code),
            Error::NotFound { .. } => Some(StatusCode::NOT_FOUND.as_u16()),
            Error::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl PartialEq<ApiError> for Error {
    fn eq(&self, other: &ApiError) -> bool {
        self.api_error().is_some_and(|e| e == other)
    }
}
