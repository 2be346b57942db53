//! Endpoint and per-call options
//!
//! An [`Endpoint`] is the method plus the relative path and query of one API
//! call. Rendering is deterministic: path segments keep their insertion
//! order and are percent-encoded, query parameters keep their insertion order.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use std::fmt::Display;
use url::form_urlencoded;

/// Method, path and query of a single API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    not_found_as_path: bool,
}

impl Endpoint {
    /// Start an endpoint from a static path prefix such as `/papi/v1/properties`
    pub fn new(method: Method, prefix: &str) -> Self {
        Self {
            method,
            path: prefix.trim_end_matches('/').to_string(),
            query: Vec::new(),
            not_found_as_path: false,
        }
    }

    pub fn get(prefix: &str) -> Self {
        Self::new(Method::GET, prefix)
    }

    pub fn post(prefix: &str) -> Self {
        Self::new(Method::POST, prefix)
    }

    pub fn put(prefix: &str) -> Self {
        Self::new(Method::PUT, prefix)
    }

    pub fn delete(prefix: &str) -> Self {
        Self::new(Method::DELETE, prefix)
    }

    /// Append one path segment, percent-encoded
    pub fn segment(mut self, segment: impl Display) -> Self {
        self.path.push('/');
        self.path
            .push_str(&urlencoding::encode(&segment.to_string()));
        self
    }

    /// Append a query parameter; empty values render as `name=`
    pub fn query(mut self, name: &str, value: impl Display) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when a value is present
    pub fn query_opt<T: Display>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Report a 404 as `resource not found, <path>` instead of a decoded API error
    pub fn not_found_as_path(mut self) -> Self {
        self.not_found_as_path = true;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn reports_not_found_as_path(&self) -> bool {
        self.not_found_as_path
    }

    /// Relative path plus query string, e.g. `/storage/v1/storage-groups/1`
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.query {
            serializer.append_pair(name, value);
        }
        format!("{}?{}", self.path, serializer.finish())
    }
}

/// Headers scoped to a single call.
///
/// Applied after the session's default headers (replacing any with the same
/// name) and before signing.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    headers: HeaderMap,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_headers(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Set a header for this call
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}
