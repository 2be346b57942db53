//! HTTP transport
//!
//! Thin wrapper around `reqwest::Client` that performs exactly one round trip
//! per call and hands back the status and raw body. Status classification and
//! decoding happen in the session.

use reqwest::{Client, Request, StatusCode};
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
pub(crate) fn sanitize_for_log(body: &str) -> String {
    let truncated = if body.len() > MAX_LOG_BODY_LENGTH {
        let mut end = MAX_LOG_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... [truncated, {} bytes total]", &body[..end], body.len())
    } else {
        body.to_string()
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// Status and body of a completed exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// HTTP client wrapper shared by every family client
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a new transport
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Send a prepared request and read the whole body
    pub async fn execute(&self, request: Request) -> reqwest::Result<RawResponse> {
        let span = tracing::info_span!("api_request", request_id = %Uuid::new_v4());

        async move {
            tracing::debug!("{} {}", request.method(), request.url());

            let response = self.client.execute(request).await?;
            let status = response.status();
            let body = response.text().await?;

            if !status.is_success() {
                // Security: Only log sanitized/truncated error body to avoid leaking sensitive data
                tracing::error!("API error: {} - {}", status, sanitize_for_log(&body));
            } else {
                tracing::debug!("API response: {} ({} bytes)", status, body.len());
            }

            Ok(RawResponse { status, body })
        }
        .instrument(span)
        .await
    }
}
