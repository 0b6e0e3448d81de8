//! Shared request plumbing for the GearTracker endpoints.
//!
//! Maps transport outcomes onto [`ClientError`]: network failures become
//! [`ClientError::Http`], non-2xx responses become [`ClientError::Api`]
//! with the server's own error text when the body carries one. There is
//! deliberately no retry or backoff here; a failed fetch surfaces
//! immediately and retrying is a user action.

use reqwest::{RequestBuilder, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Error body shape the server uses for non-2xx responses,
/// e.g. `{"error": "...", "code": "DB_CONNECTION_FAILED"}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Send a request and return the response if its status is 2xx.
///
/// On a non-2xx status the body is consumed to extract the server's error
/// message; unparseable bodies fall back to the raw text.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "could not read error response body".to_string());
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed
            .error
            .or(parsed.message)
            .unwrap_or_else(|| body.clone()),
        Err(_) => body,
    };
    debug!(status = status.as_u16(), url = %url, "request failed");

    Err(ClientError::Api {
        status: status.as_u16(),
        url,
        message,
    })
}
