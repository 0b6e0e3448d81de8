//! Error types for the GearTracker client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during GearTracker API operations.
///
/// The error taxonomy mirrors how the UI presents failures:
/// - *Transport failures* ([`ClientError::Http`], [`ClientError::Api`]) are
///   network-level or HTTP-status-level problems and render as a generic
///   inline error.
/// - *Reported failures* ([`ClientError::Reported`]) are well-formed 2xx
///   responses in which the server says the operation did not succeed
///   (`success: false`, a non-`"success"` status field, or an `error`
///   field); they render with the server-supplied message.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error (connection refused, DNS, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the server.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Well-formed response indicating the operation failed.
    #[error("{message}")]
    Reported { message: String },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// True for application-level failures the server reported in-band.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Reported { .. })
    }

    /// True for network-level or HTTP-status-level failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Api { .. })
    }

    /// Message suitable for an inline table error row. Reported failures
    /// carry the server's own text; transport failures get a generic line
    /// (the underlying detail still goes to the log).
    pub fn inline_message(&self) -> String {
        match self {
            Self::Reported { message } => message.clone(),
            Self::Http(_) | Self::Api { .. } => "Failed to load data, please retry".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_vs_transport() {
        let err = ClientError::Reported {
            message: "no such item".to_string(),
        };
        assert!(err.is_reported());
        assert!(!err.is_transport());

        let err = ClientError::Api {
            status: 500,
            url: "http://localhost/api/inventory".to_string(),
            message: "boom".to_string(),
        };
        assert!(err.is_transport());
        assert!(!err.is_reported());
    }

    #[test]
    fn test_inline_message_uses_server_text_for_reported() {
        let err = ClientError::Reported {
            message: "item is locked".to_string(),
        };
        assert_eq!(err.inline_message(), "item is locked");

        let err = ClientError::Api {
            status: 502,
            url: "http://localhost/api/inventory".to_string(),
            message: "bad gateway".to_string(),
        };
        assert_eq!(err.inline_message(), "Failed to load data, please retry");
    }
}
