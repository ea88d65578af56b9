//! Error types for REST API operations

use crate::transport::{RawResponse, TransportError};
use crate::types::{format_messages, ApiMessage};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Missing API credentials for private endpoint
    #[error("Authentication required for private endpoint {path}")]
    AuthRequired {
        /// Endpoint path that was requested
        path: &'static str,
    },

    /// URL, query string, body or header could not be built
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Request signature could not be computed
    #[error("Failed to sign request: {0}")]
    Signing(#[from] gmo_auth::AuthError),

    /// Network call failed
    #[error("Failed to request {url}: {source}")]
    Transport {
        /// URL that was requested
        url: String,
        #[source]
        source: TransportError,
    },

    /// Response body did not match the expected shape
    #[error("Failed to decode response (HTTP {}): {source}", .response.status)]
    Decode {
        #[source]
        source: serde_json::Error,
        /// Response as received, including the raw body
        response: RawResponse,
    },

    /// Exchange returned a non-zero status
    #[error("API error (status {status}): {}", format_messages(.messages))]
    Api {
        /// Exchange status code
        status: i32,
        /// Error messages from the exchange
        messages: Vec<ApiMessage>,
        /// Response as received
        response: RawResponse,
    },

    /// HTTP client could not be configured
    #[error("Invalid client configuration: {0}")]
    Config(String),

    /// Failure inside a named client operation
    #[error("Failed to call {operation} API: {source}")]
    Call {
        /// Operation name (e.g. "status")
        operation: &'static str,
        #[source]
        source: Box<RestError>,
    },
}

impl RestError {
    /// Wrap this error with the name of the operation that produced it
    pub fn in_operation(self, operation: &'static str) -> Self {
        RestError::Call {
            operation,
            source: Box::new(self),
        }
    }

    /// Innermost error, skipping operation context
    pub fn root(&self) -> &RestError {
        match self {
            RestError::Call { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP response received before the failure, if any
    ///
    /// Present for decode and API errors, and for transport errors that
    /// happened after the response head arrived.
    pub fn response(&self) -> Option<&RawResponse> {
        match self.root() {
            RestError::Decode { response, .. } | RestError::Api { response, .. } => {
                Some(response)
            }
            RestError::Transport { source, .. } => source.partial_response(),
            _ => None,
        }
    }

    /// Check if the caller may reasonably retry
    ///
    /// The client itself never retries.
    pub fn is_retryable(&self) -> bool {
        matches!(self.root(), RestError::Transport { .. })
    }

    /// Check if this error is a missing-credentials precondition failure
    pub fn is_auth_required(&self) -> bool {
        matches!(self.root(), RestError::AuthRequired { .. })
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
