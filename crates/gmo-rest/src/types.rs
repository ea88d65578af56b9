//! Envelope types shared by every GMO Coin REST response

use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::transport::RawResponse;

// ============================================================================
// API Response Wrapper
// ============================================================================

/// Standard GMO Coin response envelope
///
/// `status` is `0` on success. `data` holds the operation-specific payload.
/// Some operations (order cancel, order change) reply without `data`; a
/// missing payload decodes as JSON `null`, so `()` and `Option<_>` fit it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    /// Exchange status code (0 = success)
    pub status: i32,
    /// Server time of the response
    pub responsetime: DateTime<Utc>,
    /// Operation-specific payload
    pub data: T,
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for ApiResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Envelope {
            status: i32,
            responsetime: DateTime<Utc>,
            #[serde(default)]
            data: Option<Value>,
        }

        let envelope = Envelope::deserialize(deserializer)?;
        let data =
            T::deserialize(envelope.data.unwrap_or(Value::Null)).map_err(D::Error::custom)?;
        Ok(Self {
            status: envelope.status,
            responsetime: envelope.responsetime,
            data,
        })
    }
}

impl<T> ApiResponse<T> {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Take the payload
    pub fn into_data(self) -> T {
        self.data
    }
}

/// One message of an error envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiMessage {
    /// Machine-readable code (e.g. "ERR-5201")
    pub message_code: String,
    /// Human-readable description
    pub message_string: String,
}

/// Envelope returned when the exchange rejects a request
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub status: i32,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
}

/// Join messages into one line for error display
pub(crate) fn format_messages(messages: &[ApiMessage]) -> String {
    if messages.is_empty() {
        return "no message".to_string();
    }
    messages
        .iter()
        .map(|m| format!("{}: {}", m.message_code, m.message_string))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Call Result
// ============================================================================

/// Typed result of a call together with the raw HTTP response
#[derive(Debug, Clone)]
pub struct Reply<T> {
    /// Decoded envelope
    pub response: ApiResponse<T>,
    /// Response as received
    pub raw: RawResponse,
}

impl<T> Reply<T> {
    /// Take the payload, dropping envelope and raw response
    pub fn into_data(self) -> T {
        self.response.data
    }

    /// Borrow the payload
    pub fn data(&self) -> &T {
        &self.response.data
    }
}
