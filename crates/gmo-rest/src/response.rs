//! Response decoding

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{RestError, RestResult};
use crate::transport::RawResponse;
use crate::types::{ApiResponse, ErrorEnvelope, Reply};

/// Decode a raw response into the typed envelope
///
/// The body is decoded regardless of the HTTP status. A body that does not
/// fit `ApiResponse<T>` but is a well-formed error envelope with a non-zero
/// status becomes [`RestError::Api`]; anything else becomes
/// [`RestError::Decode`] carrying the raw response.
pub fn decode<T: DeserializeOwned>(raw: RawResponse) -> RestResult<Reply<T>> {
    match serde_json::from_slice::<ApiResponse<T>>(&raw.body) {
        Ok(response) if response.is_success() => Ok(Reply { response, raw }),
        Ok(response) => {
            // Non-zero status with a payload still counts as a rejection
            let status = response.status;
            let messages = serde_json::from_slice::<ErrorEnvelope>(&raw.body)
                .map(|envelope| envelope.messages)
                .unwrap_or_default();
            Err(RestError::Api {
                status,
                messages,
                response: raw,
            })
        }
        Err(source) => match serde_json::from_slice::<ErrorEnvelope>(&raw.body) {
            Ok(envelope) if envelope.status != 0 => {
                debug!(status = envelope.status, "API returned error envelope");
                Err(RestError::Api {
                    status: envelope.status,
                    messages: envelope.messages,
                    response: raw,
                })
            }
            _ => {
                debug!(http_status = raw.status, error = %source, "Failed to decode response");
                Err(RestError::Decode {
                    source,
                    response: raw,
                })
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        status: String,
    }

    #[test]
    fn test_decode_success() {
        let raw = RawResponse::new(
            200,
            r#"{"status":0,"responsetime":"2024-01-01T00:00:00.000Z","data":{"status":"OPEN"}}"#,
        );
        let reply = decode::<Payload>(raw).unwrap();
        assert_eq!(reply.response.status, 0);
        assert_eq!(reply.raw.status, 200);
        assert_eq!(reply.into_data().status, "OPEN");
    }

    #[test]
    fn test_decode_malformed_keeps_raw_body() {
        let raw = RawResponse::new(200, "<html>bad gateway</html>");
        let err = decode::<Payload>(raw).unwrap_err();

        match err {
            RestError::Decode { response, .. } => {
                assert_eq!(response.body, b"<html>bad gateway</html>".to_vec());
            }
            other => panic!("Expected Decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let raw = RawResponse::new(
            200,
            r#"{"status":0,"responsetime":"2024-01-01T00:00:00.000Z","data":[1,2]}"#,
        );
        assert!(matches!(
            decode::<Payload>(raw),
            Err(RestError::Decode { .. })
        ));
    }

    #[test]
    fn test_decode_error_envelope() {
        let raw = RawResponse::new(
            200,
            r#"{"status":1,"messages":[{"message_code":"ERR-5003","message_string":"Requests are too many."}],"responsetime":"2024-01-01T00:00:00.000Z"}"#,
        );
        match decode::<Payload>(raw).unwrap_err() {
            RestError::Api {
                status, messages, ..
            } => {
                assert_eq!(status, 1);
                assert_eq!(messages[0].message_code, "ERR-5003");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_non_zero_status_with_data() {
        let raw = RawResponse::new(
            200,
            r#"{"status":4,"responsetime":"2024-01-01T00:00:00.000Z","data":{"status":"OPEN"}}"#,
        );
        assert!(matches!(
            decode::<Payload>(raw),
            Err(RestError::Api { status: 4, .. })
        ));
    }
}
