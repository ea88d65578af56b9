//! HMAC-SHA256 request signing
//!
//! Signature algorithm:
//! 1. message = timestamp + method + path + body
//! 2. HMAC-SHA256(secret, message)
//! 3. Lowercase hex encode result
//!
//! `path` is the endpoint path without host, query string or the
//! `/public` / `/private` prefix (e.g. `/v1/account/margin`).

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key
pub const HEADER_API_KEY: &str = "API-KEY";

/// Header carrying the signing timestamp in milliseconds
pub const HEADER_API_TIMESTAMP: &str = "API-TIMESTAMP";

/// Header carrying the hex signature
pub const HEADER_API_SIGN: &str = "API-SIGN";

/// Current wall-clock time in milliseconds since the Unix epoch
pub fn timestamp_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Build the exact byte sequence fed into the HMAC
pub fn canonical_message(timestamp: &str, method: &str, path: &str, body: &[u8]) -> Vec<u8> {
    let mut message =
        Vec::with_capacity(timestamp.len() + method.len() + path.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(method.as_bytes());
    message.extend_from_slice(path.as_bytes());
    message.extend_from_slice(body);
    message
}

/// Compute the lowercase hex HMAC-SHA256 signature of a request
///
/// # Arguments
/// * `secret` - API secret bytes
/// * `timestamp` - Milliseconds since epoch, decimal
/// * `method` - HTTP method (e.g. "GET")
/// * `path` - Endpoint path (e.g. "/v1/account/margin")
/// * `body` - Raw request body, empty if none
pub fn sign(
    secret: &[u8],
    timestamp: &str,
    method: &str,
    path: &str,
    body: &[u8],
) -> AuthResult<String> {
    let mut mac =
        HmacSha256::new_from_slice(secret).map_err(|e| AuthError::Signing(e.to_string()))?;
    mac.update(&canonical_message(timestamp, method, path, body));
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Header values for an authenticated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureHeaders {
    /// Value for `API-KEY`
    pub api_key: String,
    /// Value for `API-TIMESTAMP`
    pub timestamp: String,
    /// Value for `API-SIGN`
    pub signature: String,
}

impl SignatureHeaders {
    /// Header name/value pairs in wire order
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            (HEADER_API_KEY, self.api_key.as_str()),
            (HEADER_API_TIMESTAMP, self.timestamp.as_str()),
            (HEADER_API_SIGN, self.signature.as_str()),
        ]
    }
}

/// Request signer for building authenticated requests
///
/// Captures a fresh timestamp on creation.
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    method: &'a str,
    path: &'a str,
    timestamp: String,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current time
    pub fn new(credentials: &'a Credentials, method: &'a str, path: &'a str) -> Self {
        Self::with_timestamp(credentials, method, path, timestamp_ms())
    }

    /// Create a request signer with an explicit timestamp
    pub fn with_timestamp(
        credentials: &'a Credentials,
        method: &'a str,
        path: &'a str,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            credentials,
            method,
            path,
            timestamp: timestamp_ms.to_string(),
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Sign the request with the given body bytes
    pub fn sign(&self, body: &[u8]) -> AuthResult<SignatureHeaders> {
        let signature = self
            .credentials
            .sign(&self.timestamp, self.method, self.path, body)?;

        Ok(SignatureHeaders {
            api_key: self.credentials.api_key().to_string(),
            timestamp: self.timestamp.clone(),
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "1700000000000";

    #[test]
    fn test_reference_vector() {
        // HMAC_SHA256("key", "The quick brown fox jumps over the lazy dog")
        let signature = sign(
            b"key",
            "The quick ",
            "brown fox ",
            "jumps over ",
            b"the lazy dog",
        )
        .unwrap();
        assert_eq!(
            signature,
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_signing_consistency() {
        let a = sign(b"secret", TS, "GET", "/v1/account/margin", b"").unwrap();
        let b = sign(b"secret", TS, "GET", "/v1/account/margin", b"").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_each_input_changes_signature() {
        let base = sign(b"secret", TS, "POST", "/v1/order", br#"{"size":"1"}"#).unwrap();

        let variants = [
            sign(b"secret2", TS, "POST", "/v1/order", br#"{"size":"1"}"#).unwrap(),
            sign(b"secret", "1700000000001", "POST", "/v1/order", br#"{"size":"1"}"#).unwrap(),
            sign(b"secret", TS, "GET", "/v1/order", br#"{"size":"1"}"#).unwrap(),
            sign(b"secret", TS, "POST", "/v1/orders", br#"{"size":"1"}"#).unwrap(),
            sign(b"secret", TS, "POST", "/v1/order", br#"{"size":"2"}"#).unwrap(),
        ];

        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_canonical_message_layout() {
        let message = canonical_message(TS, "GET", "/v1/account/margin", b"");
        assert_eq!(message, b"1700000000000GET/v1/account/margin".to_vec());
    }

    #[test]
    fn test_request_signer_headers() {
        let creds = Credentials::new("my-key", "secret").unwrap();
        let signer = RequestSigner::with_timestamp(&creds, "GET", "/v1/account/margin", 42);
        let headers = signer.sign(b"").unwrap();

        assert_eq!(headers.api_key, "my-key");
        assert_eq!(headers.timestamp, "42");
        assert_eq!(
            headers.signature,
            sign(b"secret", "42", "GET", "/v1/account/margin", b"").unwrap()
        );

        let names: Vec<&str> = headers.pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["API-KEY", "API-TIMESTAMP", "API-SIGN"]);
    }

    #[test]
    fn test_fresh_timestamp_is_numeric() {
        let creds = Credentials::new("key", "secret").unwrap();
        let signer = RequestSigner::new(&creds, "GET", "/v1/status");
        assert!(signer.timestamp().chars().all(|c| c.is_ascii_digit()));
        assert!(signer.timestamp().parse::<i64>().unwrap() > 1_600_000_000_000);
    }
}
