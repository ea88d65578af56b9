//! Credentials and request signing for the GMO Coin API
//!
//! Private endpoints authenticate every request with three headers:
//! `API-KEY`, `API-TIMESTAMP` and `API-SIGN`. The signature is the
//! lowercase hex HMAC-SHA256 of `timestamp + method + path + body`, keyed
//! by the API secret.
//!
//! # Example
//!
//! ```no_run
//! use gmo_auth::{Credentials, RequestSigner};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::from_env()?;
//!
//!     let signer = RequestSigner::new(&creds, "GET", "/v1/account/margin");
//!     let headers = signer.sign(b"")?;
//!     println!("API-TIMESTAMP: {}", headers.timestamp);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use signer::{
    canonical_message, sign, timestamp_ms, RequestSigner, SignatureHeaders, HEADER_API_KEY,
    HEADER_API_SIGN, HEADER_API_TIMESTAMP,
};
