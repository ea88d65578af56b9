//! REST API client for the GMO Coin cryptocurrency exchange
//!
//! This crate provides a typed client over GMO Coin's public and private
//! REST endpoints.
//!
//! # Features
//!
//! - **Public**: Exchange status, ticker
//! - **Account**: Margin, asset balances
//! - **Trading**: Place orders
//! - **Extensible**: Declare your own [`Endpoint`] and call it through
//!   [`GmoRestClient::request_public`] / [`GmoRestClient::request_private`]
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Each private request is signed
//! with HMAC-SHA256 over `timestamp + method + path + body`.
//!
//! # Example
//!
//! ```no_run
//! use gmo_rest::{Credentials, GmoRestClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = GmoRestClient::new();
//!     let status = client.status().await?;
//!     println!("Status: {:?}", status.data());
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = GmoRestClient::with_credentials(creds);
//!     let margin = auth_client.margin().await?;
//!     println!("Margin: {:?}", margin.data());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every client method returns [`RestError`]. Decode and API errors keep the
//! raw HTTP response, reachable through [`RestError::response`], so status
//! and body can be inspected even when typed decoding fails. The client
//! performs no retries.

pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-export main types
pub use client::{ClientConfig, GmoRestClient, API_HOST};
pub use endpoint::{Endpoint, HttpMethod, NoBody, NoParams};
pub use error::{RestError, RestResult};
pub use gmo_auth::Credentials;
pub use transport::{HttpRequest, RawResponse, ReqwestTransport, Transport, TransportError};
#[cfg(any(test, feature = "test-utils"))]
pub use transport::MockTransport;
pub use types::{ApiMessage, ApiResponse, Reply};

// Re-export endpoint-specific types
pub use endpoints::private::{
    AssetBalance, ExecutionType, MarginCallStatus, MarginData, OrderRequest, Side, TimeInForce,
};
pub use endpoints::public::{ExchangeStatus, StatusData, Ticker, TickerParams};
