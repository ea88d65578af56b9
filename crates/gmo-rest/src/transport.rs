//! HTTP transport abstraction
//!
//! The client never talks to `reqwest` directly. It hands a fully built
//! [`HttpRequest`] to a [`Transport`] and gets back the [`RawResponse`].
//! This keeps the request pipeline testable without network access.
//!
//! # Example
//!
//! ```no_run
//! use gmo_rest::transport::{HttpRequest, ReqwestTransport, Transport};
//! use gmo_rest::endpoint::HttpMethod;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new();
//! let url = "https://api.coin.z.com/public/v1/status".parse()?;
//! let response = transport.send(HttpRequest::new(HttpMethod::Get, url)).await?;
//! println!("HTTP {}: {}", response.status, response.body_text());
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::endpoint::HttpMethod;

/// Boxed error cause from the underlying HTTP stack
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outgoing request, fully built and (for private calls) signed
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: HttpMethod,
    /// Full URL including query string
    pub url: Url,
    /// Request headers
    pub headers: HeaderMap,
    /// Buffered JSON body, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request without headers or body
    pub fn new(method: HttpMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Body bytes, empty if the request has no body
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Response as received from the wire
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a response with no headers
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as text, with invalid UTF-8 replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Check for a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport layer errors
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection could not be established (DNS, TCP, TLS)
    #[error("connection failed: {0}")]
    Connect(#[source] BoxError),

    /// Request timed out
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// Response head arrived but reading the body failed
    #[error("failed to read response body (HTTP {}): {source}", .partial.status)]
    Body {
        /// Status and headers received before the failure
        partial: RawResponse,
        #[source]
        source: BoxError,
    },

    /// Any other transport failure
    #[error("request failed: {0}")]
    Other(#[source] BoxError),
}

impl TransportError {
    /// Response received before the failure, if any
    pub fn partial_response(&self) -> Option<&RawResponse> {
        match self {
            TransportError::Body { partial, .. } => Some(partial),
            _ => None,
        }
    }

    fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(Box::new(err))
        } else if err.is_connect() {
            TransportError::Connect(Box::new(err))
        } else {
            TransportError::Other(Box::new(err))
        }
    }
}

/// Trait for HTTP transport abstraction
///
/// Implementations must be safe for concurrent use: the client shares one
/// transport across all calls.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute the request and read the full response body
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        (**self).send(request).await
    }
}

/// Real transport backed by a pooled `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport with a request timeout and optional user agent
    pub fn with_options(timeout: Duration, user_agent: Option<&str>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(timeout);
        if let Some(user_agent) = user_agent {
            builder = builder.user_agent(user_agent);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wrap an existing reqwest client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(TransportError::from_reqwest)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        debug!(status, "Received response head");

        match response.bytes().await {
            Ok(body) => Ok(RawResponse {
                status,
                headers,
                body: body.to_vec(),
            }),
            Err(e) => Err(TransportError::Body {
                partial: RawResponse {
                    status,
                    headers,
                    body: Vec::new(),
                },
                source: Box::new(e),
            }),
        }
    }
}

/// Mock transport for testing
///
/// Returns queued responses in order and records every request it sees.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MockTransport {
    responses: parking_lot::Mutex<std::collections::VecDeque<Result<RawResponse, TransportError>>>,
    requests: parking_lot::Mutex<Vec<HttpRequest>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockTransport {
    /// Create a new mock transport with no queued responses
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a 200 response with the given JSON body
    pub fn push_json(&self, body: impl Into<String>) {
        self.push_response(RawResponse::new(200, body.into()));
    }

    /// Queue a response
    pub fn push_response(&self, response: RawResponse) {
        self.responses.lock().push_back(Ok(response));
    }

    /// Queue a transport failure
    pub fn push_error(&self, error: TransportError) {
        self.responses.lock().push_back(Err(error));
    }

    /// Number of requests sent so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Requests sent so far
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().push(request);
        self.responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connect("mock has no queued response".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> HttpRequest {
        HttpRequest::new(
            HttpMethod::Get,
            Url::parse("https://mock.test/public/v1/status").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport = MockTransport::new();
        transport.push_json(r#"{"status":0}"#);

        let response = transport.send(request()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body_text(), r#"{"status":0}"#);
        assert_eq!(transport.call_count(), 1);
        assert_eq!(transport.requests()[0].url.path(), "/public/v1/status");
    }

    #[tokio::test]
    async fn test_mock_transport_exhausted() {
        let transport = MockTransport::new();
        let result = transport.send(request()).await;
        assert!(matches!(result, Err(TransportError::Connect(_))));
    }

    #[test]
    fn test_partial_response_only_for_body_errors() {
        let connect = TransportError::Connect("refused".into());
        assert!(connect.partial_response().is_none());

        let body = TransportError::Body {
            partial: RawResponse::new(502, Vec::new()),
            source: "reset".into(),
        };
        assert_eq!(body.partial_response().unwrap().status, 502);
        assert!(body.to_string().contains("502"));
    }

    #[test]
    fn test_body_bytes_default_empty() {
        assert!(request().body_bytes().is_empty());
    }
}
