//! Main REST client implementation

use gmo_auth::Credentials;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, instrument};

use crate::endpoint::{Endpoint, PRIVATE_PREFIX, PUBLIC_PREFIX};
use crate::endpoints::private::{AssetBalance, MarginData, OrderRequest};
use crate::endpoints::public::{StatusData, Ticker, TickerParams};
use crate::endpoints::{ASSETS, MARGIN, ORDER, STATUS, TICKER};
use crate::error::{RestError, RestResult};
use crate::request;
use crate::response;
use crate::transport::{HttpRequest, ReqwestTransport, Transport};
use crate::types::Reply;

/// Production API host
pub const API_HOST: &str = "https://api.coin.z.com";

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// GMO Coin REST API client
///
/// Provides access to both public and private endpoints. The client is
/// immutable after construction and cheap to clone; clones share the
/// underlying transport.
///
/// # Example
///
/// ```no_run
/// use gmo_rest::{Credentials, GmoRestClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = GmoRestClient::new();
///     let status = client.status().await?;
///     println!("Exchange: {:?}", status.data().status);
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = GmoRestClient::with_credentials(creds);
///     let margin = auth_client.margin().await?;
///     println!("Available: {}", margin.data().available_amount);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct GmoRestClient {
    host: String,
    credentials: Option<Credentials>,
    transport: Arc<dyn Transport>,
}

impl GmoRestClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> Self {
        Self::with_transport(ClientConfig::default(), ReqwestTransport::new())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self::with_transport(
            ClientConfig::default().with_credentials(credentials),
            ReqwestTransport::new(),
        )
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns [`RestError::Config`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let transport = ReqwestTransport::with_options(
            Duration::from_secs(config.timeout_secs),
            config.user_agent.as_deref(),
        )
        .map_err(|e| RestError::Config(e.to_string()))?;

        Ok(Self::with_transport(config, transport))
    }

    /// Create a new client over a custom transport
    ///
    /// Timeout and user agent in `config` are left to the transport.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        info!(host = %config.host, authenticated = config.credentials.is_some(), "Created GMO Coin REST client");

        Self {
            host: config.host,
            credentials: config.credentials,
            transport: Arc::new(transport),
        }
    }

    /// Base host requests are sent to
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // ========================================================================
    // Generic request flows
    // ========================================================================

    /// Call a public endpoint
    ///
    /// No credentials are needed or sent.
    #[instrument(skip(self, endpoint, params, body), fields(path = endpoint.path()))]
    pub async fn request_public<P, B, R>(
        &self,
        endpoint: &Endpoint<P, B, R>,
        params: Option<&P>,
        body: Option<&B>,
    ) -> RestResult<Reply<R>>
    where
        P: Serialize,
        B: Serialize,
        R: DeserializeOwned,
    {
        let request = request::build(&self.host, PUBLIC_PREFIX, endpoint, params, body)?;
        self.send(request).await
    }

    /// Call a private endpoint
    ///
    /// # Errors
    /// Returns [`RestError::AuthRequired`] without touching the network if
    /// the client has no credentials.
    #[instrument(skip(self, endpoint, params, body), fields(path = endpoint.path()))]
    pub async fn request_private<P, B, R>(
        &self,
        endpoint: &Endpoint<P, B, R>,
        params: Option<&P>,
        body: Option<&B>,
    ) -> RestResult<Reply<R>>
    where
        P: Serialize,
        B: Serialize,
        R: DeserializeOwned,
    {
        let credentials = self.credentials.as_ref().ok_or(RestError::AuthRequired {
            path: endpoint.path(),
        })?;

        let mut request = request::build(&self.host, PRIVATE_PREFIX, endpoint, params, body)?;
        request::sign(&mut request, credentials, endpoint)?;
        debug!("Signed private request");

        self.send(request).await
    }

    async fn send<R: DeserializeOwned>(&self, request: HttpRequest) -> RestResult<Reply<R>> {
        let url = request.url.to_string();
        debug!(method = %request.method, %url, "Sending request");

        let raw = self
            .transport
            .send(request)
            .await
            .map_err(|source| RestError::Transport { url, source })?;

        debug!(status = raw.status, bytes = raw.body.len(), "Received response");
        response::decode(raw)
    }

    // ========================================================================
    // Public Endpoints
    // ========================================================================

    /// Get the exchange status
    pub async fn status(&self) -> RestResult<Reply<StatusData>> {
        self.request_public(&STATUS, None, None)
            .await
            .map_err(|e| e.in_operation("status"))
    }

    /// Get latest rates
    ///
    /// # Arguments
    /// * `symbol` - Symbol to query (e.g. "BTC"); all symbols when `None`
    pub async fn ticker(&self, symbol: Option<&str>) -> RestResult<Reply<Vec<Ticker>>> {
        let params = TickerParams {
            symbol: symbol.map(str::to_string),
        };
        self.request_public(&TICKER, Some(&params), None)
            .await
            .map_err(|e| e.in_operation("ticker"))
    }

    // ========================================================================
    // Private Endpoints
    // ========================================================================

    /// Get account margin
    pub async fn margin(&self) -> RestResult<Reply<MarginData>> {
        self.request_private(&MARGIN, None, None)
            .await
            .map_err(|e| e.in_operation("margin"))
    }

    /// Get asset balances
    pub async fn assets(&self) -> RestResult<Reply<Vec<AssetBalance>>> {
        self.request_private(&ASSETS, None, None)
            .await
            .map_err(|e| e.in_operation("assets"))
    }

    /// Place an order
    ///
    /// Returns the order ID assigned by the exchange.
    pub async fn order(&self, order: &OrderRequest) -> RestResult<Reply<String>> {
        self.request_private(&ORDER, None, Some(order))
            .await
            .map_err(|e| e.in_operation("order"))
    }
}

impl Default for GmoRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GmoRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GmoRestClient")
            .field("host", &self.host)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base host
    pub host: String,
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: API_HOST.to_string(),
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set host
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
