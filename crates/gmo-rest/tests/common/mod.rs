//! Common test utilities and fixtures for integration tests
//!
//! Contains sample JSON bodies in the shape GMO Coin returns them.

use gmo_rest::{ClientConfig, Credentials, GmoRestClient, MockTransport};
use std::sync::Arc;

pub const MOCK_HOST: &str = "https://mock.gmo.test";

/// Status response
pub const STATUS_RESPONSE: &str =
    r#"{"status":0,"responsetime":"2024-01-01T00:00:00.000Z","data":{"status":"OPEN"}}"#;

/// Margin response
pub const MARGIN_RESPONSE: &str = r#"{
    "status": 0,
    "data": {
        "actualProfitLoss": "68286188",
        "availableAmount": "57262506",
        "margin": "1021682",
        "marginCallStatus": "NORMAL",
        "marginRatio": "6683.6",
        "profitLoss": "0"
    },
    "responsetime": "2019-03-19T02:15:06.051Z"
}"#;

/// Assets response
pub const ASSETS_RESPONSE: &str = r#"{
    "status": 0,
    "data": [
        {"amount": "993982448", "available": "993982448", "conversionRate": "1", "symbol": "JPY"},
        {"amount": "4.0002", "available": "4.0002", "conversionRate": "859614", "symbol": "BTC"}
    ],
    "responsetime": "2019-03-19T02:15:06.055Z"
}"#;

/// Error envelope for maintenance
pub const MAINTENANCE_RESPONSE: &str = r#"{
    "status": 5,
    "messages": [{"message_code": "ERR-5201", "message_string": "MAINTENANCE. Please wait for a while"}],
    "responsetime": "2019-03-19T02:15:06.059Z"
}"#;

/// Client against a mock transport
pub fn mock_client(credentials: Option<Credentials>) -> (GmoRestClient, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::new());
    let mut config = ClientConfig::new().with_host(MOCK_HOST);
    if let Some(credentials) = credentials {
        config = config.with_credentials(credentials);
    }
    (GmoRestClient::with_transport(config, transport.clone()), transport)
}

pub fn test_credentials() -> Credentials {
    Credentials::new("integration-key", "integration-secret").unwrap()
}
