//! Public endpoints
//!
//! These endpoints don't require authentication.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, HttpMethod, NoBody, NoParams};

/// Exchange status
pub const STATUS: Endpoint<NoParams, NoBody, StatusData> =
    Endpoint::new(HttpMethod::Get, "/v1/status");

/// Latest rates, for one symbol or all of them
pub const TICKER: Endpoint<TickerParams, NoBody, Vec<Ticker>> =
    Endpoint::new(HttpMethod::Get, "/v1/ticker");

/// Exchange status payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusData {
    /// Exchange status
    pub status: ExchangeStatus,
}

/// Exchange operating state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ExchangeStatus {
    #[serde(rename = "OPEN")]
    Open,
    #[serde(rename = "PREOPEN")]
    PreOpen,
    #[serde(rename = "MAINTENANCE")]
    Maintenance,
    /// State not known to this client
    #[serde(other, rename = "UNKNOWN")]
    Unknown,
}

/// Query parameters for [`TICKER`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickerParams {
    /// Symbol (e.g. "BTC", "BTC_JPY"); all symbols when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

impl TickerParams {
    /// Ticker for a single symbol
    pub fn symbol(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
        }
    }
}

/// Latest rate of one symbol
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Ticker {
    /// Best ask
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    /// Best bid
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    /// Highest price of the day
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    /// Last traded price
    #[serde(with = "rust_decimal::serde::str")]
    pub last: Decimal,
    /// Lowest price of the day
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    /// Symbol
    pub symbol: String,
    /// Time of the rate
    pub timestamp: DateTime<Utc>,
    /// Traded volume of the day
    #[serde(with = "rust_decimal::serde::str")]
    pub volume: Decimal,
}

impl Ticker {
    /// Mid price (average of bid and ask)
    pub fn mid_price(&self) -> Decimal {
        (self.ask + self.bid) / Decimal::TWO
    }
}
