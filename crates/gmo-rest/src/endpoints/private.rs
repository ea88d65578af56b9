//! Private endpoints
//!
//! These endpoints require authentication.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::endpoint::{Endpoint, HttpMethod, NoBody, NoParams};

/// Account margin
pub const MARGIN: Endpoint<NoParams, NoBody, MarginData> =
    Endpoint::new(HttpMethod::Get, "/v1/account/margin");

/// Asset balances
pub const ASSETS: Endpoint<NoParams, NoBody, Vec<AssetBalance>> =
    Endpoint::new(HttpMethod::Get, "/v1/account/assets");

/// Place a new order; returns the order ID
pub const ORDER: Endpoint<NoParams, OrderRequest, String> =
    Endpoint::new(HttpMethod::Post, "/v1/order");

/// Account margin payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginData {
    /// Valuation including unrealized profit/loss
    #[serde(with = "rust_decimal::serde::str")]
    pub actual_profit_loss: Decimal,
    /// Amount available for new orders
    #[serde(with = "rust_decimal::serde::str")]
    pub available_amount: Decimal,
    /// Margin in use
    #[serde(with = "rust_decimal::serde::str")]
    pub margin: Decimal,
    /// Margin call state
    pub margin_call_status: MarginCallStatus,
    /// Margin ratio (percent)
    #[serde(with = "rust_decimal::serde::str")]
    pub margin_ratio: Decimal,
    /// Unrealized profit/loss
    #[serde(with = "rust_decimal::serde::str")]
    pub profit_loss: Decimal,
}

/// Margin call state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginCallStatus {
    Normal,
    MarginCall,
    Losscut,
}

/// Balance of one asset
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    /// Total amount
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Amount not locked by orders
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    /// JPY conversion rate
    #[serde(with = "rust_decimal::serde::str")]
    pub conversion_rate: Decimal,
    /// Asset symbol
    pub symbol: String,
}

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

/// Order execution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExecutionType {
    Market,
    Limit,
    Stop,
}

/// Time in force
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    /// Fill and kill
    Fak,
    /// Fill and store
    Fas,
    /// Fill or kill
    Fok,
    /// Post only
    Sok,
}

/// Body for [`ORDER`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Symbol (e.g. "BTC", "BTC_JPY")
    pub symbol: String,
    /// Buy or sell
    pub side: Side,
    /// Market, limit or stop
    pub execution_type: ExecutionType,
    /// Time in force; exchange default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    /// Limit or stop price
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub price: Option<Decimal>,
    /// Loss-cut price for leveraged orders
    #[serde(
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub losscut_price: Option<Decimal>,
    /// Order size
    #[serde(with = "rust_decimal::serde::str")]
    pub size: Decimal,
    /// Cancel resting orders before placing this one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_before: Option<bool>,
}

impl OrderRequest {
    /// Market order
    pub fn market(symbol: impl Into<String>, side: Side, size: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            execution_type: ExecutionType::Market,
            time_in_force: None,
            price: None,
            losscut_price: None,
            size,
            cancel_before: None,
        }
    }

    /// Limit order
    pub fn limit(symbol: impl Into<String>, side: Side, price: Decimal, size: Decimal) -> Self {
        Self {
            price: Some(price),
            execution_type: ExecutionType::Limit,
            ..Self::market(symbol, side, size)
        }
    }

    /// Set time in force
    pub fn with_time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    /// Set loss-cut price
    pub fn with_losscut_price(mut self, price: Decimal) -> Self {
        self.losscut_price = Some(price);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ApiResponse;
    use rust_decimal_macros::dec;

    #[test]
    fn test_margin_fixture() {
        let json = r#"{
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
        let response: ApiResponse<MarginData> = serde_json::from_str(json).unwrap();

        assert_eq!(response.data.actual_profit_loss, dec!(68286188));
        assert_eq!(response.data.margin_ratio, dec!(6683.6));
        assert_eq!(response.data.margin_call_status, MarginCallStatus::Normal);
    }

    #[test]
    fn test_margin_call_status_names() {
        let status: MarginCallStatus = serde_json::from_str(r#""MARGIN_CALL""#).unwrap();
        assert_eq!(status, MarginCallStatus::MarginCall);
    }

    #[test]
    fn test_assets_parsing() {
        let json = r#"[{"amount":"993982448","available":"993982448","conversionRate":"1","symbol":"JPY"}]"#;
        let assets: Vec<AssetBalance> = serde_json::from_str(json).unwrap();
        assert_eq!(assets[0].symbol, "JPY");
        assert_eq!(assets[0].conversion_rate, dec!(1));
    }

    #[test]
    fn test_limit_order_body() {
        let order = OrderRequest::limit("BTC", Side::Buy, dec!(4800000), dec!(0.01))
            .with_time_in_force(TimeInForce::Fas);
        let json = serde_json::to_string(&order).unwrap();

        assert_eq!(
            json,
            r#"{"symbol":"BTC","side":"BUY","executionType":"LIMIT","timeInForce":"FAS","price":"4800000","size":"0.01"}"#
        );
    }

    #[test]
    fn test_market_order_omits_price() {
        let order = OrderRequest::market("BTC_JPY", Side::Sell, dec!(1));
        let json = serde_json::to_value(&order).unwrap();
        assert!(json.get("price").is_none());
        assert_eq!(json["executionType"], "MARKET");
    }
}
