//! Bybit P2P rate source.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::settings::BybitP2pConfig;
use crate::adapter::outbound::json::price_at;
use crate::domain::{Price, PriceQuote};
use crate::error::{Error, Result};
use crate::port::{JsonTransport, P2pRateSource, SourceInfo};

/// Source name used in logs and errors.
pub const SOURCE_NAME: &str = "bybit-p2p";

/// JSON pointer to the best advertised price.
const PRICE_POINTER: &str = "/result/items/0/price";

/// Order-book side as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Advertisements the user can buy from.
    Buy,
    /// Advertisements the user can sell to.
    Sell,
}

impl Side {
    /// Wire code expected by the `side` field.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Buy => "1",
            Self::Sell => "0",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListingRequest<'a> {
    user_id: &'a str,
    token_id: &'a str,
    currency_id: &'a str,
    payment: Vec<String>,
    side: &'static str,
    size: String,
    page: &'static str,
    amount: &'a str,
}

/// Bybit P2P client quoting the first-listed price on each side.
pub struct BybitP2p {
    transport: Arc<dyn JsonTransport>,
    config: BybitP2pConfig,
}

impl BybitP2p {
    #[must_use]
    pub fn new(transport: Arc<dyn JsonTransport>, config: BybitP2pConfig) -> Self {
        Self { transport, config }
    }

    /// Fetch the best price for one side, logging and swallowing failures.
    pub async fn best_price(&self, side: Side) -> Option<Price> {
        match self.request_side(side).await {
            Ok(price) => {
                debug!(%side, %price, "Bybit P2P price");
                Some(price)
            }
            Err(e) => {
                warn!(%side, error = %e, "Bybit P2P request failed");
                None
            }
        }
    }

    async fn request_side(&self, side: Side) -> Result<Price> {
        let payload = self.payload(side)?;
        let body = self
            .transport
            .post_json(&self.config.endpoint, &payload)
            .await?;
        price_at(&body, PRICE_POINTER)
            .ok_or_else(|| Error::UnexpectedResponse(describe_missing_price(&body)))
    }

    fn payload(&self, side: Side) -> Result<Value> {
        let request = ListingRequest {
            user_id: "",
            token_id: &self.config.token,
            currency_id: &self.config.currency,
            payment: Vec::new(),
            side: side.code(),
            size: self.config.rows.to_string(),
            page: "1",
            amount: "",
        };
        Ok(serde_json::to_value(request)?)
    }
}

fn describe_missing_price(body: &Value) -> String {
    match body.pointer("/result/items").and_then(Value::as_array) {
        Some(items) if items.is_empty() => "no advertisements listed".to_string(),
        Some(_) => "first advertisement has no usable price".to_string(),
        None => "response has no result.items".to_string(),
    }
}

#[async_trait]
impl P2pRateSource for BybitP2p {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: SOURCE_NAME,
            title: format!("Bybit P2P ({}/{})", self.config.token, self.config.currency),
            currency: self.config.currency.clone(),
        }
    }

    async fn fetch_p2p(&self) -> Result<PriceQuote> {
        let (buy, sell) = tokio::join!(self.best_price(Side::Buy), self.best_price(Side::Sell));
        Ok(PriceQuote::new(buy, sell))
    }
}
