//! HTX ticker rate source with symbol and OTC fallback.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::settings::HtxConfig;
use crate::adapter::outbound::json::{price_at, price_from_value};
use crate::domain::TickerQuote;
use crate::error::{Error, Result};
use crate::port::{JsonTransport, SourceInfo, TickerRateSource};

/// Source name used in logs and errors.
pub const SOURCE_NAME: &str = "htx";

/// JSON pointer to the first OTC offer price.
const OTC_PRICE_POINTER: &str = "/data/list/0/price";

/// HTX client trying each spot symbol in order, then the OTC market.
pub struct HtxTicker {
    transport: Arc<dyn JsonTransport>,
    config: HtxConfig,
}

impl HtxTicker {
    #[must_use]
    pub fn new(transport: Arc<dyn JsonTransport>, config: HtxConfig) -> Self {
        Self { transport, config }
    }

    /// Query the merged ticker for one symbol.
    ///
    /// Succeeds only on an `ok` status with a usable `close` price.
    pub async fn ticker_for(&self, symbol: &str) -> Result<TickerQuote> {
        let query = [("symbol".to_string(), symbol.to_string())];
        let body = self
            .transport
            .get_json(&self.config.endpoint, &query)
            .await?;

        let status = body.get("status").and_then(Value::as_str).unwrap_or("");
        if status != "ok" {
            let reason = body
                .get("err-msg")
                .and_then(Value::as_str)
                .unwrap_or("no error message");
            return Err(Error::UnexpectedResponse(format!(
                "status `{status}`: {reason}"
            )));
        }

        let tick = body
            .get("tick")
            .ok_or_else(|| Error::UnexpectedResponse("response has no tick".to_string()))?;
        let price = tick
            .get("close")
            .and_then(price_from_value)
            .ok_or_else(|| Error::UnexpectedResponse("tick has no usable close".to_string()))?;

        Ok(TickerQuote::new(
            symbol.to_uppercase(),
            Some(price),
            tick.get("high").and_then(price_from_value),
            tick.get("low").and_then(price_from_value),
        ))
    }

    /// Query the OTC trade market and quote its first offer.
    ///
    /// Returns `Ok(None)` when the listing is empty.
    pub async fn otc_quote(&self) -> Result<Option<TickerQuote>> {
        let query: Vec<(String, String)> = self
            .config
            .otc_query
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let body = self
            .transport
            .get_json(&self.config.otc_endpoint, &query)
            .await?;

        Ok(price_at(&body, OTC_PRICE_POINTER)
            .map(|price| TickerQuote::price_only(self.config.otc_label.clone(), price)))
    }
}

#[async_trait]
impl TickerRateSource for HtxTicker {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: SOURCE_NAME,
            title: self.config.title.clone(),
            currency: self.config.currency.clone(),
        }
    }

    async fn fetch_ticker(&self) -> Result<Option<TickerQuote>> {
        for symbol in &self.config.symbols {
            match self.ticker_for(symbol).await {
                Ok(quote) => {
                    debug!(symbol = %symbol, price = ?quote.price, "HTX ticker quote");
                    return Ok(Some(quote));
                }
                Err(e) => warn!(symbol = %symbol, error = %e, "HTX ticker request failed"),
            }
        }

        info!("All HTX ticker symbols failed, falling back to OTC market");
        match self.otc_quote().await {
            Ok(Some(quote)) => Ok(Some(quote)),
            Ok(None) => {
                warn!("HTX OTC market returned no offers");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "HTX OTC request failed");
                Ok(None)
            }
        }
    }
}
