//! Fixed-result rate sources.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{PriceQuote, TickerQuote};
use crate::error::{Error, Result};
use crate::port::{P2pRateSource, SourceInfo, TickerRateSource};

/// P2P source returning the same result on every call.
pub struct StaticP2p {
    result: std::result::Result<PriceQuote, String>,
    calls: AtomicUsize,
}

impl StaticP2p {
    pub fn quote(quote: PriceQuote) -> Self {
        Self {
            result: Ok(quote),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl P2pRateSource for StaticP2p {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: "static-p2p",
            title: "Bybit P2P (USDT/RUB)".to_string(),
            currency: "RUB".to_string(),
        }
    }

    async fn fetch_p2p(&self) -> Result<PriceQuote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(Error::UnexpectedResponse)
    }
}

/// Ticker source returning the same result on every call.
pub struct StaticTicker {
    result: std::result::Result<Option<TickerQuote>, String>,
    calls: AtomicUsize,
}

impl StaticTicker {
    pub fn quote(quote: TickerQuote) -> Self {
        Self {
            result: Ok(Some(quote)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn no_data() -> Self {
        Self {
            result: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickerRateSource for StaticTicker {
    fn info(&self) -> SourceInfo {
        SourceInfo {
            name: "static-ticker",
            title: "HTX (USDT/CNY)".to_string(),
            currency: "CNY".to_string(),
        }
    }

    async fn fetch_ticker(&self) -> Result<Option<TickerQuote>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map_err(Error::UnexpectedResponse)
    }
}
