//! Rate source ports.

use async_trait::async_trait;

use crate::domain::{PriceQuote, TickerQuote};
use crate::error::Result;

/// Display metadata for a rate source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    /// Short machine name used in logs and errors.
    pub name: &'static str,
    /// Section title shown to users.
    pub title: String,
    /// Quote currency code, e.g. `RUB`.
    pub currency: String,
}

/// Peer-to-peer marketplace quoting best buy and sell prices.
#[async_trait]
pub trait P2pRateSource: Send + Sync {
    /// Describe this source for rendering.
    fn info(&self) -> SourceInfo;

    /// Fetch the best price on each side of the book.
    ///
    /// Per-side failures resolve to `None` inside the quote.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source cannot run at all.
    async fn fetch_p2p(&self) -> Result<PriceQuote>;
}

/// Exchange ticker quoting last price and 24h range.
#[async_trait]
pub trait TickerRateSource: Send + Sync {
    /// Describe this source for rendering.
    fn info(&self) -> SourceInfo;

    /// Fetch a ticker quote, walking the fallback chain.
    ///
    /// Returns `Ok(None)` when no endpoint had data.
    ///
    /// # Errors
    ///
    /// Returns an error only when the source cannot run at all.
    async fn fetch_ticker(&self) -> Result<Option<TickerQuote>>;
}
