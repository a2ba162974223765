//! Transient report combining both rate sources.

use chrono::{DateTime, Local};

use super::error::SourceError;
use super::quote::{PriceQuote, TickerQuote};

/// Rates gathered for one request.
///
/// Built and discarded within a single request/response cycle. Each source
/// result is independent: a failure on one side never hides the other.
#[derive(Debug, Clone)]
pub struct RatesReport {
    pub generated_at: DateTime<Local>,
    /// Section title for the P2P quote, e.g. `Bybit P2P (USDT/RUB)`.
    pub p2p_title: String,
    /// Glyph appended to P2P prices.
    pub p2p_glyph: String,
    pub p2p: Result<PriceQuote, SourceError>,
    /// Section title for the ticker quote, e.g. `HTX (USDT/CNY)`.
    pub ticker_title: String,
    /// Glyph appended to ticker prices.
    pub ticker_glyph: String,
    /// `Ok(None)` means every endpoint was tried and none had data.
    pub ticker: Result<Option<TickerQuote>, SourceError>,
}
