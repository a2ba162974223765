//! Quotes produced by the rate sources.

use rust_decimal::Decimal;

use super::money::Price;

/// Best buy/sell prices from a peer-to-peer order book.
///
/// Each side is fetched independently, so either may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceQuote {
    pub buy: Option<Price>,
    pub sell: Option<Price>,
}

impl PriceQuote {
    #[must_use]
    pub const fn new(buy: Option<Price>, sell: Option<Price>) -> Self {
        Self { buy, sell }
    }

    /// Absolute difference between buy and sell, if both sides are known.
    #[must_use]
    pub fn spread(&self) -> Option<Decimal> {
        match (self.buy, self.sell) {
            (Some(buy), Some(sell)) => Some((buy - sell).abs()),
            _ => None,
        }
    }

    /// True when neither side produced a price.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buy.is_none() && self.sell.is_none()
    }
}

/// Spot ticker snapshot for a trading pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerQuote {
    /// Resolved pair label, e.g. `USDTCNYT` or `USDT/CNY (OTC)`.
    pub pair_label: String,
    pub price: Option<Price>,
    /// 24h high.
    pub high: Option<Price>,
    /// 24h low.
    pub low: Option<Price>,
}

impl TickerQuote {
    #[must_use]
    pub fn new(
        pair_label: impl Into<String>,
        price: Option<Price>,
        high: Option<Price>,
        low: Option<Price>,
    ) -> Self {
        Self {
            pair_label: pair_label.into(),
            price,
            high,
            low,
        }
    }

    /// Quote built from a single trade offer: no 24h range.
    #[must_use]
    pub fn price_only(pair_label: impl Into<String>, price: Price) -> Self {
        Self::new(pair_label, Some(price), None, None)
    }
}
