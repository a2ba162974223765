//! Bybit P2P configuration.

use serde::Deserialize;

/// Bybit P2P order-book settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BybitP2pConfig {
    /// Order-book listing endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Token symbol, e.g. `USDT`.
    #[serde(default = "default_token")]
    pub token: String,
    /// Fiat currency code, e.g. `RUB`.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Number of advertisements requested per side.
    #[serde(default = "default_rows")]
    pub rows: u32,
}

fn default_endpoint() -> String {
    "https://api2.bybit.com/fiat/otc/item/online".to_string()
}

fn default_token() -> String {
    "USDT".to_string()
}

fn default_currency() -> String {
    "RUB".to_string()
}

const fn default_rows() -> u32 {
    5
}

impl Default for BybitP2pConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            token: default_token(),
            currency: default_currency(),
            rows: default_rows(),
        }
    }
}
