//! HTX configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

/// HTX ticker and OTC fallback settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HtxConfig {
    /// Merged-ticker endpoint, queried with `?symbol=<candidate>`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Section title shown above the ticker quote.
    #[serde(default = "default_title")]
    pub title: String,
    /// Candidate symbols, tried strictly in order.
    #[serde(default = "default_symbols")]
    pub symbols: Vec<String>,
    /// OTC trade-market endpoint used when every symbol fails.
    #[serde(default = "default_otc_endpoint")]
    pub otc_endpoint: String,
    /// Pair label reported for OTC quotes.
    #[serde(default = "default_otc_label")]
    pub otc_label: String,
    /// Quote currency code used for the price glyph.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Query parameters sent to the OTC endpoint.
    #[serde(default = "default_otc_query")]
    pub otc_query: BTreeMap<String, String>,
}

fn default_endpoint() -> String {
    "https://api.htx.com/market/detail/merged".to_string()
}

fn default_title() -> String {
    "HTX (USDT/CNY)".to_string()
}

fn default_symbols() -> Vec<String> {
    vec!["usdtcnyt".to_string(), "usdthusd".to_string()]
}

fn default_otc_endpoint() -> String {
    "https://otc-api.htx.com/v1/data/trade-market".to_string()
}

fn default_otc_label() -> String {
    "USDT/CNY (OTC)".to_string()
}

fn default_currency() -> String {
    "CNY".to_string()
}

fn default_otc_query() -> BTreeMap<String, String> {
    [
        ("coinId", "2"),
        ("currency", "1"),
        ("tradeType", "buy"),
        ("currPage", "1"),
        ("payMethod", "0"),
        ("acceptOrder", "0"),
        ("blockType", "general"),
        ("online", "1"),
        ("range", "0"),
        ("amount", ""),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}

impl Default for HtxConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            title: default_title(),
            symbols: default_symbols(),
            otc_endpoint: default_otc_endpoint(),
            otc_label: default_otc_label(),
            currency: default_currency(),
            otc_query: default_otc_query(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_otc_query_covers_all_parameters() {
        let query = HtxConfig::default().otc_query;
        assert_eq!(query.len(), 10);
        assert_eq!(query.get("coinId").map(String::as_str), Some("2"));
        assert_eq!(query.get("blockType").map(String::as_str), Some("general"));
        assert_eq!(query.get("amount").map(String::as_str), Some(""));
    }

    #[test]
    fn otc_query_can_be_overridden() {
        let config: HtxConfig = toml::from_str(
            r#"
symbols = ["usdtcny"]

[otc_query]
coinId = "2"
currency = "1"
"#,
        )
        .unwrap();
        assert_eq!(config.symbols, vec!["usdtcny"]);
        assert_eq!(config.otc_query.len(), 2);
        assert_eq!(config.otc_label, "USDT/CNY (OTC)");
    }
}
