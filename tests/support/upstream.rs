//! Canned upstream payloads shaped like the Bybit and HTX responses.

use serde_json::{json, Value};

pub fn p2p_listing(price: &str) -> Value {
    json!({
        "ret_code": 0,
        "ret_msg": "SUCCESS",
        "result": {
            "count": 1,
            "items": [{ "price": price, "nickName": "seller", "tokenId": "USDT" }]
        }
    })
}

pub fn p2p_empty() -> Value {
    json!({ "ret_code": 0, "result": { "count": 0, "items": [] } })
}

pub fn merged_ticker(close: f64, high: f64, low: f64) -> Value {
    json!({
        "status": "ok",
        "ch": "market.usdtcnyt.detail.merged",
        "tick": { "close": close, "high": high, "low": low, "open": close }
    })
}

pub fn ticker_error() -> Value {
    json!({ "status": "error", "err-code": "invalid-parameter", "err-msg": "invalid symbol" })
}

pub fn otc_listing(price: &str) -> Value {
    json!({ "code": 200, "success": true, "data": { "list": [{ "price": price }] } })
}
