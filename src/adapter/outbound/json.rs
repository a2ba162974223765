//! Helpers for pulling prices out of loosely-typed upstream JSON.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::domain::Price;

/// Parse a JSON string or number into a positive price.
///
/// Upstreams use zero for "no value", so non-positive numbers are dropped.
pub(crate) fn price_from_value(value: &Value) -> Option<Price> {
    let parsed = match value {
        Value::String(raw) => parse_decimal(raw.trim()),
        Value::Number(number) => parse_decimal(&number.to_string()),
        _ => None,
    }?;
    (parsed > Decimal::ZERO).then_some(parsed)
}

/// Look up a JSON pointer and parse the target as a price.
pub(crate) fn price_at(value: &Value, pointer: &str) -> Option<Price> {
    value.pointer(pointer).and_then(price_from_value)
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}
