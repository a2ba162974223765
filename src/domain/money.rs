//! Monetary types for price representation.

use rust_decimal::Decimal;

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Display glyph for a fiat currency code.
///
/// Unknown codes are rendered as the code itself.
#[must_use]
pub fn currency_glyph(code: &str) -> &str {
    match code.to_ascii_uppercase().as_str() {
        "RUB" => "₽",
        "CNY" => "¥",
        "USD" => "$",
        "EUR" => "€",
        _ => code,
    }
}
