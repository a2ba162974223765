//! Text rendering of a rates report.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{PriceQuote, RatesReport, SourceError, TextFormat, TickerQuote};

/// Timestamp layout of the report header.
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

const TITLE: &str = "Актуальный курс USDT";
const NO_DATA: &str = "нет данных";

/// Decimal places for P2P prices.
const P2P_PRECISION: u32 = 2;
/// Decimal places for ticker prices.
const TICKER_PRECISION: u32 = 4;

/// Render a report as display text.
///
/// `TextFormat::Html` emits Telegram HTML markup (`<b>`, `<code>`) and
/// escapes free text; `TextFormat::Plain` emits the same lines untagged.
#[must_use]
pub fn render_report(report: &RatesReport, format: TextFormat) -> String {
    let markup = Markup(format);
    let mut lines = vec![
        format!("📊 {}", markup.bold(TITLE)),
        format!("🕐 {}\n", report.generated_at.format(TIMESTAMP_FORMAT)),
        format!("🔵 {}", markup.bold(&markup.escape(&report.p2p_title))),
    ];

    match &report.p2p {
        Ok(quote) => p2p_lines(&mut lines, quote, &report.p2p_glyph, markup),
        Err(e) => lines.push(error_line(e, markup)),
    }

    lines.push(String::new());
    lines.push(format!("🟡 {}", markup.bold(&markup.escape(&report.ticker_title))));

    match &report.ticker {
        Ok(Some(quote)) if quote.price.is_some() => {
            ticker_lines(&mut lines, quote, &report.ticker_glyph, markup);
        }
        Ok(_) => lines.push("  ⚠️ Нет данных".to_string()),
        Err(e) => lines.push(error_line(e, markup)),
    }

    lines.join("\n")
}

fn p2p_lines(lines: &mut Vec<String>, quote: &PriceQuote, glyph: &str, markup: Markup) {
    let side = |label: &str, value: Option<Decimal>| match value {
        Some(price) => format!(
            "  {label}: {}",
            markup.code(&amount(price, P2P_PRECISION, glyph))
        ),
        None => format!("  {label}: {NO_DATA}"),
    };

    lines.push(side("Покупка", quote.buy));
    lines.push(side("Продажа", quote.sell));
    if let Some(spread) = quote.spread() {
        lines.push(format!(
            "  Спред: {}",
            markup.code(&amount(spread, P2P_PRECISION, glyph))
        ));
    }
}

fn ticker_lines(lines: &mut Vec<String>, quote: &TickerQuote, glyph: &str, markup: Markup) {
    let fields = [
        ("Цена", quote.price),
        ("Макс (24ч)", quote.high),
        ("Мин (24ч)", quote.low),
    ];
    for (label, value) in fields {
        if let Some(value) = value {
            lines.push(format!(
                "  {label}: {}",
                markup.code(&amount(value, TICKER_PRECISION, glyph))
            ));
        }
    }
    lines.push(format!("  Пара: {}", markup.escape(&quote.pair_label)));
}

fn error_line(error: &SourceError, markup: Markup) -> String {
    format!("  ⚠️ Ошибка: {}", markup.escape(&error.message))
}

/// Fixed-point amount followed by a currency glyph.
fn amount(value: Decimal, precision: u32, glyph: &str) -> String {
    let rounded = value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.prec$} {glyph}", prec = precision as usize)
}

#[derive(Clone, Copy)]
struct Markup(TextFormat);

impl Markup {
    fn bold(self, text: &str) -> String {
        match self.0 {
            TextFormat::Html => format!("<b>{text}</b>"),
            TextFormat::Plain => text.to_string(),
        }
    }

    fn code(self, text: &str) -> String {
        match self.0 {
            TextFormat::Html => format!("<code>{text}</code>"),
            TextFormat::Plain => text.to_string(),
        }
    }

    fn escape(self, text: &str) -> String {
        match self.0 {
            TextFormat::Html => escape_html(text),
            TextFormat::Plain => text.to_string(),
        }
    }
}

/// Escape the characters Telegram's HTML parse mode treats as markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use rust_decimal_macros::dec;

    fn report(
        p2p: Result<PriceQuote, SourceError>,
        ticker: Result<Option<TickerQuote>, SourceError>,
    ) -> RatesReport {
        RatesReport {
            generated_at: Local.with_ymd_and_hms(2026, 10, 17, 9, 5, 3).unwrap(),
            p2p_title: "Bybit P2P (USDT/RUB)".to_string(),
            p2p_glyph: "₽".to_string(),
            p2p,
            ticker_title: "HTX (USDT/CNY)".to_string(),
            ticker_glyph: "¥".to_string(),
            ticker,
        }
    }

    fn plain(report: &RatesReport) -> String {
        render_report(report, TextFormat::Plain)
    }

    #[test]
    fn header_carries_title_and_timestamp() {
        let text = plain(&report(Ok(PriceQuote::default()), Ok(None)));
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("📊 Актуальный курс USDT"));
        assert_eq!(lines.next(), Some("🕐 17.10.2026 09:05:03"));
        assert_eq!(lines.next(), Some(""));
        assert_eq!(lines.next(), Some("🔵 Bybit P2P (USDT/RUB)"));
    }

    #[test]
    fn buy_sell_grid() {
        let cases = [
            (Some(dec!(95.20)), Some(dec!(94.80))),
            (Some(dec!(95.20)), None),
            (None, Some(dec!(94.80))),
            (None, None),
        ];

        for (buy, sell) in cases {
            let text = plain(&report(Ok(PriceQuote::new(buy, sell)), Ok(None)));

            match buy {
                Some(_) => assert!(text.contains("  Покупка: 95.20 ₽"), "{text}"),
                None => assert!(text.contains("  Покупка: нет данных"), "{text}"),
            }
            match sell {
                Some(_) => assert!(text.contains("  Продажа: 94.80 ₽"), "{text}"),
                None => assert!(text.contains("  Продажа: нет данных"), "{text}"),
            }
            assert_eq!(
                text.contains("Спред"),
                buy.is_some() && sell.is_some(),
                "{text}"
            );
        }
    }

    #[test]
    fn spread_scenario() {
        let text = plain(&report(
            Ok(PriceQuote::new(Some(dec!(95.20)), Some(dec!(94.80)))),
            Ok(None),
        ));
        assert!(text.contains("Покупка: 95.20 ₽"));
        assert!(text.contains("Продажа: 94.80 ₽"));
        assert!(text.contains("Спред: 0.40 ₽"));
    }

    #[test]
    fn spread_when_sell_exceeds_buy() {
        let text = plain(&report(
            Ok(PriceQuote::new(Some(dec!(90)), Some(dec!(91.255)))),
            Ok(None),
        ));
        assert!(text.contains("Спред: 1.26 ₽"), "{text}");
        assert!(text.contains("Продажа: 91.26 ₽"), "{text}");
    }

    #[test]
    fn full_ticker_section() {
        let quote = TickerQuote::new("USDTCNYT", Some(dec!(7.2)), Some(dec!(7.25)), Some(dec!(7.1)));
        let text = plain(&report(Ok(PriceQuote::default()), Ok(Some(quote))));
        assert!(text.contains("🟡 HTX (USDT/CNY)"));
        assert!(text.contains("  Цена: 7.2000 ¥"));
        assert!(text.contains("  Макс (24ч): 7.2500 ¥"));
        assert!(text.contains("  Мин (24ч): 7.1000 ¥"));
        assert!(text.ends_with("  Пара: USDTCNYT"));
    }

    #[test]
    fn otc_ticker_has_no_range_lines() {
        let quote = TickerQuote::price_only("USDT/CNY (OTC)", dec!(7.1234));
        let text = plain(&report(Ok(PriceQuote::default()), Ok(Some(quote))));
        assert!(text.contains("Цена: 7.1234 ¥"));
        assert!(!text.contains("Макс"));
        assert!(!text.contains("Мин"));
        assert!(text.contains("Пара: USDT/CNY (OTC)"));
    }

    #[test]
    fn only_high_present() {
        let quote = TickerQuote::new("USDTCNYT", Some(dec!(7.2)), Some(dec!(7.3)), None);
        let text = plain(&report(Ok(PriceQuote::default()), Ok(Some(quote))));
        assert!(text.contains("Макс (24ч): 7.3000 ¥"));
        assert!(!text.contains("Мин"));
    }

    #[test]
    fn ticker_without_price_is_no_data() {
        let quote = TickerQuote::new("USDTCNYT", None, Some(dec!(7.3)), Some(dec!(7.1)));
        let text = plain(&report(Ok(PriceQuote::default()), Ok(Some(quote))));
        assert!(text.ends_with("  ⚠️ Нет данных"));
        assert!(!text.contains("Пара"));
    }

    #[test]
    fn everything_missing_still_renders() {
        let text = plain(&report(Ok(PriceQuote::default()), Ok(None)));
        assert!(text.contains("Покупка: нет данных"));
        assert!(text.contains("Продажа: нет данных"));
        assert!(text.contains("⚠️ Нет данных"));
    }

    #[test]
    fn source_errors_render_as_error_lines() {
        let text = plain(&report(
            Err(SourceError::new("bybit-p2p", "HTTP error: 503")),
            Err(SourceError::new("htx", "internal error")),
        ));
        assert!(text.contains("🔵 Bybit P2P (USDT/RUB)\n  ⚠️ Ошибка: HTTP error: 503"));
        assert!(text.contains("🟡 HTX (USDT/CNY)\n  ⚠️ Ошибка: internal error"));
    }

    #[test]
    fn html_wraps_values_and_escapes_errors() {
        let text = render_report(
            &report(
                Ok(PriceQuote::new(Some(dec!(95.2)), None)),
                Err(SourceError::new("htx", "unexpected <html> & body")),
            ),
            TextFormat::Html,
        );
        assert!(text.starts_with("📊 <b>Актуальный курс USDT</b>"));
        assert!(text.contains("🔵 <b>Bybit P2P (USDT/RUB)</b>"));
        assert!(text.contains("  Покупка: <code>95.20 ₽</code>"));
        assert!(text.contains("  ⚠️ Ошибка: unexpected &lt;html&gt; &amp; body"));
    }

    #[test]
    fn rounding_is_midpoint_away_from_zero() {
        assert_eq!(amount(dec!(0.125), 2, "₽"), "0.13 ₽");
        assert_eq!(amount(dec!(7.12345), 4, "¥"), "7.1235 ¥");
        assert_eq!(amount(dec!(7), 4, "¥"), "7.0000 ¥");
    }
}
