//! Exchange-agnostic domain types.

pub mod error;
mod message;
mod money;
mod quote;
mod report;

pub use error::SourceError;
pub use message::{ActionButton, MarkupHints, MessageRef, TextFormat, REFRESH_TRIGGER};
pub use money::{currency_glyph, Price};
pub use quote::{PriceQuote, TickerQuote};
pub use report::RatesReport;
