//! Rates report composition and rendering.
//!
//! [`ReportComposer`] gathers both rate sources into a
//! [`RatesReport`](crate::domain::RatesReport); [`render_report`] turns it
//! into display text. Neither step can fail: every missing value becomes a
//! placeholder line.

mod composer;
mod render;

pub use composer::ReportComposer;
pub use render::{render_report, TIMESTAMP_FORMAT};
