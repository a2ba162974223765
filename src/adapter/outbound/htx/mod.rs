//! HTX ticker adapter.
//!
//! Provides [`HtxTicker`], which walks an ordered list of spot symbols on the
//! merged-ticker endpoint and falls back to the OTC trade-market listing.

mod client;
pub mod settings;

pub use client::{HtxTicker, SOURCE_NAME};
pub use settings::HtxConfig;
