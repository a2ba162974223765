//! Bybit P2P order-book adapter.
//!
//! Provides [`BybitP2p`], the peer-to-peer rate source quoting the best
//! advertised buy and sell prices of a token in a fiat currency.

mod client;
pub mod settings;

pub use client::{BybitP2p, Side, SOURCE_NAME};
pub use settings::BybitP2pConfig;
