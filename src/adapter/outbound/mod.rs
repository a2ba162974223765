//! Outbound adapters (driven side).

pub mod bybit;
pub mod htx;
pub mod http;
mod json;
