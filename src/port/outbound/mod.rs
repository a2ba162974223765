//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod chat;
pub mod http;
pub mod rates;
