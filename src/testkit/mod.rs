//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`transport`] - `ScriptedTransport`, a [`JsonTransport`](crate::port::JsonTransport)
//!   answering from canned routes and recording every call.
//! - [`source`] - Fixed-result rate sources.
//! - [`surface`] - `RecordingSurface`, a [`ChatSurface`](crate::port::ChatSurface)
//!   that records deliveries.

pub mod source;
pub mod surface;
pub mod transport;
