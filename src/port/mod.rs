//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the rate-reporting core and the outside
//! world: the HTTP transport used by rate sources, the rate sources
//! themselves, and the chat surface that displays reports.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │  Rate   │            │    JSON     │              │   Chat    │
//! │ Sources │            │  Transport  │              │  Surface  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`JsonTransport`] - Outbound JSON-over-HTTP calls
//! - [`P2pRateSource`], [`TickerRateSource`] - Quote providers
//! - [`ChatSurface`] - Sending and editing chat messages

pub mod outbound;

pub use outbound::chat::ChatSurface;
pub use outbound::http::JsonTransport;
pub use outbound::rates::{P2pRateSource, SourceInfo, TickerRateSource};
