//! JSON-over-HTTP transport port.
//!
//! Rate sources talk to their upstreams only through this trait, which keeps
//! endpoint fallback logic testable without a network.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Client for JSON request/response calls.
///
/// Implementations must bound every call with a timeout and treat non-2xx
/// responses as errors.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one transport is shared by all
/// concurrent requests.
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// Issue a `GET` with the given query parameters and parse the body.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, connection failure, non-2xx status, or a
    /// body that is not valid JSON.
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value>;

    /// Issue a `POST` with a JSON body and parse the response body.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`get_json`](Self::get_json).
    async fn post_json(&self, url: &str, body: &Value) -> Result<Value>;
}
