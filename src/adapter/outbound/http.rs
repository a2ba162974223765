//! Reqwest-backed JSON transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::port::JsonTransport;

/// HTTP transport shared by all rate sources.
///
/// Every request is bounded by the client-wide timeout. Non-2xx responses
/// are turned into errors before the body is parsed.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with a request timeout and `User-Agent` header.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying TLS backend cannot be initialized.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value> {
        debug!(url, params = query.len(), "GET");
        let body = self
            .client
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        debug!(url, "POST");
        let body = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }
}
