//! Scripted [`JsonTransport`] for exercising endpoint fallback.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::port::JsonTransport;

/// HTTP method of a recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One call made through the transport.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RecordedCall {
    /// Value of a query parameter, if sent.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    /// Value of a top-level string field of the JSON body, if sent.
    pub fn body_field(&self, key: &str) -> Option<String> {
        self.body
            .as_ref()
            .and_then(|body| body.get(key))
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
    }

    fn param(&self, key: &str) -> Option<String> {
        match self.method {
            Method::Get => self.query_value(key),
            Method::Post => self.body_field(key),
        }
    }
}

struct Route {
    method: Method,
    url: String,
    key: String,
    value: String,
    response: std::result::Result<Value, String>,
}

/// Transport answering from canned routes.
///
/// A route matches on method, URL and one discriminating parameter (a query
/// parameter for `GET`, a top-level body field for `POST`). Routes are not
/// consumed, so repeated requests get identical answers. Unmatched requests
/// fail like a transport error.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: Vec<Route>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `GET url` carrying `key=value` in its query.
    #[must_use]
    pub fn on_get(
        self,
        url: &str,
        key: &str,
        value: &str,
        response: std::result::Result<Value, String>,
    ) -> Self {
        self.route(Method::Get, url, key, value, response)
    }

    /// Answer `POST url` whose JSON body has `"key": "value"`.
    #[must_use]
    pub fn on_post(
        self,
        url: &str,
        key: &str,
        value: &str,
        response: std::result::Result<Value, String>,
    ) -> Self {
        self.route(Method::Post, url, key, value, response)
    }

    fn route(
        mut self,
        method: Method,
        url: &str,
        key: &str,
        value: &str,
        response: std::result::Result<Value, String>,
    ) -> Self {
        self.routes.push(Route {
            method,
            url: url.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            response,
        });
        self
    }

    /// All calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("lock transport calls").clone()
    }

    /// Number of calls made to `url`.
    pub fn calls_to(&self, url: &str) -> usize {
        self.calls
            .lock()
            .expect("lock transport calls")
            .iter()
            .filter(|call| call.url == url)
            .count()
    }

    fn answer(&self, call: RecordedCall) -> Result<Value> {
        let response = self
            .routes
            .iter()
            .find(|route| {
                route.method == call.method
                    && route.url == call.url
                    && call.param(&route.key).as_deref() == Some(route.value.as_str())
            })
            .map(|route| route.response.clone());
        self.calls.lock().expect("lock transport calls").push(call);

        match response {
            Some(Ok(body)) => Ok(body),
            Some(Err(message)) => Err(Error::UnexpectedResponse(message)),
            None => Err(Error::UnexpectedResponse("no scripted route".to_string())),
        }
    }
}

#[async_trait]
impl JsonTransport for ScriptedTransport {
    async fn get_json(&self, url: &str, query: &[(String, String)]) -> Result<Value> {
        self.answer(RecordedCall {
            method: Method::Get,
            url: url.to_string(),
            query: query.to_vec(),
            body: None,
        })
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Value> {
        self.answer(RecordedCall {
            method: Method::Post,
            url: url.to_string(),
            query: Vec::new(),
            body: Some(body.clone()),
        })
    }
}
