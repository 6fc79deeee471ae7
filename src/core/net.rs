// src/core/net.rs
//
// Blocking HTTP behind a small trait so lookups can be driven by a stub
// in tests and by reqwest everywhere else.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::USER_AGENT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Only a plain 200 counts; redirects and other 2xx are treated as failures.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("connection failed: {0}")]
    Connect(String),
    #[error("http client error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout(e.to_string())
        } else if e.is_connect() {
            FetchError::Connect(e.to_string())
        } else {
            FetchError::Other(e.to_string())
        }
    }
}

/// Anything that can perform a GET or a JSON POST with a per-call timeout.
/// Non-200 statuses are returned as `Ok`, transport failures as `Err`.
pub trait Fetch: Send + Sync {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, FetchError>;
    fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> Result<HttpResponse, FetchError>;
}

/// reqwest-backed fetcher. One connection pool per instance.
#[derive(Clone, Debug)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, FetchError> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner })
    }
}

impl Fetch for HttpClient {
    fn get(&self, url: &str, timeout: Duration) -> Result<HttpResponse, FetchError> {
        logd!("GET {url}");
        let resp = self.inner.get(url).timeout(timeout).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }

    fn post_json(&self, url: &str, body: &Value, timeout: Duration) -> Result<HttpResponse, FetchError> {
        logd!("POST {url}");
        let resp = self
            .inner
            .post(url)
            .header("Referer", "https://leetcode.com")
            .json(body)
            .timeout(timeout)
            .send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok(HttpResponse { status, body })
    }
}
