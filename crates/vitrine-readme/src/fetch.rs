//! Fetch trait and implementations.
//!
//! The sync loop talks to the network through the [`Fetch`] trait so the
//! candidate/fallback behavior stays testable without I/O. [`HttpFetcher`]
//! is the real reqwest-backed implementation; [`MockFetcher`] serves
//! canned responses and records every request it sees.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use vitrine_core::{Error, Result};

/// A source of raw README text.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// Fetch a candidate URL.
    ///
    /// Returns the response body on a success status, an empty string on a
    /// non-success status, and `Err` on transport failure. The caller
    /// treats empty and error identically: move on to the next candidate.
    async fn fetch_text(&self, url: &str) -> Result<String>;
}

/// HTTP fetcher backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with a default client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::http_with_source(format!("GET {url} failed"), e))?;
        if !response.status().is_success() {
            return Ok(String::new());
        }
        response
            .text()
            .await
            .map_err(|e| Error::http_with_source(format!("reading body of {url} failed"), e))
    }
}

/// Mock fetcher for testing.
///
/// Serves configured bodies, fails configured URLs with a transport
/// error, and answers everything else with an empty body (the non-success
/// case). Every requested URL is recorded for assertions.
#[derive(Debug, Default)]
pub struct MockFetcher {
    responses: HashMap<String, String>,
    failures: HashSet<String>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    /// Create an empty mock: every fetch answers with an empty body.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a successful response body for a URL.
    pub fn with_body(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }

    /// Register a transport failure for a URL.
    pub fn with_failure(mut self, url: &str) -> Self {
        self.failures.insert(url.to_string());
        self
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl Fetch for MockFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        if self.failures.contains(url) {
            return Err(Error::http(format!("mock transport failure for {url}")));
        }
        Ok(self.responses.get(url).cloned().unwrap_or_default())
    }
}
