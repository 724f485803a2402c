//! HTTP seam used by the prober
//!
//! The prober only needs "send a GET, tell me the status and how long it
//! took", so that is the whole trait. [`ReqwestClient`] is the production
//! implementation, tests swap in a scripted client.

use async_trait::async_trait;
use std::{
    error::Error as _,
    time::{Duration, Instant},
};
use thiserror::Error;
use tracing::debug;

/// Status and round-trip time of a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub elapsed: Duration,
}

/// Network-level failure, the request never produced a status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issue a single GET with the given headers
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response was received (DNS, connect,
    /// TLS, timeout or an invalid request).
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Response, TransportError>;
}

/// [`HttpClient`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    /// Build a client with the crate user agent and reqwest's default timeouts
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized
    pub fn new() -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { inner })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, headers: &[(&str, &str)]) -> Result<Response, TransportError> {
        let mut request = self.inner.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let start = Instant::now();
        let response = request.send().await.map_err(|e| {
            debug!(url, error = %e, "request failed");
            TransportError(describe(&e))
        })?;
        let elapsed = start.elapsed();

        let status = response.status().as_u16();
        debug!(url, status, ?elapsed, "response received");

        Ok(Response { status, elapsed })
    }
}

/// Flatten the error and its sources into one line
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_str = cause.to_string();
        if !message.contains(&cause_str) {
            message.push_str(": ");
            message.push_str(&cause_str);
        }
        source = cause.source();
    }
    message
}
