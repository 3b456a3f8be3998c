//! Remote fetcher: GET an API endpoint and parse its JSON body.

use crate::error::{Api2tsError, Result};
use serde_json::Value;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client used to download sample responses.
///
/// No timeout is configured: an unresponsive API stalls the run until the
/// user interrupts it.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and parse the body as JSON.
    ///
    /// Fails with [`Api2tsError::Fetch`] on a transport error or a
    /// non-success status, and with [`Api2tsError::Parse`] when the body is
    /// not JSON.
    pub async fn fetch_json(&self, url: &Url) -> Result<Value> {
        debug!(%url, "sending GET request");
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("unknown status");
            return Err(Api2tsError::Fetch(format!(
                "{} {}",
                status.as_u16(),
                reason
            )));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "received response body");
        serde_json::from_slice(&body).map_err(|e| Api2tsError::Parse(e.to_string()))
    }
}

/// Pick the value a type is inferred from.
///
/// Arrays contribute their first element (none when empty); any other value
/// is its own sample.
pub fn representative_sample(value: Value) -> Option<Value> {
    match value {
        Value::Array(items) => items.into_iter().next(),
        other => Some(other),
    }
}
