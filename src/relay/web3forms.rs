//! Web3Forms relay transport

use crate::error::{Error, Result};
use crate::relay::RelayTransport;
use crate::types::{ContactPayload, RawResponse};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Web3Forms transport using reqwest
pub struct Web3FormsTransport {
    client: Client,
    endpoint: Url,
}

impl Web3FormsTransport {
    /// Create a transport posting to `endpoint` with a request timeout
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl RelayTransport for Web3FormsTransport {
    async fn send(&self, payload: &ContactPayload) -> Result<RawResponse> {
        debug!("POST {}", self.endpoint);

        // The relay answers rejections with a 4xx and a JSON body, so the
        // status is passed through rather than turned into an error.
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| Error::Transport(describe(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(describe(&e)))?;

        debug!("Relay answered {status} ({} bytes)", body.len());

        Ok(RawResponse { status, body })
    }

    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {err}")
    } else if err.is_connect() {
        format!("cannot connect: {err}")
    } else {
        err.to_string()
    }
}
