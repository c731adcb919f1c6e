//! Relay transport
//!
//! Narrow interface to the third-party form relay, so the submission
//! controller can run against the real HTTP service or a test fake.

mod factory;
mod web3forms;

pub use factory::create_transport;
pub use web3forms::Web3FormsTransport;

use crate::error::Result;
use crate::types::{ContactPayload, RawResponse};
use async_trait::async_trait;

/// Transport trait for relay submissions
///
/// `Ok` means an HTTP response arrived, whatever its status; the caller
/// interprets the body. `Err` is a fault with no usable response.
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Deliver one payload to the relay
    async fn send(&self, payload: &ContactPayload) -> Result<RawResponse>;

    /// Human-readable target, for diagnostics
    fn endpoint(&self) -> &str;
}
