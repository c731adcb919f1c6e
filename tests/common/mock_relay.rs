//! Mock relay transport for testing
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use async_trait::async_trait;
use folio::error::{Error, Result};
use folio::relay::RelayTransport;
use folio::types::{ContactPayload, RawResponse};
use std::sync::Mutex;
use tokio::sync::Notify;

/// What the mock does when `send` is called
#[derive(Debug, Clone)]
enum Behavior {
    Reply(RawResponse),
    Fault(String),
    Panic,
}

/// Simple mock relay transport
///
/// Features:
/// - Configurable reply body and status
/// - Fault and panic injection
/// - Call tracking for verification
/// - Optional gate that holds `send` open until released
pub struct MockRelay {
    behavior: Mutex<Behavior>,
    calls: Mutex<Vec<ContactPayload>>,
    gated: bool,
    entered: Notify,
    release: Notify,
}

impl MockRelay {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior: Mutex::new(behavior),
            calls: Mutex::new(Vec::new()),
            gated: false,
            entered: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Reply 200 with `body`
    pub fn replying(body: &str) -> Self {
        Self::with_status(200, body)
    }

    /// Reply with a specific status and body
    pub fn with_status(status: u16, body: &str) -> Self {
        Self::with_behavior(Behavior::Reply(RawResponse {
            status,
            body: body.to_string(),
        }))
    }

    /// Fail every call with a transport error
    pub fn failing(msg: &str) -> Self {
        Self::with_behavior(Behavior::Fault(msg.to_string()))
    }

    /// Panic inside `send`
    pub fn panicking() -> Self {
        Self::with_behavior(Behavior::Panic)
    }

    /// Hold each `send` until [`MockRelay::release`] is called
    #[must_use]
    pub fn gated(mut self) -> Self {
        self.gated = true;
        self
    }

    /// Change the reply for subsequent calls
    pub fn set_reply(&self, body: &str) {
        *self.behavior.lock().unwrap() = Behavior::Reply(RawResponse {
            status: 200,
            body: body.to_string(),
        });
    }

    /// Wait until a gated `send` has been entered
    pub async fn wait_until_entered(&self) {
        self.entered.notified().await;
    }

    /// Let one gated `send` finish
    pub fn release(&self) {
        self.release.notify_one();
    }

    // === Call verification methods ===

    /// All payloads sent so far
    pub fn calls(&self) -> Vec<ContactPayload> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `send` calls
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Assert that exactly one payload was sent and return it
    pub fn single_call(&self) -> ContactPayload {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "Expected exactly one send but got: {calls:?}");
        calls[0].clone()
    }
}

#[async_trait]
impl RelayTransport for MockRelay {
    async fn send(&self, payload: &ContactPayload) -> Result<RawResponse> {
        self.calls.lock().unwrap().push(payload.clone());

        if self.gated {
            self.entered.notify_one();
            self.release.notified().await;
        }

        let behavior = self.behavior.lock().unwrap().clone();
        match behavior {
            Behavior::Reply(response) => Ok(response),
            Behavior::Fault(msg) => Err(Error::Transport(msg)),
            Behavior::Panic => panic!("mock relay panicked"),
        }
    }

    fn endpoint(&self) -> &str {
        "mock://relay"
    }
}
