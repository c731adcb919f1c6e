//! Submission workflow controller
//!
//! Owns the contact form and drives one relay submission at a time:
//! credential check, payload construction, transport call, and mapping of
//! the relay's reply onto a [`SubmissionOutcome`].

use crate::auth::Credential;
use crate::error::{Error, Result};
use crate::relay::RelayTransport;
use crate::submit::{NoopProgress, Phase, ProgressCallback};
use crate::types::{
    ContactPayload, Field, FormInput, GENERIC_SERVICE_ERROR, RawResponse, RelayReply,
    SubmissionOutcome,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error};

/// Contact form plus the `Idle -> Submitting -> Idle` state machine
///
/// At most one submission is in flight per controller. A second `submit`
/// while one is running is rejected, not queued.
pub struct SubmissionController {
    transport: Arc<dyn RelayTransport>,
    credential: Option<Credential>,
    form: Mutex<FormInput>,
    in_flight: AtomicBool,
    progress: Arc<dyn ProgressCallback>,
}

/// Clears the in-flight flag when dropped, on every exit path
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl SubmissionController {
    /// Create a controller with an empty form
    pub fn new(transport: Arc<dyn RelayTransport>, credential: Option<Credential>) -> Self {
        Self {
            transport,
            credential,
            form: Mutex::new(FormInput::default()),
            in_flight: AtomicBool::new(false),
            progress: Arc::new(NoopProgress),
        }
    }

    /// Attach a progress callback
    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressCallback>) -> Self {
        self.progress = progress;
        self
    }

    /// Snapshot of the current form
    pub fn form(&self) -> FormInput {
        self.lock_form().clone()
    }

    /// Update one field
    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        self.lock_form().set(field, value);
    }

    /// Replace the whole form
    pub fn set_input(&self, input: FormInput) {
        *self.lock_form() = input;
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether a credential was configured
    pub const fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    /// Replace the form with `input`, then submit it
    ///
    /// The in-flight check happens before the form is touched, so a
    /// rejected call leaves the running submission's input alone.
    pub async fn submit_input(&self, input: FormInput) -> Result<SubmissionOutcome> {
        let guard = self.begin()?;
        self.set_input(input);
        Ok(self.submit_locked(guard).await)
    }

    /// Submit the current form to the relay
    ///
    /// Returns exactly one outcome per accepted call. The only error is
    /// [`Error::SubmissionInFlight`], when another submission on this
    /// controller has not finished yet; no request is made and no progress
    /// is reported in that case.
    pub async fn submit(&self) -> Result<SubmissionOutcome> {
        let guard = self.begin()?;
        Ok(self.submit_locked(guard).await)
    }

    /// Claim the in-flight flag without awaiting
    ///
    /// `Ok(None)` means no credential is configured; such a call never
    /// reaches `Submitting`, so it needs no guard.
    fn begin(&self) -> Result<Option<InFlightGuard<'_>>> {
        if self.credential.is_none() {
            return Ok(None);
        }

        match InFlightGuard::acquire(&self.in_flight) {
            Some(guard) => Ok(Some(guard)),
            None => {
                debug!("Submission rejected: another one is in flight");
                Err(Error::SubmissionInFlight)
            }
        }
    }

    async fn submit_locked(&self, guard: Option<InFlightGuard<'_>>) -> SubmissionOutcome {
        self.progress.on_phase(Phase::Validating).await;

        let (Some(credential), Some(_guard)) = (&self.credential, guard) else {
            error!("Web3Forms access key is missing. Set WEB3FORMS_ACCESS_KEY or pass --access-key.");
            return self.finish(SubmissionOutcome::ConfigError).await;
        };

        self.progress.on_phase(Phase::Submitting).await;

        let payload = ContactPayload::new(&self.form(), credential.expose());
        debug!("Submitting message from {} via {}", payload.name, self.transport.endpoint());

        let outcome = match self.transport.send(&payload).await {
            Ok(response) => self.interpret(&response),
            Err(e) => {
                debug!("Submission error: {e}");
                SubmissionOutcome::TransportError {
                    detail: e.to_string(),
                }
            }
        };

        self.finish(outcome).await
    }

    /// Map a relay response onto an outcome, clearing the form on success
    fn interpret(&self, response: &RawResponse) -> SubmissionOutcome {
        let reply: RelayReply = match serde_json::from_str(&response.body) {
            Ok(reply) => reply,
            Err(e) => {
                error!(
                    "Relay returned an unreadable response (HTTP {}): {e}",
                    response.status
                );
                return SubmissionOutcome::TransportError {
                    detail: format!("invalid relay response (HTTP {}): {e}", response.status),
                };
            }
        };

        if reply.success {
            debug!("Relay accepted the message");
            self.lock_form().clear();
            return SubmissionOutcome::Success;
        }

        let message = reply
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_SERVICE_ERROR.to_string());
        debug!("Web3Forms error: {message}");

        SubmissionOutcome::ServiceError { message }
    }

    async fn finish(&self, outcome: SubmissionOutcome) -> SubmissionOutcome {
        self.progress.on_outcome(&outcome).await;
        self.progress.on_phase(Phase::Complete).await;
        outcome
    }

    fn lock_form(&self) -> MutexGuard<'_, FormInput> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
