//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different front ends (CLI, tests, a web page) to follow
//! a submission without the controller rendering anything itself.

use crate::types::SubmissionOutcome;
use async_trait::async_trait;
use std::fmt;

/// Submission phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Checking the credential
    Validating,
    /// Payload handed to the relay, awaiting a response
    Submitting,
    /// Attempt finished with an outcome
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validating => write!(f, "Validating"),
            Self::Submitting => write!(f, "Sending"),
            Self::Complete => write!(f, "Done"),
        }
    }
}

/// Progress callback trait
///
/// Implement this trait to receive progress updates during submission.
/// - CLI implementations can drive a spinner and print the notification
/// - Tests can record the sequence of phases
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once with the attempt's outcome
    async fn on_outcome(&self, outcome: &SubmissionOutcome);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_outcome(&self, _outcome: &SubmissionOutcome) {}
}
