//! Contact submission workflow
//!
//! A single controller with an `Idle -> Submitting -> Idle` state machine:
//! 1. Validating - a credential must be configured
//! 2. Submitting - payload sent through the relay transport
//! 3. Complete - the relay reply is mapped to an outcome

mod controller;
mod progress;

pub use controller::SubmissionController;
pub use progress::{NoopProgress, Phase, ProgressCallback};
