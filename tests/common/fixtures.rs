//! Test data factories for folio types
//!
//! These are test utilities - not every test binary uses all of them.

#![allow(dead_code)]

use crate::common::mock_relay::MockRelay;
use folio::auth::{Credential, CredentialSource};
use folio::submit::SubmissionController;
use folio::types::FormInput;
use std::sync::Arc;

/// Relay body for an accepted message
pub const ACCEPTED: &str = r#"{"success": true, "message": "Email sent successfully!"}"#;

/// Relay body for a rejected key
pub const INVALID_KEY: &str = r#"{"success": false, "message": "invalid key"}"#;

/// Access key used by the fixtures
pub const TEST_KEY: &str = "test-access-key";

/// The form from the canonical scenario
pub fn make_form() -> FormInput {
    FormInput::new("Ana", "a@x.com", "Hi")
}

/// A configured credential
pub fn make_credential() -> Option<Credential> {
    Credential::new(TEST_KEY, CredentialSource::EnvVar)
}

/// Controller with a credential, over `relay`
pub fn make_controller(relay: &Arc<MockRelay>) -> SubmissionController {
    let controller = SubmissionController::new(relay.clone(), make_credential());
    controller.set_input(make_form());
    controller
}

/// Controller without a credential, over `relay`
pub fn make_controller_without_key(relay: &Arc<MockRelay>) -> SubmissionController {
    let controller = SubmissionController::new(relay.clone(), None);
    controller.set_input(make_form());
    controller
}
