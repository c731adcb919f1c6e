//! Send command - submit a message through the contact relay

use crate::cli::progress::CliProgress;
use folio::config::RelayConfig;
use folio::error::{Error, Result};
use folio::relay::create_transport;
use folio::submit::SubmissionController;
use folio::types::{Field, FormInput, SubmissionOutcome};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::debug;

/// Arguments for the send command
pub struct SendArgs {
    /// `--name`
    pub name: Option<String>,
    /// `--email`
    pub email: Option<String>,
    /// `--message`
    pub message: Option<String>,
    /// `--access-key`
    pub access_key: Option<String>,
    /// Prompt for missing fields when stdin is a terminal
    pub interactive: bool,
}

/// Run the send command
///
/// Returns the outcome so the caller can pick the exit status.
pub async fn run_send(args: SendArgs) -> Result<SubmissionOutcome> {
    let config = RelayConfig::from_env(args.access_key.as_deref())?;

    let interactive = args.interactive && std::io::stdin().is_terminal();
    let form = FormInput {
        name: field_value(Field::Name, args.name, interactive)?,
        email: field_value(Field::Email, args.email, interactive)?,
        message: field_value(Field::Message, args.message, interactive)?,
    };
    form.validate()?;

    let transport = create_transport(&config)?;
    debug!("Relay endpoint: {}", transport.endpoint());

    let controller = SubmissionController::new(Arc::from(transport), config.credential)
        .with_progress(Arc::new(CliProgress::new()));

    controller.submit_input(form).await
}

fn field_value(field: Field, given: Option<String>, interactive: bool) -> Result<String> {
    match given {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ if interactive => prompt(field),
        _ => Err(Error::Validation(format!("{field} is required (pass --{field})"))),
    }
}

fn prompt(field: Field) -> Result<String> {
    let label = match field {
        Field::Name => "Your Name",
        Field::Email => "Your Email",
        Field::Message => "Your Message",
    };

    dialoguer::Input::<String>::new()
        .with_prompt(label)
        .interact_text()
        .map_err(|e| Error::Prompt(e.to_string()))
}
