//! CLI progress callback with a spinner and styled notifications

use crate::cli::style::{spinner_style, NoticeStyle, Stream, Stylize};
use anstream::{eprintln, println};
use async_trait::async_trait;
use folio::submit::{Phase, ProgressCallback};
use folio::types::SubmissionOutcome;
use indicatif::ProgressBar;
use std::time::Duration;

/// Spinner tick interval
const TICK: Duration = Duration::from_millis(80);

/// CLI progress callback: spinner while sending, then a notification
pub struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    /// Create a progress reporter with a hidden spinner
    pub fn new() -> Self {
        Self {
            spinner: ProgressBar::new_spinner().with_style(spinner_style()),
        }
    }
}

#[async_trait]
impl ProgressCallback for CliProgress {
    async fn on_phase(&self, phase: Phase) {
        match phase {
            Phase::Submitting => {
                self.spinner.set_message(format!("{phase} message..."));
                self.spinner.enable_steady_tick(TICK);
            }
            Phase::Validating | Phase::Complete => {}
        }
    }

    async fn on_outcome(&self, outcome: &SubmissionOutcome) {
        self.spinner.finish_and_clear();

        let note = outcome.notification();
        let look = NoticeStyle::for_variant(note.variant);
        let text = look.render(&note);
        match look.stream {
            Stream::Stdout => println!("{text}"),
            Stream::Stderr => eprintln!("{text}"),
        }

        if let SubmissionOutcome::TransportError { detail } = outcome {
            eprintln!("  {}", detail.muted().for_stderr());
        }
    }
}
