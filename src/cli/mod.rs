//! CLI commands
//!
//! Command implementations for the `folio` binary.

mod auth;
mod contact;
mod progress;
mod send;
mod skills;
pub mod style;
mod theme;

pub use auth::{run_auth_setup, run_auth_status};
pub use contact::run_contact;
pub use send::{run_send, SendArgs};
pub use skills::run_skills;
pub use theme::{run_theme, ThemeCommand};
