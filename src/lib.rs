//! folio - portfolio contact relay client
//!
//! Library behind the `folio` binary: the contact-submission workflow,
//! the skills catalogue and the persisted theme preference.

pub mod auth;
pub mod config;
pub mod error;
pub mod profile;
pub mod relay;
pub mod skills;
pub mod submit;
pub mod theme;
pub mod types;
