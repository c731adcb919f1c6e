//! Relay credential handling
//!
//! Supports an explicit key (CLI flag) and environment variables.

mod web3forms;

pub use web3forms::{get_web3forms_credential, ACCESS_KEY_ENV_VARS};

use std::fmt;

/// Source of the relay access key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Passed explicitly (`--access-key`)
    Flag,
    /// Read from an environment variable
    EnvVar,
}

/// Opaque relay access key
///
/// Never empty; `Debug` and `Display` redact the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    source: CredentialSource,
}

impl Credential {
    /// Wrap a raw token. Empty or whitespace-only tokens count as absent.
    ///
    /// The token is stored as given and sent verbatim.
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token, source })
        }
    }

    /// The raw token, for building the payload
    pub fn expose(&self) -> &str {
        &self.token
    }

    /// Where the token came from
    pub const fn source(&self) -> CredentialSource {
        self.source
    }

    /// Token with all but the last four characters hidden
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{tail}", "*".repeat(chars.len() - 4))
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("source", &self.source)
            .finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}
