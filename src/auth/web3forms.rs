//! Web3Forms access key discovery

use crate::auth::{Credential, CredentialSource};
use std::env;
use tracing::debug;

/// Environment variables checked for the access key, in priority order
pub const ACCESS_KEY_ENV_VARS: [&str; 2] = ["WEB3FORMS_ACCESS_KEY", "VITE_WEB3FORMS_ACCESS_KEY"];

/// Get the Web3Forms access key
///
/// Priority:
/// 1. Explicit key (`--access-key`)
/// 2. `WEB3FORMS_ACCESS_KEY` environment variable
/// 3. `VITE_WEB3FORMS_ACCESS_KEY` environment variable
///
/// Blank values are skipped. Returns `None` when no key is configured.
pub fn get_web3forms_credential(explicit: Option<&str>) -> Option<Credential> {
    if let Some(cred) = explicit.and_then(|key| Credential::new(key, CredentialSource::Flag)) {
        debug!("Using access key from command line");
        return Some(cred);
    }

    ACCESS_KEY_ENV_VARS.iter().find_map(|var| {
        let cred = env::var(var)
            .ok()
            .and_then(|key| Credential::new(key, CredentialSource::EnvVar))?;
        debug!("Using access key from {var}");
        Some(cred)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_wins() {
        let cred = get_web3forms_credential(Some("flag-key")).unwrap();
        assert_eq!(cred.expose(), "flag-key");
        assert_eq!(cred.source(), CredentialSource::Flag);
    }

    #[test]
    fn test_explicit_key_is_not_trimmed() {
        let cred = get_web3forms_credential(Some("flag-key\n")).unwrap();
        assert_eq!(cred.expose(), "flag-key\n");
        assert_eq!(cred.source(), CredentialSource::Flag);
    }
}
