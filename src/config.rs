//! Relay configuration
//!
//! Loaded once at startup from the environment and handed to the
//! transport and controller.

use crate::auth::{get_web3forms_credential, Credential};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default relay endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Overrides the relay endpoint
pub const ENDPOINT_ENV_VAR: &str = "FOLIO_RELAY_URL";

/// Overrides the request timeout (whole seconds)
pub const TIMEOUT_ENV_VAR: &str = "FOLIO_RELAY_TIMEOUT_SECS";

/// Overrides the preferences directory
pub const CONFIG_DIR_ENV_VAR: &str = "FOLIO_CONFIG_DIR";

/// Everything needed to talk to the relay
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Relay submit URL
    pub endpoint: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Access key, if one is configured
    pub credential: Option<Credential>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            credential: None,
        }
    }
}

impl RelayConfig {
    /// Load configuration from the environment
    ///
    /// `explicit_key` takes precedence over the access key variables.
    /// A missing key is not an error here; the controller reports it.
    pub fn from_env(explicit_key: Option<&str>) -> Result<Self> {
        let endpoint = match env::var(ENDPOINT_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_endpoint(&raw)?,
            _ => default_endpoint(),
        };

        let timeout = match env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) if !raw.trim().is_empty() => parse_timeout(&raw)?,
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            endpoint,
            timeout,
            credential: get_web3forms_credential(explicit_key),
        })
    }

    /// Replace the endpoint
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    /// Replace the timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the credential
    #[must_use]
    pub fn with_credential(mut self, credential: Option<Credential>) -> Self {
        self.credential = credential;
        self
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("hardcoded relay endpoint is valid")
}

/// Parse a relay endpoint; only http(s) URLs are accepted
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| Error::Config(format!("invalid relay URL '{raw}': {e}")))?;

    match url.scheme() {
        "https" | "http" => Ok(url),
        other => Err(Error::Config(format!(
            "unsupported relay URL scheme '{other}' (expected https)"
        ))),
    }
}

/// Parse a timeout in whole seconds; zero is rejected
pub fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("invalid relay timeout '{raw}'")))?;

    if secs == 0 {
        return Err(Error::Config("relay timeout must be at least 1 second".to_string()));
    }

    Ok(Duration::from_secs(secs))
}

/// Directory holding `preferences.json`
///
/// `FOLIO_CONFIG_DIR` wins; otherwise the platform config dir plus `folio`.
pub fn preferences_dir() -> Result<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV_VAR) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }

    dirs::config_dir()
        .map(|dir| dir.join("folio"))
        .ok_or_else(|| Error::Config("cannot determine config directory".to_string()))
}
