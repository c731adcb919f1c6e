//! Relay transport factory
//!
//! Creates the transport for a configuration.

use crate::config::RelayConfig;
use crate::error::Result;
use crate::relay::{RelayTransport, Web3FormsTransport};

/// Create the relay transport for a configuration
pub fn create_transport(config: &RelayConfig) -> Result<Box<dyn RelayTransport>> {
    Ok(Box::new(Web3FormsTransport::new(
        config.endpoint.clone(),
        config.timeout,
    )?))
}
