//! Auth command - inspect and explain the relay access key

use crate::cli::style::{check, cross, Stylize};
use anstream::{eprintln, println};
use folio::auth::{get_web3forms_credential, CredentialSource, ACCESS_KEY_ENV_VARS};

/// Run the auth status command
pub fn run_auth_status(explicit: Option<&str>) {
    match get_web3forms_credential(explicit) {
        Some(credential) => {
            let source = match credential.source() {
                CredentialSource::Flag => "--access-key",
                CredentialSource::EnvVar => "environment",
            };
            println!("{} Access key found: {}", check(), credential.masked().accent());
            println!("  Source: {}", source.muted());
        }
        None => {
            eprintln!("{} {}", cross(), "No access key configured".error());
            eprintln!("  Run {} for instructions", "folio auth setup".accent().for_stderr());
        }
    }
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "Contact Relay Setup".emphasis());
    println!("===================");
    println!();
    println!("1. Create a free access key at https://web3forms.com/");
    println!("   (the key is tied to the inbox that receives messages)");
    println!();
    println!("2. Export it in your shell:");
    for var in ACCESS_KEY_ENV_VARS {
        println!("     {}", format!("export {var}=<your-key>").accent());
    }
    println!("   or pass it per call with --access-key");
    println!();
    println!("Optional:");
    println!("  FOLIO_RELAY_URL           alternate relay endpoint");
    println!("  FOLIO_RELAY_TIMEOUT_SECS  request timeout (default 30)");
}
