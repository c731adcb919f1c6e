//! folio - portfolio contact relay client
//!
//! CLI binary for sending contact messages, browsing skills and managing
//! the theme preference.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio::types::Theme;
use tracing_subscriber::EnvFilter;

mod cli;

/// Environment variable holding the log filter
const LOG_ENV_VAR: &str = "FOLIO_LOG";

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio contact form, skills and theme from the terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a message through the contact relay
    Send {
        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Your email address
        #[arg(long)]
        email: Option<String>,

        /// Message text
        #[arg(long)]
        message: Option<String>,

        /// Relay access key (overrides WEB3FORMS_ACCESS_KEY)
        #[arg(long)]
        access_key: Option<String>,

        /// Never prompt for missing fields
        #[arg(long)]
        no_input: bool,
    },

    /// List skills, optionally filtered by category
    Skills {
        /// Category: all, frontend, backend, or "Cloud & DevOps"
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Show or change the theme preference
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },

    /// Show contact details and social links
    Contact,

    /// Access key management
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the active theme
    Show,
    /// Switch between dark and light
    Toggle,
    /// Set a specific theme
    Set {
        /// dark or light
        theme: Theme,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Report whether an access key is configured
    Status {
        /// Relay access key to check instead of the environment
        #[arg(long)]
        access_key: Option<String>,
    },
    /// Show access key setup instructions
    Setup,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("folio=debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        None | Some(Commands::Contact) => {
            cli::run_contact();
        }
        Some(Commands::Send {
            name,
            email,
            message,
            access_key,
            no_input,
        }) => {
            let args = cli::SendArgs {
                name,
                email,
                message,
                access_key,
                interactive: !no_input,
            };
            let outcome = cli::run_send(args).await?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        Some(Commands::Skills { category }) => {
            cli::run_skills(&category)?;
        }
        Some(Commands::Theme { action }) => {
            let action = match action {
                None | Some(ThemeAction::Show) => cli::ThemeCommand::Show,
                Some(ThemeAction::Toggle) => cli::ThemeCommand::Toggle,
                Some(ThemeAction::Set { theme }) => cli::ThemeCommand::Set(theme),
            };
            cli::run_theme(action)?;
        }
        Some(Commands::Auth { action }) => match action {
            AuthAction::Status { access_key } => cli::run_auth_status(access_key.as_deref()),
            AuthAction::Setup => cli::run_auth_setup(),
        },
    }

    Ok(())
}
