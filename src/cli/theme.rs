//! Theme command - show, toggle or set the stored theme

use crate::cli::style::{check, Stylize};
use anstream::println;
use folio::config::preferences_dir;
use folio::error::Result;
use folio::theme::ThemeStore;
use folio::types::Theme;

/// Theme subcommand
pub enum ThemeCommand {
    /// Print the active theme
    Show,
    /// Flip dark/light
    Toggle,
    /// Store a specific theme
    Set(Theme),
}

/// Run the theme command
pub fn run_theme(command: ThemeCommand) -> Result<()> {
    let store = ThemeStore::in_dir(preferences_dir()?);

    match command {
        ThemeCommand::Show => {
            let theme = store.load()?;
            println!("Theme: {}", theme.accent());
            println!("{}", store.path().display().muted());
        }
        ThemeCommand::Toggle => {
            let theme = store.toggle()?;
            println!("{} Switched to {} mode", check(), theme.accent());
        }
        ThemeCommand::Set(theme) => {
            store.save(theme)?;
            println!("{} Theme set to {}", check(), theme.accent());
        }
    }

    Ok(())
}
