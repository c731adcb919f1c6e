//! Theme preference persistence
//!
//! A single stored flag in `preferences.json`. When nothing is stored the
//! theme defaults to dark and that default is written back.

use crate::error::Result;
use crate::types::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name inside the preferences directory
pub const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: Option<String>,
}

/// Reads and writes the stored theme
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store backed by `<dir>/preferences.json`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(PREFERENCES_FILE),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored theme, without writing anything
    ///
    /// Values other than `dark` resolve to light, as the page did.
    pub fn stored(&self) -> Result<Option<Theme>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let prefs: Preferences = match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Ignoring unreadable {}: {e}", self.path.display());
                return Ok(None);
            }
        };

        Ok(prefs.theme.map(|value| {
            if value == Theme::Dark.as_str() {
                Theme::Dark
            } else {
                Theme::Light
            }
        }))
    }

    /// Active theme; persists the dark default when nothing is stored
    pub fn load(&self) -> Result<Theme> {
        if let Some(theme) = self.stored()? {
            return Ok(theme);
        }

        debug!("No stored theme, defaulting to {}", Theme::default());
        let theme = Theme::default();
        self.save(theme)?;
        Ok(theme)
    }

    /// Persist `theme`
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let prefs = Preferences {
            theme: Some(theme.as_str().to_string()),
        };
        fs::write(&self.path, serde_json::to_string_pretty(&prefs)?)?;
        debug!("Stored theme {theme} in {}", self.path.display());
        Ok(())
    }

    /// Flip the active theme and persist it
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_to_dark_and_persists() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::in_dir(dir.path());

        assert_eq!(store.stored().unwrap(), None);
        assert_eq!(store.load().unwrap(), Theme::Dark);
        assert_eq!(store.stored().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_toggle_round_trips_through_disk() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::in_dir(dir.path());

        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(ThemeStore::in_dir(dir.path()).load().unwrap(), Theme::Light);
        assert_eq!(store.toggle().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_unknown_stored_value_is_light() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), r#"{"theme": "sepia"}"#).unwrap();

        assert_eq!(ThemeStore::in_dir(dir.path()).load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_corrupt_file_resets_to_default() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILE), "not json").unwrap();

        let store = ThemeStore::in_dir(dir.path());
        assert_eq!(store.load().unwrap(), Theme::Dark);
        assert_eq!(store.stored().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let store = ThemeStore::in_dir(dir.path().join("nested").join("folio"));

        store.save(Theme::Light).unwrap();
        assert!(store.path().exists());
    }
}
