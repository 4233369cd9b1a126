//! Persisted client preferences.
//!
//! Only the theme lives here. Preferences never affect server state; a
//! missing or unreadable file just means defaults.

use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub theme: Theme,
}

impl Preferences {
    fn path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join("tasktrack").join("config.toml"))
    }

    /// Load preferences, falling back to defaults on any failure.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => toml::from_str(&raw).unwrap_or_else(|e| {
                eprintln!(
                    "warning: ignoring unreadable preferences at {}: {e}",
                    path.display()
                );
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self) -> Result<(), ClientError> {
        let Some(path) = Self::path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string(self)?)?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preferences_round_trip_through_toml() {
        let prefs = Preferences { theme: Theme::Dark };
        let raw = toml::to_string(&prefs).unwrap();
        let back: Preferences = toml::from_str(&raw).unwrap();
        assert_eq!(back.theme, Theme::Dark);
    }

    #[test]
    fn missing_theme_key_defaults_to_light() {
        let prefs: Preferences = toml::from_str("").unwrap();
        assert_eq!(prefs.theme, Theme::Light);
    }
}
