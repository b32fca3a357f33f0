//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::songbook::{DATA_DIR_NAME, FILE_NAME};
use crate::error::{Error, Result};
use crate::services::validation::validate_semitones;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// JSON songbook to seed the library from
    pub songbook_path: Option<PathBuf>,
    /// Offset used by the CLI when none is given
    pub default_semitones: i32,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            songbook_path: None,
            default_semitones: 0,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_vars(
            env::var("CHORDBOOK_LIBRARY").ok().as_deref(),
            env::var("CHORDBOOK_DEFAULT_SEMITONES").ok().as_deref(),
        )
    }

    /// Build a configuration from raw variable values.
    fn from_vars(library: Option<&str>, default_semitones: Option<&str>) -> Result<Self> {
        let mut config = Self::default();

        // Songbook path: env var override, or the platform data dir if a songbook exists there
        config.songbook_path = match library {
            Some(path) => {
                let p = PathBuf::from(shellexpand::tilde(path).to_string());
                if !p.is_file() {
                    return Err(Error::config(
                        format!("songbook {} does not exist", p.display()),
                        "Point CHORDBOOK_LIBRARY at a JSON songbook file or unset it",
                    ));
                }
                Some(p)
            }
            None => default_songbook_path().filter(|p| p.is_file()),
        };

        if let Some(raw) = default_semitones {
            config.default_semitones = raw
                .trim()
                .parse::<i32>()
                .ok()
                .filter(|n| validate_semitones(*n).is_ok())
                .ok_or_else(|| {
                    Error::config(
                        format!("invalid CHORDBOOK_DEFAULT_SEMITONES value {raw:?}"),
                        "Use a whole number between -11 and 11",
                    )
                })?;
        }

        Ok(config)
    }
}

/// Default songbook location under the platform data directory.
pub fn default_songbook_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(DATA_DIR_NAME).join(FILE_NAME))
}
