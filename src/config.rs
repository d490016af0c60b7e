//! Configuration Management Module for Pushy
//!
//! This module handles all configuration-related functionality, including
//! - Reading the settings file and falling back to built-in defaults
//! - Creating the initial configuration file (`pushy init`)
//! - Handling configuration errors
//!
//! # Configuration Structure
//!
//! The configuration is stored in TOML format at `~/.config/pushy/config.toml`
//! and contains
//! - `locations` - subproject paths offered by the location menu
//! - `commit_types` - tags offered by the commit-type menu
//! - `default_message` - commit message used when the operator enters nothing
//!
//! Every key is optional; a missing file or missing key falls back to the
//! defaults below.

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    errors::{ConfigError, Result},
    utils::print_error,
};

/// Subproject locations offered when no configuration file overrides them,
/// relative to the workspace root.
pub const DEFAULT_LOCATIONS: [&str; 4] = [
    ".",
    "apps/frontend/AngularApp",
    "apps/backend/RailsApp",
    "apps/backend/FlaskApp",
];

/// Commit-type tags offered when no configuration file overrides them.
pub const DEFAULT_COMMIT_TYPES: [&str; 7] = [
    "UPDATE",
    "CHECKPOINT",
    "FIX",
    "PATCH",
    "BUG",
    "MERGE",
    "COMPLEX MERGE",
];

/// Commit message used when the operator submits an empty line.
pub const DEFAULT_COMMIT_MESSAGE: &str = "additional work";

/// Operator-tunable settings, as stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub locations: Vec<String>,
    pub commit_types: Vec<String>,
    pub default_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locations: DEFAULT_LOCATIONS.iter().map(ToString::to_string).collect(),
            commit_types: DEFAULT_COMMIT_TYPES
                .iter()
                .map(ToString::to_string)
                .collect(),
            default_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Main configuration struct that handles all config operations
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Creates a new Config instance rooted at the home directory.
    ///
    /// # Errors
    /// * When the home directory cannot be determined
    pub fn new() -> Result<Self> {
        let root = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Config { root })
    }

    /// Creates a new Config instance with a custom root path
    ///
    /// # Arguments
    /// * `root` - The custom root path
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Loads the settings, falling back to the defaults when the
    /// configuration file does not exist.
    ///
    /// # Errors
    /// * If the configuration file exists but cannot be read
    /// * If the configuration file is not valid TOML
    pub fn load(&self) -> Result<Settings> {
        let config_file = self.config_file_path();

        if !config_file.exists() {
            return Ok(Settings::default());
        }

        let config_content = fs::read_to_string(&config_file).map_err(ConfigError::from)?;
        let settings = toml::from_str(&config_content).map_err(ConfigError::from)?;

        Ok(settings)
    }

    /// Creates a new configuration file populated with the defaults.
    ///
    /// # Errors
    /// * If an I/O error occurs while creating the configuration file
    /// * If the file already exists
    pub fn create_config_file(&self) -> Result<()> {
        let config_folder = self.config_folder_path();

        if !config_folder.exists() {
            fs::create_dir_all(&config_folder).map_err(ConfigError::from)?;
        }

        let config_file = self.config_file_path();

        if config_file.exists() {
            if !cfg!(test) {
                print_error(
                    "Configuration file already exists",
                    &format!(
                        "A configuration file already exists at {}",
                        config_file.display()
                    ),
                );
            }

            return Err(ConfigError::ConfigAlreadyExists.into());
        }

        let config_content =
            toml::to_string_pretty(&Settings::default()).map_err(ConfigError::from)?;
        fs::write(&config_file, config_content).map_err(ConfigError::from)?;

        Ok(())
    }

    /// Returns the path to the configuration folder.
    #[must_use]
    pub fn config_folder_path(&self) -> PathBuf {
        self.root.join(".config").join("pushy")
    }

    /// Returns the path to the configuration file.
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.config_folder_path().join("config.toml")
    }
}
