//! Configuration management for taskvault.
//!
//! The configuration decides where the key file and the encrypted data file
//! live. It is stored as pretty-printed JSON in `config.json` inside the
//! platform-specific application data directory (see [`DataStorage`]).
//!
//! ## Path resolution
//!
//! File names in [`StorageConfig`] are resolved against the data directory
//! when relative and used as-is when absolute. This lets a user keep the key
//! file on removable media while the data file stays local, for example.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskvault::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//! println!("Tasks are stored in {}", config.data_path()?.display());
//!
//! // Run interactive configuration setup
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default key file name, relative to the data directory.
pub const DEFAULT_KEY_FILE: &str = "secret.key";

/// Default data file name, relative to the data directory.
pub const DEFAULT_DATA_FILE: &str = "tasks.json";

/// Locations of the key file and the encrypted data file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Key file name or absolute path.
    pub key_file: String,

    /// Data file name or absolute path.
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_file: DEFAULT_KEY_FILE.to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

/// Root configuration object.
///
/// Fields missing from the JSON file take their defaults, so an older or
/// hand-trimmed `config.json` still loads.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    /// Directory the storage paths resolve against; never serialized.
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration from the application data directory.
    ///
    /// Returns the default configuration when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit file.
    ///
    /// Relative storage paths will resolve against the file's directory.
    pub fn read_from(path: &Path) -> Result<Config> {
        let mut config = if path.exists() {
            let config_str = fs::read_to_string(path)?;
            serde_json::from_str::<Config>(&config_str)?
        } else {
            Config::default()
        };
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    /// Saves the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Saves the configuration as pretty-printed JSON at `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    ///
    /// The key and data files are left alone; losing the key would make the
    /// data file unreadable.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Runs the interactive setup, seeded with the current configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let default = config.storage.clone();

        msg_print!(Message::ConfigModuleStorage(config.storage().base_path().display().to_string()));
        config.storage = StorageConfig {
            key_file: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptKeyFile.to_string())
                .default(default.key_file)
                .interact_text()?,
            data_file: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDataFile.to_string())
                .default(default.data_file)
                .interact_text()?,
        };

        Ok(config)
    }

    pub fn key_path(&self) -> Result<PathBuf> {
        self.storage().get_path(&self.storage.key_file)
    }

    pub fn data_path(&self) -> Result<PathBuf> {
        self.storage().get_path(&self.storage.data_file)
    }

    fn storage(&self) -> DataStorage {
        match &self.base_dir {
            Some(base_dir) => DataStorage::with_base(base_dir),
            None => DataStorage::new(),
        }
    }
}
