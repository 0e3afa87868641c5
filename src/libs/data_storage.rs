//! Platform-specific application data directory.
//!
//! Key file, data file and configuration all live under one per-user
//! directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\<vendor>\<app>`
//! - **macOS**: `~/Library/Application Support/<vendor>/<app>`
//! - **Linux and others**: `~/.local/share/<vendor>/<app>`

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

pub const VENDOR_NAME: &str = APP_METADATA_OWNER;
pub const APP_NAME: &str = APP_METADATA_NAME;

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    /// Uses `base_path` directly instead of the platform directory.
    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Joins `file_name` onto the base directory, creating the directory if needed.
    ///
    /// An absolute `file_name` is returned unchanged.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        let candidate = Path::new(file_name);
        if candidate.is_absolute() {
            return Ok(candidate.to_path_buf());
        }
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
