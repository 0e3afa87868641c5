//! Persistent, encrypted task collection.
//!
//! [`TaskManager`] owns the in-memory list and mirrors it to the data file
//! after every mutation. The file always holds the whole collection as one
//! encrypted token; there is no partial persistence.
//!
//! ## Operation semantics
//!
//! - **add**: validate, append, save
//! - **edit**: validate, bounds-check, replace, save
//! - **delete**: bounds-check, remove, save
//!
//! A rejected operation leaves both the list and the file untouched. If the
//! save itself fails the in-memory change is reverted before the error is
//! returned, so memory never runs ahead of disk.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskvault::libs::manager::TaskManager;
//! use taskvault::libs::task::Task;
//! use std::path::Path;
//!
//! let mut manager = TaskManager::open(Path::new("secret.key"), Path::new("tasks.json"))?;
//! manager.add(Task::new("Write report", "2024-01-15", "Quarterly numbers", "High", "Open"))?;
//! # Ok::<(), taskvault::libs::error::TaskError>(())
//! ```

use super::config::Config;
use super::error::TaskError;
use super::secret::{Cipher, KeyFile};
use super::task::Task;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct TaskManager {
    cipher: Cipher,
    data_path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskManager {
    /// Ensures the key exists, loads it, and loads the collection from `data_path`.
    pub fn open(key_path: &Path, data_path: &Path) -> Result<Self, TaskError> {
        KeyFile::ensure(key_path)?;
        let cipher = Cipher::new(&KeyFile::load(key_path)?)?;
        let tasks = Self::load(&cipher, data_path)?;

        debug!(path = %data_path.display(), count = tasks.len(), "loaded tasks");
        Ok(Self {
            cipher,
            data_path: data_path.to_path_buf(),
            tasks,
        })
    }

    /// Opens the key and data files named by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let key_path = config.key_path()?;
        let data_path = config.data_path()?;
        Ok(Self::open(&key_path, &data_path)?)
    }

    /// Reads the collection; a missing or blank file is an empty collection.
    pub fn load(cipher: &Cipher, data_path: &Path) -> Result<Vec<Task>, TaskError> {
        if !data_path.exists() {
            return Ok(Vec::new());
        }
        let encrypted = fs::read(data_path)?;
        if encrypted.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        decode_tasks(cipher, &encrypted)
    }

    /// Writes the whole collection, replacing the data file via a temp file.
    fn save(&self) -> Result<(), TaskError> {
        let encrypted = encode_tasks(&self.cipher, &self.tasks)?;

        if let Some(parent) = self.data_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.data_path.with_extension("tmp");
        fs::write(&tmp_path, encrypted)?;
        fs::rename(&tmp_path, &self.data_path)?;

        debug!(path = %self.data_path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn get(&self, index: usize) -> Result<&Task, TaskError> {
        self.tasks.get(index).ok_or(TaskError::IndexOutOfRange {
            index,
            len: self.tasks.len(),
        })
    }

    pub fn add(&mut self, task: Task) -> Result<(), TaskError> {
        task.validate()?;

        self.tasks.push(task);
        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Replaces the task at `index`. Fields are validated before the index.
    pub fn edit(&mut self, index: usize, task: Task) -> Result<(), TaskError> {
        task.validate()?;
        self.check_index(index)?;

        let previous = std::mem::replace(&mut self.tasks[index], task);
        if let Err(e) = self.save() {
            self.tasks[index] = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Removes and returns the task at `index`.
    pub fn delete(&mut self, index: usize) -> Result<Task, TaskError> {
        self.check_index(index)?;

        let removed = self.tasks.remove(index);
        if let Err(e) = self.save() {
            self.tasks.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    fn check_index(&self, index: usize) -> Result<(), TaskError> {
        if index < self.tasks.len() {
            Ok(())
        } else {
            Err(TaskError::IndexOutOfRange {
                index,
                len: self.tasks.len(),
            })
        }
    }
}

/// Serializes `tasks` to JSON and encrypts the result.
pub fn encode_tasks(cipher: &Cipher, tasks: &[Task]) -> Result<Vec<u8>, TaskError> {
    let json = serde_json::to_vec(tasks)?;
    cipher.encrypt(&json)
}

/// Decrypts `encrypted` and parses it as a task collection.
pub fn decode_tasks(cipher: &Cipher, encrypted: &[u8]) -> Result<Vec<Task>, TaskError> {
    let json = cipher.decrypt(encrypted)?;
    Ok(serde_json::from_slice(&json)?)
}
