//! Core library modules for taskvault.
//!
//! ## Modules
//!
//! - **Storage**: `data_storage` (per-user directory), `config` (file locations)
//! - **Security**: `secret` (key file and cipher)
//! - **Tasks**: `task` (record), `validate` (field rules), `manager` (encrypted store)
//! - **Presentation**: `messages` (user-facing text and output macros), `view` (tables)
//! - **Errors**: `error`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskvault::libs::config::Config;
//! use taskvault::libs::manager::TaskManager;
//! use taskvault::libs::task::Task;
//!
//! let mut manager = TaskManager::from_config(&Config::read()?)?;
//! manager.add(Task::new("Buy milk", "2024-01-15", "Semi skimmed", "Low", "Open"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod manager;
pub mod messages;
pub mod secret;
pub mod task;
pub mod validate;
pub mod view;
