//! # Taskvault - encrypted single-user task list
//!
//! A command-line utility for keeping a personal list of tasks in an
//! encrypted file.
//!
//! ## Features
//!
//! - **Task Management**: Add, edit, view and delete task records
//! - **Validation**: Letters-only text fields and `YYYY-MM-DD` dates
//! - **Encryption at Rest**: The whole collection is stored as one AES-256 token
//! - **Key Management**: A key is generated on first run and reused afterwards
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskvault::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
