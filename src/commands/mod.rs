pub mod add;
pub mod delete;
pub mod edit;
pub mod form;
pub mod init;
pub mod list;
pub mod view;

use crate::libs::{error::TaskError, messages::Message};
use crate::msg_error;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure storage locations and create the encryption key")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Edit the task at an index")]
    Edit(edit::EditArgs),
    #[command(about = "Show the details of the task at an index")]
    View(view::ViewArgs),
    #[command(about = "Delete the task at an index")]
    Delete(delete::DeleteArgs),
    #[command(about = "List all tasks")]
    List,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::View(args) => view::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::List => list::cmd(),
        }
    }
}

/// Reports a rejected operation to the user and turns it into `Ok(None)`.
///
/// Validation and index errors leave nothing changed, so the command ends
/// normally after printing them. Any other error is passed on.
pub(crate) fn report<T>(result: Result<T, TaskError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(TaskError::IndexOutOfRange { index, len }) => {
            msg_error!(Message::InvalidTaskIndex(index, len));
            Ok(None)
        }
        Err(e) if e.is_recoverable() => {
            msg_error!(Message::Error(e.to_string()));
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
