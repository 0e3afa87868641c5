//! Task editing command.
//!
//! Two modes:
//!
//! - **Interactive** (no field flags): every field is prompted for, pre-filled
//!   with the current value. Clearing any field aborts the edit.
//! - **Flags**: fields given on the command line replace the current values;
//!   the rest are kept.
//!
//! The index is checked before prompting so the user is not asked for five
//! values only to be told the task does not exist.

use super::form::{self, TaskFieldArgs};
use super::report;
use crate::{
    libs::{config::Config, manager::TaskManager, messages::Message, task::TaskFields},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Index of the task, as shown by `list`
    index: usize,

    #[command(flatten)]
    fields: TaskFieldArgs,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut manager = TaskManager::from_config(&Config::read()?)?;

    let Some(current) = report(manager.get(args.index))?.cloned() else {
        return Ok(());
    };

    let fields: TaskFields = args.fields.into();
    let task = if fields.is_empty() {
        let task = form::complete(fields, Some(&current))?;
        if [&task.name, &task.date, &task.description, &task.priority, &task.status]
            .iter()
            .any(|value| value.is_empty())
        {
            msg_warning!(Message::TaskEditNoInput);
            return Ok(());
        }
        task
    } else {
        fields.merge_onto(&current)
    };

    if report(manager.edit(args.index, task))?.is_some() {
        msg_success!(Message::TaskUpdated);
    }
    Ok(())
}
