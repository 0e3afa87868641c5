use super::form::{self, TaskFieldArgs};
use super::report;
use crate::{
    libs::{config::Config, manager::TaskManager, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(flatten)]
    fields: TaskFieldArgs,
}

/// Adds a task, prompting for any field not given as a flag.
pub fn cmd(args: AddArgs) -> Result<()> {
    let mut manager = TaskManager::from_config(&Config::read()?)?;
    let task = form::complete(args.fields.into(), None)?;

    if report(manager.add(task))?.is_some() {
        msg_success!(Message::TaskAdded);
    }
    Ok(())
}
