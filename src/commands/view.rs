use super::report;
use crate::{
    libs::{config::Config, manager::TaskManager, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Index of the task, as shown by `list`
    index: usize,
}

pub fn cmd(args: ViewArgs) -> Result<()> {
    let manager = TaskManager::from_config(&Config::read()?)?;

    if let Some(task) = report(manager.get(args.index))? {
        msg_print!(Message::TaskDetailsHeader(args.index), true);
        View::task(task);
    }
    Ok(())
}
