use super::report;
use crate::{
    libs::{config::Config, manager::TaskManager, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Index of the task, as shown by `list`
    index: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut manager = TaskManager::from_config(&Config::read()?)?;

    let Some(task) = report(manager.get(args.index))? else {
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.summary()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    if report(manager.delete(args.index))?.is_some() {
        msg_success!(Message::TaskDeleted);
    }
    Ok(())
}
