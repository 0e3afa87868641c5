use crate::{
    libs::{config::Config, manager::TaskManager, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let manager = TaskManager::from_config(&Config::read()?)?;

    if manager.is_empty() {
        msg_info!(Message::TasksNotFound(manager.data_path().display().to_string()));
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(manager.tasks());
    Ok(())
}
