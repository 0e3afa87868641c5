//! Configuration initialization command.
//!
//! Runs the storage setup wizard and then makes sure an encryption key exists
//! at the configured location, so the first `add` does not have to.

use crate::{
    libs::{config::Config, messages::Message, secret::KeyFile},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    ///
    /// The key file and data file are kept.
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        if Config::delete()? {
            msg_success!(Message::ConfigDeleted);
        } else {
            msg_info!(Message::ConfigNotFound);
        }
        return Ok(());
    }

    let config = Config::init()?;
    config.save()?;
    msg_success!(Message::ConfigSaved);

    let key_path = config.key_path()?;
    let display_path = key_path.display().to_string();
    if KeyFile::ensure(&key_path)? {
        msg_success!(Message::KeyGenerated(display_path));
    } else {
        msg_info!(Message::KeyExists(display_path));
    }
    Ok(())
}
