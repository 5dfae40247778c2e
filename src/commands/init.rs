//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard for the monitor timing parameters
//! and the storage directories.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

/// Executes the initialization command.
pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
