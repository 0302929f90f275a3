//! Command implementations for changelog-notify.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod env;
mod init;
mod synth;
mod validate_cmd;

use crate::cli::Command;
use crate::config::NotificationConfig;
use crate::error::Result;
use std::path::Path;
use tracing::debug;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Synth(args) => synth::cmd_synth(args),
        Command::Validate(args) => validate_cmd::cmd_validate(args),
        Command::Env(args) => env::cmd_env(args),
        Command::Init(args) => init::cmd_init(args),
    }
}

/// Load a config file and fill deployment defaults from the environment.
fn load_config(path: &Path) -> Result<NotificationConfig> {
    let mut config = NotificationConfig::load(path)?;
    config.apply_env_defaults();
    debug!(config = %path.display(), "loaded notification config");
    Ok(config)
}
