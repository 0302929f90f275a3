//! Implementation of the `changelog-notify validate` command.

use super::load_config;
use crate::cli::ConfigArgs;
use crate::config::NotificationConfig;
use crate::error::Result;
use crate::wiring::NotifyWiring;

/// Execute the `validate` command.
///
/// Runs a full composition so that any synthesis error surfaces here too,
/// then prints a short summary.
pub fn cmd_validate(args: ConfigArgs) -> Result<()> {
    let config = load_config(&args.config)?;
    println!("{}", summarize(&config)?);
    Ok(())
}

pub(crate) fn summarize(config: &NotificationConfig) -> Result<String> {
    let wiring = NotifyWiring::compose(config)?;

    let mode = if wiring.repository().is_existing() {
        "existing (referenced by name)"
    } else {
        "new (declared in template)"
    };
    let changelog = config.changelog_path().unwrap_or("(none, commit messages only)");

    Ok(format!(
        "Config OK\n\
         Repository:  {} [{}]\n\
         Channel:     {}\n\
         Branches:    {}\n\
         Changelog:   {}\n\
         Permissions: {}\n\
         Resources:   {}",
        wiring.repository().name(),
        mode,
        config.channel_name,
        wiring.binding().branches().join(", "),
        changelog,
        wiring.permissions().action_names().join(", "),
        wiring.template().resource_count()
    ))
}
