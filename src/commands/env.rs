//! Implementation of the `changelog-notify env` command.

use super::load_config;
use crate::cli::EnvArgs;
use crate::error::Result;
use crate::wiring::EnvironmentMap;

/// Execute the `env` command.
pub fn cmd_env(args: EnvArgs) -> Result<()> {
    let config = load_config(&args.config.config)?;
    let environment = EnvironmentMap::project(&config);
    print!("{}", render_env(&environment, args.show_secrets));
    Ok(())
}

/// One `KEY=value` line per variable, in projection order.
pub(crate) fn render_env(environment: &EnvironmentMap, show_secrets: bool) -> String {
    let entries: Vec<(&str, &str)> = if show_secrets {
        environment.iter().collect()
    } else {
        environment.redacted().collect()
    };

    entries
        .into_iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}
