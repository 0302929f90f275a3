//! CLI argument parsing for changelog-notify.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// changelog-notify: compose the resources that post repository changes to Slack.
///
/// Reads a notification config and renders a template declaring:
/// - the CodeCommit repository (or a reference to an existing one)
/// - the notifier function, its role and read-only repository policy
/// - the rule that invokes the function on pushes to tracked branches
#[derive(Parser, Debug)]
#[command(name = "changelog-notify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for changelog-notify.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose the resource graph and print or write the template.
    Synth(SynthArgs),

    /// Load and validate a notification config without rendering anything.
    Validate(ConfigArgs),

    /// Show the environment the notifier function will receive.
    ///
    /// The Slack token is masked unless `--show-secrets` is given.
    Env(EnvArgs),

    /// Write a starter notification config.
    Init(InitArgs),
}

/// Shared `--config` argument.
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Path to the notification config (YAML).
    #[arg(short, long, default_value = "notify.yaml")]
    pub config: PathBuf,
}

/// Arguments for the `synth` command.
#[derive(Parser, Debug)]
pub struct SynthArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Write the template to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Template output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the `env` command.
#[derive(Parser, Debug)]
pub struct EnvArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Print the Slack token instead of masking it.
    #[arg(long)]
    pub show_secrets: bool,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the starter config.
    #[arg(short, long, default_value = "notify.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synth_defaults() {
        let cli = Cli::try_parse_from(["changelog-notify", "synth"]).unwrap();
        match cli.command {
            Command::Synth(args) => {
                assert_eq!(args.config.config, PathBuf::from("notify.yaml"));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.output.is_none());
            }
            other => panic!("expected synth, got {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormat::Text);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn synth_with_all_flags() {
        let cli = Cli::try_parse_from([
            "changelog-notify",
            "synth",
            "--config",
            "ops/notify.yaml",
            "--output",
            "out/template.yaml",
            "--format",
            "yaml",
            "--log-format",
            "json",
            "-vv",
        ])
        .unwrap();
        match cli.command {
            Command::Synth(args) => {
                assert_eq!(args.config.config, PathBuf::from("ops/notify.yaml"));
                assert_eq!(args.output, Some(PathBuf::from("out/template.yaml")));
                assert_eq!(args.format, OutputFormat::Yaml);
            }
            other => panic!("expected synth, got {:?}", other),
        }
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn env_show_secrets_flag() {
        let cli = Cli::try_parse_from(["changelog-notify", "env", "--show-secrets"]).unwrap();
        assert!(matches!(cli.command, Command::Env(EnvArgs { show_secrets: true, .. })));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["changelog-notify", "synth", "--format", "toml"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
