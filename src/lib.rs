//! changelog-notify: composes the resources that turn repository pushes into
//! Slack changelog notifications.
//!
//! The library's entry point is [`wiring::NotifyWiring::compose`], which takes
//! a validated [`config::NotificationConfig`] and produces a
//! [`template::Template`] declaring the repository (or a reference to it), the
//! notifier function and its role, a read-only repository policy, and the
//! event rule that invokes the function.
//!
//! ```no_run
//! use changelog_notify::config::NotificationConfig;
//! use changelog_notify::wiring::NotifyWiring;
//!
//! let config = NotificationConfig::new("test-repo", "releases", "xoxb-token")
//!     .with_changelog_path("CHANGELOG.md");
//! let wiring = NotifyWiring::compose(&config)?;
//! println!("{}", wiring.template().to_json_pretty()?);
//! # Ok::<(), changelog_notify::error::NotifyError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod telemetry;
pub mod template;
pub mod wiring;

#[cfg(test)]
mod test_support;
