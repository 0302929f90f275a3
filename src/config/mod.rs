//! Notification configuration for changelog-notify.
//!
//! This module defines the `NotificationConfig` struct read from a YAML file.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! camelCase aliases for every option, per-field defaults, and validation of
//! the required fields before any resource graph is composed.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::NotificationConfig;
pub use types::{
    ACCOUNT_ENV_VAR, ChangeCategory, DEFAULT_CONSTRUCT_ID, DEFAULT_TRACKING_BRANCH,
    DeploymentSettings, FunctionCodeLocation, REGION_ENV_VAR,
};
