//! Config loading, validation, and resolved accessors.

use super::model::NotificationConfig;
use super::types::{ACCOUNT_ENV_VAR, ChangeCategory, REGION_ENV_VAR, default_tracking_branches};
use crate::error::{NotifyError, Result};
use secrecy::ExposeSecret;
use std::borrow::Cow;
use std::path::Path;

impl NotificationConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(NotificationConfig)` - Successfully loaded and validated config
    /// * `Err(NotifyError::UserError)` - The file could not be read
    /// * `Err(NotifyError::InvalidConfig)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            NotifyError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: NotificationConfig = serde_yaml::from_str(yaml)
            .map_err(|e| NotifyError::InvalidConfig(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `repository_name`, `channel_name` and `slack_token` must be non-empty
    /// - `tracking_branches`, when supplied, must be non-empty with no empty names
    /// - `deployment.construct_id` must be non-empty
    /// - `function_code`, when supplied, must name a bucket and a key
    ///
    /// Whether the repository exists is not checked here.
    pub fn validate(&self) -> Result<()> {
        require("repository_name", &self.repository_name)?;
        require("channel_name", &self.channel_name)?;
        require("slack_token", self.slack_token.expose_secret())?;

        if let Some(branches) = &self.tracking_branches {
            if branches.is_empty() {
                return Err(NotifyError::InvalidConfig(
                    "tracking_branches must list at least one branch (omit it to track master)"
                        .to_string(),
                ));
            }
            if branches.iter().any(|b| b.trim().is_empty()) {
                return Err(NotifyError::InvalidConfig(
                    "tracking_branches entries must be non-empty".to_string(),
                ));
            }
        }

        require("deployment.construct_id", &self.deployment.construct_id)?;

        if let Some(code) = &self.function_code {
            require("function_code.s3_bucket", &code.s3_bucket)?;
            require("function_code.s3_key", &code.s3_key)?;
        }

        Ok(())
    }

    /// Fill unset `deployment.account`/`deployment.region` from the environment.
    pub fn apply_env_defaults(&mut self) {
        if self.deployment.account.is_none() {
            self.deployment.account = non_empty_env(ACCOUNT_ENV_VAR);
        }
        if self.deployment.region.is_none() {
            self.deployment.region = non_empty_env(REGION_ENV_VAR);
        }
    }

    /// Display name for a category: the override when non-empty, else the default label.
    pub fn display_name(&self, category: ChangeCategory) -> &str {
        let configured = match category {
            ChangeCategory::Feature => &self.feature_type_display_name,
            ChangeCategory::Fix => &self.fix_type_display_name,
            ChangeCategory::Performance => &self.performance_type_display_name,
            ChangeCategory::BreakingChange => &self.breaking_change_type_display_name,
            ChangeCategory::Undefined => &self.undefined_type_display_name,
        };
        configured
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| category.default_display_name())
    }

    /// Branches filtered by the event binding, defaulting to `["master"]`.
    pub fn tracking_branches(&self) -> Cow<'_, [String]> {
        match &self.tracking_branches {
            Some(branches) => Cow::Borrowed(branches.as_slice()),
            None => Cow::Owned(default_tracking_branches()),
        }
    }

    /// The changelog path, if one was supplied. An empty path counts as unset.
    pub fn changelog_path(&self) -> Option<&str> {
        self.changelog_path.as_deref().filter(|p| !p.is_empty())
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NotifyError::InvalidConfig(format!("{} is required", field)));
    }
    Ok(())
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
