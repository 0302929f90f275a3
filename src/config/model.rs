//! NotificationConfig struct definition and builder.

use super::types::*;
use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

/// Input to the composition pass.
///
/// This struct represents the contents of the notification YAML file.
/// Unknown fields in the YAML are ignored for forward compatibility.
/// Required fields default to empty here and are rejected by
/// [`NotificationConfig::validate`], so a missing field surfaces as an
/// invalid-configuration error instead of a parse error.
#[derive(Debug, Deserialize)]
pub struct NotificationConfig {
    // =========================================================================
    // Required settings
    // =========================================================================
    /// Repository to track (created, or referenced by name).
    #[serde(default, alias = "repositoryName")]
    pub repository_name: String,

    /// Slack channel the notifier posts to.
    #[serde(default, alias = "channelName")]
    pub channel_name: String,

    /// Slack token, passed to the notifier's environment unmodified.
    #[serde(
        default = "empty_secret",
        alias = "slackToken",
        deserialize_with = "deserialize_secret"
    )]
    pub slack_token: SecretString,

    // =========================================================================
    // Tracking settings
    // =========================================================================
    /// Branches whose pushes trigger a notification (default: ["master"]).
    #[serde(default, alias = "trackingBranches")]
    pub tracking_branches: Option<Vec<String>>,

    /// Path of the changelog file inside the repository.
    #[serde(default, alias = "changelogPath")]
    pub changelog_path: Option<String>,

    /// Reference an existing repository by name instead of creating one.
    #[serde(default, alias = "fromExistRepository")]
    pub from_exist_repository: bool,

    // =========================================================================
    // Display name overrides
    // =========================================================================
    #[serde(default, alias = "featureTypeDisplayName")]
    pub feature_type_display_name: Option<String>,

    #[serde(default, alias = "fixTypeDisplayName")]
    pub fix_type_display_name: Option<String>,

    #[serde(default, alias = "performanceTypeDisplayName")]
    pub performance_type_display_name: Option<String>,

    #[serde(default, alias = "breakingChangeTypeDisplayName")]
    pub breaking_change_type_display_name: Option<String>,

    #[serde(default, alias = "undefinedTypeDisplayName")]
    pub undefined_type_display_name: Option<String>,

    // =========================================================================
    // Deployment settings
    // =========================================================================
    #[serde(default)]
    pub deployment: DeploymentSettings,

    #[serde(default, alias = "functionCode")]
    pub function_code: Option<FunctionCodeLocation>,
}

impl NotificationConfig {
    /// Create a config with the three required fields and every option unset.
    pub fn new(
        repository_name: impl Into<String>,
        channel_name: impl Into<String>,
        slack_token: impl Into<String>,
    ) -> Self {
        Self {
            repository_name: repository_name.into(),
            channel_name: channel_name.into(),
            slack_token: SecretString::from(slack_token.into()),
            tracking_branches: None,
            changelog_path: None,
            from_exist_repository: false,
            feature_type_display_name: None,
            fix_type_display_name: None,
            performance_type_display_name: None,
            breaking_change_type_display_name: None,
            undefined_type_display_name: None,
            deployment: DeploymentSettings::default(),
            function_code: None,
        }
    }

    pub fn with_tracking_branches<I, S>(mut self, branches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracking_branches = Some(branches.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_changelog_path(mut self, path: impl Into<String>) -> Self {
        self.changelog_path = Some(path.into());
        self
    }

    pub fn with_display_name(mut self, category: ChangeCategory, name: impl Into<String>) -> Self {
        *self.display_name_slot(category) = Some(name.into());
        self
    }

    pub fn from_existing_repository(mut self, existing: bool) -> Self {
        self.from_exist_repository = existing;
        self
    }

    pub fn with_deployment(mut self, deployment: DeploymentSettings) -> Self {
        self.deployment = deployment;
        self
    }

    pub fn with_function_code(mut self, s3_bucket: impl Into<String>, s3_key: impl Into<String>) -> Self {
        self.function_code = Some(FunctionCodeLocation {
            s3_bucket: s3_bucket.into(),
            s3_key: s3_key.into(),
        });
        self
    }

    fn display_name_slot(&mut self, category: ChangeCategory) -> &mut Option<String> {
        match category {
            ChangeCategory::Feature => &mut self.feature_type_display_name,
            ChangeCategory::Fix => &mut self.fix_type_display_name,
            ChangeCategory::Performance => &mut self.performance_type_display_name,
            ChangeCategory::BreakingChange => &mut self.breaking_change_type_display_name,
            ChangeCategory::Undefined => &mut self.undefined_type_display_name,
        }
    }
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(SecretString::from(value.unwrap_or_default()))
}
