//! Configuration types and defaults for changelog-notify.
//!
//! This module defines the change categories, their default display names,
//! and the optional deployment and function-code sections.

use serde::{Deserialize, Serialize};

/// Branch tracked when `tracking_branches` is not supplied.
pub const DEFAULT_TRACKING_BRANCH: &str = "master";

/// Construct ID used as the root of every logical ID path.
pub const DEFAULT_CONSTRUCT_ID: &str = "changelogSlackNotify";

/// Environment variable consulted when `deployment.account` is unset.
pub const ACCOUNT_ENV_VAR: &str = "CDK_DEFAULT_ACCOUNT";

/// Environment variable consulted when `deployment.region` is unset.
pub const REGION_ENV_VAR: &str = "CDK_DEFAULT_REGION";

/// Change categories rendered in the notification message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeCategory {
    Feature,
    Fix,
    Performance,
    BreakingChange,
    Undefined,
}

impl ChangeCategory {
    /// All categories, in the order their keys appear in the environment map.
    pub const ALL: [ChangeCategory; 5] = [
        ChangeCategory::Feature,
        ChangeCategory::Fix,
        ChangeCategory::Performance,
        ChangeCategory::BreakingChange,
        ChangeCategory::Undefined,
    ];

    /// Environment key holding this category's display name.
    pub fn env_key(self) -> &'static str {
        match self {
            ChangeCategory::Feature => "FEATURE_TYPE_DISPLAY_NAME",
            ChangeCategory::Fix => "FIX_TYPE_DISPLAY_NAME",
            ChangeCategory::Performance => "PERFORMANCE_TYPE_DISPLAY_NAME",
            ChangeCategory::BreakingChange => "BREAKING_CHANGE_TYPE_DISPLAY_NAME",
            ChangeCategory::Undefined => "UNDEFINED_TYPE_DISPLAY_NAME",
        }
    }

    /// Label used when no override is configured.
    pub fn default_display_name(self) -> &'static str {
        match self {
            ChangeCategory::Feature => "New Features",
            ChangeCategory::Fix => "Bugs Fixed",
            ChangeCategory::Performance => "Performance Improvement",
            ChangeCategory::BreakingChange => "BREAKING CHANGES",
            ChangeCategory::Undefined => "Others",
        }
    }
}

impl std::fmt::Display for ChangeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeCategory::Feature => write!(f, "feature"),
            ChangeCategory::Fix => write!(f, "fix"),
            ChangeCategory::Performance => write!(f, "performance"),
            ChangeCategory::BreakingChange => write!(f, "breaking"),
            ChangeCategory::Undefined => write!(f, "undefined"),
        }
    }
}

/// Where the composed graph is deployed and how it is named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentSettings {
    /// Root of every logical ID path (default: "changelogSlackNotify").
    #[serde(alias = "constructId")]
    pub construct_id: String,

    /// Optional template description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Target account. Falls back to `CDK_DEFAULT_ACCOUNT`, then to a pseudo parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,

    /// Target region. Falls back to `CDK_DEFAULT_REGION`, then to a pseudo parameter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            construct_id: default_construct_id(),
            description: None,
            account: None,
            region: None,
        }
    }
}

/// Pre-uploaded location of the notifier function package.
///
/// When absent, the template declares bucket/key parameters instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCodeLocation {
    #[serde(alias = "s3Bucket")]
    pub s3_bucket: String,
    #[serde(alias = "s3Key")]
    pub s3_key: String,
}

// Default value functions for serde
pub(crate) fn default_construct_id() -> String {
    DEFAULT_CONSTRUCT_ID.to_string()
}

pub(crate) fn default_tracking_branches() -> Vec<String> {
    vec![DEFAULT_TRACKING_BRANCH.to_string()]
}
