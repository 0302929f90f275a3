//! Projection of the notification config into the notifier's environment.

use crate::config::{ChangeCategory, NotificationConfig};
use indexmap::IndexMap;
use secrecy::ExposeSecret;
use tracing::debug;

pub const CHANNEL_NAME_KEY: &str = "CHANNEL_NAME";
pub const SLACK_TOKEN_KEY: &str = "SLACK_TOKEN";
pub const CHANGELOG_PATH_KEY: &str = "CHANGELOG_PATH";

const REDACTED: &str = "[REDACTED]";

/// Ordered environment variables handed to the notifier function.
///
/// The five display-name keys are always present. `CHANGELOG_PATH` is present
/// only when a changelog path was configured; it is never written as an
/// empty string.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvironmentMap {
    variables: IndexMap<String, String>,
}

impl EnvironmentMap {
    pub fn project(config: &NotificationConfig) -> Self {
        let mut variables = IndexMap::new();

        for category in ChangeCategory::ALL {
            variables.insert(
                category.env_key().to_string(),
                config.display_name(category).to_string(),
            );
        }
        variables.insert(CHANNEL_NAME_KEY.to_string(), config.channel_name.clone());
        variables.insert(
            SLACK_TOKEN_KEY.to_string(),
            config.slack_token.expose_secret().to_string(),
        );
        if let Some(path) = config.changelog_path() {
            variables.insert(CHANGELOG_PATH_KEY.to_string(), path.to_string());
        }

        debug!(
            keys = ?variables.keys().collect::<Vec<_>>(),
            "projected function environment"
        );
        Self { variables }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries with the token value masked.
    pub fn redacted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().map(|(key, value)| {
            if key == SLACK_TOKEN_KEY {
                (key, REDACTED)
            } else {
                (key, value)
            }
        })
    }

    pub fn variables(&self) -> &IndexMap<String, String> {
        &self.variables
    }
}

impl std::fmt::Debug for EnvironmentMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.redacted()).finish()
    }
}
