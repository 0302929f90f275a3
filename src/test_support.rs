use crate::config::{ACCOUNT_ENV_VAR, NotificationConfig, REGION_ENV_VAR};
use crate::template::Template;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

pub(crate) const TEST_REPOSITORY: &str = "test-repo";
pub(crate) const TEST_CHANNEL: &str = "slack-channel-name";
pub(crate) const TEST_TOKEN: &str = "slack-token";

pub(crate) const MINIMAL_YAML: &str = r#"
repository_name: test-repo
channel_name: slack-channel-name
slack_token: slack-token
"#;

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Clears the deployment env vars for the guard's lifetime and restores them on drop.
pub(crate) struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub(crate) fn clean() -> Self {
        // Process environment is global. Lock it so tests don't race even if a
        // #[serial] annotation is missed.
        let lock = ENV_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let saved = [ACCOUNT_ENV_VAR, REGION_ENV_VAR]
            .into_iter()
            .map(|name| (name, std::env::var(name).ok()))
            .collect();
        for name in [ACCOUNT_ENV_VAR, REGION_ENV_VAR] {
            unsafe { std::env::remove_var(name) };
        }
        Self { saved, _lock: lock }
    }

    pub(crate) fn set(&self, name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) };
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(v) => unsafe { std::env::set_var(name, v) },
                None => unsafe { std::env::remove_var(name) },
            }
        }
    }
}

/// The config used by the default end-to-end scenario.
pub(crate) fn test_config() -> NotificationConfig {
    NotificationConfig::new(TEST_REPOSITORY, TEST_CHANNEL, TEST_TOKEN)
}

pub(crate) fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("notify.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

pub(crate) fn config_dir(yaml: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(temp_dir.path(), yaml);
    (temp_dir, path)
}

pub(crate) fn template_json(template: &Template) -> Value {
    serde_json::to_value(template).unwrap()
}

/// The single resource of `resource_type`, as `(logical_id, resource)`.
pub(crate) fn single_resource<'a>(template: &'a Value, resource_type: &str) -> (&'a str, &'a Value) {
    let matches: Vec<(&str, &Value)> = template["Resources"]
        .as_object()
        .unwrap()
        .iter()
        .filter(|(_, r)| r["Type"] == resource_type)
        .map(|(id, r)| (id.as_str(), r))
        .collect();
    assert_eq!(
        matches.len(),
        1,
        "expected exactly one {} resource",
        resource_type
    );
    matches[0]
}

pub(crate) fn count_resources(template: &Value, resource_type: &str) -> usize {
    template["Resources"]
        .as_object()
        .unwrap()
        .values()
        .filter(|r| r["Type"] == resource_type)
        .count()
}
