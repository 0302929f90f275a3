//! Deterministic logical IDs derived from construct paths.
//!
//! A path such as `["changelogSlackNotify", "Repository", "Resource"]` becomes
//! `changelogSlackNotifyRepository` followed by an 8-character digest of the
//! full path, so two constructs with the same human-readable name but
//! different paths never collide.

use regex::Regex;
use md5::{Digest, Md5};
use std::sync::LazyLock;

/// Path components omitted from the human-readable part of the ID.
const HIDDEN_COMPONENTS: &[&str] = &["Resource", "Default"];

/// Length of the digest suffix.
const HASH_LEN: usize = 8;

/// Maximum length of a logical ID.
const MAX_LOGICAL_ID_LEN: usize = 255;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("Invalid logical id regex"));

/// Compute the logical ID for a construct path.
pub fn logical_id<S: AsRef<str>>(path: &[S]) -> String {
    let components: Vec<&str> = path.iter().map(AsRef::as_ref).collect();

    let mut human: Vec<String> = Vec::new();
    for component in &components {
        if HIDDEN_COMPONENTS.contains(component) {
            continue;
        }
        let cleaned = NON_ALPHANUMERIC.replace_all(component, "").into_owned();
        if human.last() == Some(&cleaned) {
            continue;
        }
        human.push(cleaned);
    }

    let mut human = human.concat();
    human.truncate(MAX_LOGICAL_ID_LEN - HASH_LEN);

    format!("{}{}", human, path_hash(&components))
}

/// Slash-separated construct path, rooted at the construct ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructPath(Vec<String>);

impl ConstructPath {
    pub fn root(id: impl Into<String>) -> Self {
        Self(vec![id.into()])
    }

    pub fn child(&self, id: impl Into<String>) -> Self {
        let mut components = self.0.clone();
        components.push(id.into());
        Self(components)
    }

    pub fn logical_id(&self) -> String {
        logical_id(&self.0)
    }
}

impl std::fmt::Display for ConstructPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("/"))
    }
}

fn path_hash(components: &[&str]) -> String {
    let digest = Md5::digest(components.join("/").as_bytes());
    let mut encoded = hex::encode_upper(digest);
    encoded.truncate(HASH_LEN);
    encoded
}
