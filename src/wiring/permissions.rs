//! Read permissions granted to the notifier's execution role.

use crate::error::Result;
use crate::template::resources::{IAM_POLICY, POLICY_VERSION, PolicyDocument, PolicyProperties, PolicyStatement};
use crate::template::{ConstructPath, Expr, Resource, Template};
use tracing::debug;

/// Construct ID of the role's inline policy.
pub const DEFAULT_POLICY_ID: &str = "DefaultPolicy";

/// Repository read actions the notifier may need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryAction {
    GetDifferences,
    GetCommit,
    GetBlob,
}

impl RepositoryAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RepositoryAction::GetDifferences => "codecommit:GetDifferences",
            RepositoryAction::GetCommit => "codecommit:GetCommit",
            RepositoryAction::GetBlob => "codecommit:GetBlob",
        }
    }
}

impl std::fmt::Display for RepositoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, duplicate-free list of granted actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionSet {
    actions: Vec<RepositoryAction>,
}

impl PermissionSet {
    /// Diff and commit reads always; blob reads only when a changelog is read.
    pub fn for_notifier(reads_changelog: bool) -> Self {
        let mut set = Self {
            actions: Vec::new(),
        };
        set.insert(RepositoryAction::GetDifferences);
        set.insert(RepositoryAction::GetCommit);
        if reads_changelog {
            set.insert(RepositoryAction::GetBlob);
        }
        set
    }

    /// Append an action, keeping insertion order. Returns false if already present.
    pub fn insert(&mut self, action: RepositoryAction) -> bool {
        if self.actions.contains(&action) {
            return false;
        }
        self.actions.push(action);
        true
    }

    pub fn contains(&self, action: RepositoryAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn actions(&self) -> &[RepositoryAction] {
        &self.actions
    }

    pub fn action_names(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.as_str().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Attach the set to `role_logical_id` as an inline policy scoped to one repository.
    ///
    /// Returns the policy's logical ID.
    pub fn grant(
        &self,
        repository_arn: Expr,
        role_path: &ConstructPath,
        role_logical_id: &str,
        template: &mut Template,
    ) -> Result<String> {
        let logical_id = role_path
            .child(DEFAULT_POLICY_ID)
            .child("Resource")
            .logical_id();

        let properties = PolicyProperties {
            policy_document: PolicyDocument {
                statement: vec![PolicyStatement {
                    action: self.action_names(),
                    effect: "Allow".to_string(),
                    resource: repository_arn,
                }],
                version: POLICY_VERSION.to_string(),
            },
            policy_name: logical_id.clone(),
            roles: vec![Expr::reference(role_logical_id)],
        };
        template.add_resource(&logical_id, Resource::new(IAM_POLICY, &properties)?)?;

        debug!(
            actions = ?self.action_names(),
            policy = %logical_id,
            "granted repository read access"
        );
        Ok(logical_id)
    }
}
