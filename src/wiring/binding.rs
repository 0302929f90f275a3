//! Event binding from repository reference updates to the notifier function.

use super::function::ComputeUnit;
use crate::error::{NotifyError, Result};
use crate::template::resources::{
    EVENTS_RULE, EventDetailFilter, EventPattern, LAMBDA_PERMISSION, PermissionProperties,
    RuleProperties, RuleTarget,
};
use crate::template::{ConstructPath, Expr, Resource, Template};
use tracing::debug;

/// Construct ID of the rule under the repository.
pub const RULE_ID: &str = "CommitToMasterRule";

pub const EVENT_SOURCE: &str = "aws.codecommit";
pub const EVENT_DETAIL_TYPE: &str = "CodeCommit Repository State Change";
pub const REFERENCE_EVENTS: [&str; 2] = ["referenceCreated", "referenceUpdated"];
pub const EVENTS_SERVICE_PRINCIPAL: &str = "events.amazonaws.com";

/// Rule target ID for the (single) function target.
pub const TARGET_ID: &str = "Target0";

/// Source, branch filter, and target of the commit rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventBinding {
    source: Expr,
    branches: Vec<String>,
    target: Expr,
}

impl EventBinding {
    pub fn new(source: Expr, branches: Vec<String>, target: Expr) -> Result<Self> {
        if branches.is_empty() {
            return Err(NotifyError::InvalidConfig(
                "event binding needs at least one branch".to_string(),
            ));
        }
        Ok(Self {
            source,
            branches,
            target,
        })
    }

    pub fn branches(&self) -> &[String] {
        &self.branches
    }

    pub fn event_pattern(&self) -> EventPattern {
        EventPattern {
            source: vec![EVENT_SOURCE.to_string()],
            resources: vec![self.source.clone()],
            detail_type: vec![EVENT_DETAIL_TYPE.to_string()],
            detail: EventDetailFilter {
                event: REFERENCE_EVENTS.iter().map(|e| e.to_string()).collect(),
                reference_name: self.branches.clone(),
            },
        }
    }

    /// Declare the rule under `repository_path` and allow it to invoke `function`.
    ///
    /// Returns the rule's logical ID.
    pub fn register(
        &self,
        repository_path: &ConstructPath,
        function: &ComputeUnit,
        template: &mut Template,
    ) -> Result<String> {
        let rule_logical_id = repository_path.child(RULE_ID).child("Resource").logical_id();

        let rule = RuleProperties {
            event_pattern: self.event_pattern(),
            state: "ENABLED".to_string(),
            targets: vec![RuleTarget {
                arn: self.target.clone(),
                id: TARGET_ID.to_string(),
            }],
        };
        template.add_resource(&rule_logical_id, Resource::new(EVENTS_RULE, &rule)?)?;

        let permission_logical_id = function
            .path
            .child(format!("AllowEventRule{}", rule_logical_id))
            .logical_id();
        let permission = PermissionProperties {
            action: "lambda:InvokeFunction".to_string(),
            function_name: function.arn(),
            principal: EVENTS_SERVICE_PRINCIPAL.to_string(),
            source_arn: Expr::get_att(rule_logical_id.as_str(), "Arn"),
        };
        template.add_resource(
            &permission_logical_id,
            Resource::new(LAMBDA_PERMISSION, &permission)?,
        )?;

        debug!(
            rule = %rule_logical_id,
            branches = ?self.branches,
            "bound repository events to notifier"
        );
        Ok(rule_logical_id)
    }
}
