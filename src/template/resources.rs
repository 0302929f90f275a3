//! Typed property shapes for the resource types this crate declares.
//!
//! Each struct serializes to the exact `Properties` object expected for its
//! resource type; [`super::Resource::new`] turns them into template entries.

use super::Expr;
use indexmap::IndexMap;
use serde::Serialize;

pub const CODECOMMIT_REPOSITORY: &str = "AWS::CodeCommit::Repository";
pub const IAM_ROLE: &str = "AWS::IAM::Role";
pub const IAM_POLICY: &str = "AWS::IAM::Policy";
pub const LAMBDA_FUNCTION: &str = "AWS::Lambda::Function";
pub const LAMBDA_PERMISSION: &str = "AWS::Lambda::Permission";
pub const EVENTS_RULE: &str = "AWS::Events::Rule";

/// IAM policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RepositoryProperties {
    pub repository_name: String,
    pub repository_description: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServicePrincipal {
    pub service: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssumeRoleStatement {
    pub action: String,
    pub effect: String,
    pub principal: ServicePrincipal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssumeRolePolicyDocument {
    pub statement: Vec<AssumeRoleStatement>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoleProperties {
    pub assume_role_policy_document: AssumeRolePolicyDocument,
    pub managed_policy_arns: Vec<Expr>,
}

/// An allow/deny statement scoped to a single resource.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub action: Vec<String>,
    pub effect: String,
    pub resource: Expr,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub statement: Vec<PolicyStatement>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyProperties {
    pub policy_document: PolicyDocument,
    pub policy_name: String,
    pub roles: Vec<Expr>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionCode {
    pub s3_bucket: Expr,
    pub s3_key: Expr,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionEnvironment {
    pub variables: IndexMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionProperties {
    pub code: FunctionCode,
    pub role: Expr,
    pub environment: FunctionEnvironment,
    pub handler: String,
    pub memory_size: u32,
    pub runtime: String,
    pub timeout: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetailFilter {
    pub event: Vec<String>,
    pub reference_name: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventPattern {
    pub source: Vec<String>,
    pub resources: Vec<Expr>,
    #[serde(rename = "detail-type")]
    pub detail_type: Vec<String>,
    pub detail: EventDetailFilter,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleTarget {
    pub arn: Expr,
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RuleProperties {
    pub event_pattern: EventPattern,
    pub state: String,
    pub targets: Vec<RuleTarget>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PermissionProperties {
    pub action: String,
    pub function_name: Expr,
    pub principal: String,
    pub source_arn: Expr,
}
