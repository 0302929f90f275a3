//! The notifier function and its execution role.
//!
//! The function's code is an external package; this module only declares
//! where it lives and how it runs.

use super::environment::EnvironmentMap;
use crate::config::FunctionCodeLocation;
use crate::error::Result;
use crate::template::intrinsic::pseudo;
use crate::template::resources::{
    AssumeRolePolicyDocument, AssumeRoleStatement, FunctionCode, FunctionEnvironment,
    FunctionProperties, IAM_ROLE, LAMBDA_FUNCTION, POLICY_VERSION, RoleProperties,
    ServicePrincipal,
};
use crate::template::{ConstructPath, Expr, Parameter, Resource, Template};
use tracing::debug;

/// Construct ID of the function under the wiring root.
pub const FUNCTION_ID: &str = "lambda_fun";

/// Construct ID of the execution role under the function.
pub const SERVICE_ROLE_ID: &str = "ServiceRole";

pub const HANDLER: &str = "index.handler";
pub const RUNTIME: &str = "python3.7";
pub const MEMORY_SIZE_MB: u32 = 128;
pub const TIMEOUT_SECONDS: u32 = 5;

pub const LAMBDA_SERVICE_PRINCIPAL: &str = "lambda.amazonaws.com";

/// Template parameters declared when no code location is configured.
pub const CODE_BUCKET_PARAMETER: &str = "FunctionCodeS3Bucket";
pub const CODE_KEY_PARAMETER: &str = "FunctionCodeS3Key";

/// Identity the function executes as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRole {
    pub path: ConstructPath,
    pub logical_id: String,
}

impl ExecutionRole {
    /// Declare a role assumable by the function service, with basic execution logging.
    pub fn declare(function_path: &ConstructPath, template: &mut Template) -> Result<Self> {
        let path = function_path.child(SERVICE_ROLE_ID);
        let logical_id = path.child("Resource").logical_id();

        let properties = RoleProperties {
            assume_role_policy_document: AssumeRolePolicyDocument {
                statement: vec![AssumeRoleStatement {
                    action: "sts:AssumeRole".to_string(),
                    effect: "Allow".to_string(),
                    principal: ServicePrincipal {
                        service: LAMBDA_SERVICE_PRINCIPAL.to_string(),
                    },
                }],
                version: POLICY_VERSION.to_string(),
            },
            managed_policy_arns: vec![basic_execution_policy_arn()],
        };
        template.add_resource(&logical_id, Resource::new(IAM_ROLE, &properties)?)?;

        Ok(Self { path, logical_id })
    }

    pub fn arn(&self) -> Expr {
        Expr::get_att(self.logical_id.as_str(), "Arn")
    }
}

/// The deployed notifier function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputeUnit {
    pub path: ConstructPath,
    pub logical_id: String,
}

impl ComputeUnit {
    /// Declare the function. It depends on the role and on the role's policy so
    /// the grant exists before the first invocation.
    pub fn declare(
        function_path: &ConstructPath,
        role: &ExecutionRole,
        policy_logical_id: &str,
        environment: &EnvironmentMap,
        code: Option<&FunctionCodeLocation>,
        template: &mut Template,
    ) -> Result<Self> {
        let logical_id = function_path.child("Resource").logical_id();

        let properties = FunctionProperties {
            code: function_code(code, template)?,
            role: role.arn(),
            environment: FunctionEnvironment {
                variables: environment.variables().clone(),
            },
            handler: HANDLER.to_string(),
            memory_size: MEMORY_SIZE_MB,
            runtime: RUNTIME.to_string(),
            timeout: TIMEOUT_SECONDS,
        };
        let resource = Resource::new(LAMBDA_FUNCTION, &properties)?
            .with_depends_on([policy_logical_id.to_string(), role.logical_id.clone()]);
        template.add_resource(&logical_id, resource)?;

        debug!(function = %logical_id, runtime = RUNTIME, "declared notifier function");
        Ok(Self {
            path: function_path.clone(),
            logical_id,
        })
    }

    pub fn arn(&self) -> Expr {
        Expr::get_att(self.logical_id.as_str(), "Arn")
    }
}

fn function_code(code: Option<&FunctionCodeLocation>, template: &mut Template) -> Result<FunctionCode> {
    match code {
        Some(location) => Ok(FunctionCode {
            s3_bucket: Expr::literal(location.s3_bucket.as_str()),
            s3_key: Expr::literal(location.s3_key.as_str()),
        }),
        None => {
            template.add_parameter(
                CODE_BUCKET_PARAMETER,
                Parameter::string("S3 bucket holding the notifier function package"),
            )?;
            template.add_parameter(
                CODE_KEY_PARAMETER,
                Parameter::string("S3 key of the notifier function package"),
            )?;
            Ok(FunctionCode {
                s3_bucket: Expr::reference(CODE_BUCKET_PARAMETER),
                s3_key: Expr::reference(CODE_KEY_PARAMETER),
            })
        }
    }
}

fn basic_execution_policy_arn() -> Expr {
    Expr::join(
        "",
        [
            Expr::literal("arn:"),
            Expr::reference(pseudo::PARTITION),
            Expr::literal(":iam::aws:policy/service-role/AWSLambdaBasicExecutionRole"),
        ],
    )
}
