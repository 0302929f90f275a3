//! Repository resolution: declare a new repository or reference an existing one.

use crate::config::{DeploymentSettings, NotificationConfig};
use crate::error::Result;
use crate::template::intrinsic::pseudo;
use crate::template::resources::{CODECOMMIT_REPOSITORY, RepositoryProperties};
use crate::template::{ConstructPath, Expr, Resource, Template};
use tracing::debug;

/// Construct ID of the repository under the wiring root.
pub const REPOSITORY_ID: &str = "Repository";

/// Description attached to newly declared repositories.
pub const REPOSITORY_DESCRIPTION: &str = "A repo created by ChangelogSlackNotify lib";

/// The repository every other resource is wired to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRepository {
    /// A repository declared in this template.
    New { name: String, logical_id: String },
    /// A repository that already exists, referenced by a synthesized ARN.
    Existing { name: String, arn: Expr },
}

impl ResolvedRepository {
    /// Resolve the repository for `config`, declaring it in `template` when new.
    ///
    /// Existing repositories are not looked up; a missing one only surfaces
    /// when the template is deployed.
    pub fn resolve(
        config: &NotificationConfig,
        scope: &ConstructPath,
        template: &mut Template,
    ) -> Result<Self> {
        let name = config.repository_name.clone();

        if config.from_exist_repository {
            let arn = existing_repository_arn(&name, &config.deployment);
            debug!(repository = %name, mode = "existing", "resolved repository");
            return Ok(ResolvedRepository::Existing { name, arn });
        }

        let logical_id = scope.child("Resource").logical_id();
        let properties = RepositoryProperties {
            repository_name: name.clone(),
            repository_description: REPOSITORY_DESCRIPTION.to_string(),
        };
        template.add_resource(
            &logical_id,
            Resource::new(CODECOMMIT_REPOSITORY, &properties)?,
        )?;

        debug!(repository = %name, mode = "new", logical_id = %logical_id, "resolved repository");
        Ok(ResolvedRepository::New { name, logical_id })
    }

    pub fn name(&self) -> &str {
        match self {
            ResolvedRepository::New { name, .. } | ResolvedRepository::Existing { name, .. } => {
                name
            }
        }
    }

    /// The repository ARN, usable as a policy resource and event source.
    pub fn arn(&self) -> Expr {
        match self {
            ResolvedRepository::New { logical_id, .. } => Expr::get_att(logical_id.as_str(), "Arn"),
            ResolvedRepository::Existing { arn, .. } => arn.clone(),
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, ResolvedRepository::Existing { .. })
    }
}

/// Synthesize `arn:<partition>:codecommit:<region>:<account>:<name>`.
///
/// Region and account are literal when configured, pseudo parameters otherwise.
pub fn existing_repository_arn(name: &str, deployment: &DeploymentSettings) -> Expr {
    let region = deployment
        .region
        .as_deref()
        .map(Expr::literal)
        .unwrap_or_else(|| Expr::reference(pseudo::REGION));
    let account = deployment
        .account
        .as_deref()
        .map(Expr::literal)
        .unwrap_or_else(|| Expr::reference(pseudo::ACCOUNT_ID));

    Expr::join(
        "",
        [
            Expr::literal("arn:"),
            Expr::reference(pseudo::PARTITION),
            Expr::literal(":codecommit:"),
            region,
            Expr::literal(":"),
            account,
            Expr::literal(format!(":{}", name)),
        ],
    )
}
