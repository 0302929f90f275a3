//! NotifyWiring: composes the resources behind a changelog notification.
//!
//! One composition pass runs four steps against a fresh [`Template`]:
//!
//! 1. Resolve the repository (declare it, or reference an existing one)
//! 2. Project the config into the function environment
//! 3. Grant repository read actions to the function's execution role
//! 4. Bind repository reference events to the function
//!
//! The pass is synchronous and deterministic: the same config always yields
//! the same template.

pub mod binding;
pub mod environment;
pub mod function;
pub mod permissions;
pub mod repository;


pub use binding::EventBinding;
pub use environment::EnvironmentMap;
pub use function::{ComputeUnit, ExecutionRole};
pub use permissions::{PermissionSet, RepositoryAction};
pub use repository::ResolvedRepository;

use crate::config::NotificationConfig;
use crate::error::Result;
use crate::template::{ConstructPath, Template};
use tracing::info;

/// The outcome of one composition pass.
#[derive(Debug)]
pub struct NotifyWiring {
    repository: ResolvedRepository,
    environment: EnvironmentMap,
    permissions: PermissionSet,
    binding: EventBinding,
    function: ComputeUnit,
    template: Template,
}

impl NotifyWiring {
    /// Validate `config` and compose the resource graph.
    ///
    /// A config missing a required field fails before anything is declared.
    pub fn compose(config: &NotificationConfig) -> Result<Self> {
        config.validate()?;

        let mut template = Template::new(config.deployment.description.clone());
        let root = ConstructPath::root(config.deployment.construct_id.as_str());
        let repository_path = root.child(repository::REPOSITORY_ID);
        let function_path = root.child(function::FUNCTION_ID);

        let repository = ResolvedRepository::resolve(config, &repository_path, &mut template)?;
        let environment = EnvironmentMap::project(config);

        let role = ExecutionRole::declare(&function_path, &mut template)?;
        let permissions = PermissionSet::for_notifier(config.changelog_path().is_some());
        let policy_logical_id =
            permissions.grant(repository.arn(), &role.path, &role.logical_id, &mut template)?;

        let function = ComputeUnit::declare(
            &function_path,
            &role,
            &policy_logical_id,
            &environment,
            config.function_code.as_ref(),
            &mut template,
        )?;

        let binding = EventBinding::new(
            repository.arn(),
            config.tracking_branches().into_owned(),
            function.arn(),
        )?;
        binding.register(&repository_path, &function, &mut template)?;

        info!(
            repository = %repository.name(),
            existing = repository.is_existing(),
            resources = template.resource_count(),
            "composed notification wiring"
        );

        Ok(Self {
            repository,
            environment,
            permissions,
            binding,
            function,
            template,
        })
    }

    pub fn repository(&self) -> &ResolvedRepository {
        &self.repository
    }

    pub fn environment(&self) -> &EnvironmentMap {
        &self.environment
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    pub fn binding(&self) -> &EventBinding {
        &self.binding
    }

    pub fn function(&self) -> &ComputeUnit {
        &self.function
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn into_template(self) -> Template {
        self.template
    }
}
