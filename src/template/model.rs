//! Template document and resource entries.

use crate::error::{NotifyError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Template format version written at the top of every document.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A declared template parameter, supplied at deploy time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(rename = "Type")]
    pub parameter_type: String,
    pub description: String,
}

impl Parameter {
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            parameter_type: "String".to_string(),
            description: description.into(),
        }
    }
}

/// A single resource declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    pub properties: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl Resource {
    /// Create a resource from typed properties.
    pub fn new<P: Serialize>(resource_type: &str, properties: &P) -> Result<Self> {
        Ok(Self {
            resource_type: resource_type.to_string(),
            properties: serde_json::to_value(properties)?,
            depends_on: Vec::new(),
        })
    }

    pub fn with_depends_on(mut self, logical_ids: impl IntoIterator<Item = String>) -> Self {
        self.depends_on.extend(logical_ids);
        self
    }
}

/// The declarative resource graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    format_version: String,

    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(rename = "Parameters", skip_serializing_if = "IndexMap::is_empty")]
    parameters: IndexMap<String, Parameter>,

    #[serde(rename = "Resources")]
    resources: IndexMap<String, Resource>,
}

impl Template {
    pub fn new(description: Option<String>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description,
            parameters: IndexMap::new(),
            resources: IndexMap::new(),
        }
    }

    /// Register a resource under a logical ID.
    ///
    /// Fails if the logical ID is already taken.
    pub fn add_resource(&mut self, logical_id: &str, resource: Resource) -> Result<()> {
        if self.resources.contains_key(logical_id) {
            return Err(NotifyError::Synthesis(format!(
                "duplicate logical id '{}'",
                logical_id
            )));
        }
        self.resources.insert(logical_id.to_string(), resource);
        Ok(())
    }

    /// Register a parameter under a name.
    pub fn add_parameter(&mut self, name: &str, parameter: Parameter) -> Result<()> {
        if self.parameters.contains_key(name) {
            return Err(NotifyError::Synthesis(format!(
                "duplicate parameter '{}'",
                name
            )));
        }
        self.parameters.insert(name.to_string(), parameter);
        Ok(())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn resources(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources.iter().map(|(id, r)| (id.as_str(), r))
    }

    /// All resources of the given type, in declaration order.
    pub fn resources_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Resource)> {
        self.resources()
            .filter(move |(_, r)| r.resource_type == resource_type)
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&str, &Parameter)> {
        self.parameters.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            NotifyError::Synthesis(format!("failed to serialize resource graph to YAML: {}", e))
        })
    }
}
