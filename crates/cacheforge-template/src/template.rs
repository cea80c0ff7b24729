//! Template assembly
//!
//! Collects resource records under logical ids and emits the JSON
//! document the external provisioning engine consumes.

use crate::cluster::CacheClusterResource;
use crate::error::TemplateError;
use crate::network::{SecurityGroupResource, SubnetGroupResource};
use crate::parameter_group::ParameterGroupResource;
use crate::replication::ReplicationGroupResource;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Any resource a template can carry
///
/// Serializes as `{"type": ..., "properties": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "properties", rename_all = "camelCase")]
pub enum Resource {
    /// A parameter group
    ParameterGroup(ParameterGroupResource),
    /// A cache subnet group
    SubnetGroup(SubnetGroupResource),
    /// A cache security group
    SecurityGroup(SecurityGroupResource),
    /// A single cache cluster
    CacheCluster(CacheClusterResource),
    /// A Redis replication group
    ReplicationGroup(ReplicationGroupResource),
}

/// A provisioning template: logical id → resource
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    /// Resources in declaration order
    pub resources: IndexMap<String, Resource>,
}

impl Template {
    /// Empty template
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource under a logical id
    ///
    /// Ids must be unique within the template.
    pub fn add(
        &mut self,
        logical_id: impl Into<String>,
        resource: impl Into<Resource>,
    ) -> Result<(), TemplateError> {
        let logical_id = logical_id.into();
        if self.resources.contains_key(&logical_id) {
            return Err(TemplateError::DuplicateLogicalId(logical_id));
        }
        self.resources.insert(logical_id, resource.into());
        Ok(())
    }

    /// Number of resources
    #[must_use]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Whether the template is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Emit the JSON document
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl From<ParameterGroupResource> for Resource {
    fn from(value: ParameterGroupResource) -> Self {
        Resource::ParameterGroup(value)
    }
}

impl From<SubnetGroupResource> for Resource {
    fn from(value: SubnetGroupResource) -> Self {
        Resource::SubnetGroup(value)
    }
}

impl From<SecurityGroupResource> for Resource {
    fn from(value: SecurityGroupResource) -> Self {
        Resource::SecurityGroup(value)
    }
}

impl From<CacheClusterResource> for Resource {
    fn from(value: CacheClusterResource) -> Self {
        Resource::CacheCluster(value)
    }
}

impl From<ReplicationGroupResource> for Resource {
    fn from(value: ReplicationGroupResource) -> Self {
        Resource::ReplicationGroup(value)
    }
}
