//! Cache-cluster resource records

use crate::error::TemplateError;
use crate::snapshot::SnapshotWindow;
use cacheforge_engine::{Engine, MemcachedVersion, NodeType, RedisVersion};
use serde::{Deserialize, Serialize};

/// A single cache cluster (one Redis primary or a Memcached node fleet)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheClusterResource {
    /// Cluster name, platform-assigned when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    /// Engine kind (`redis` / `memcached`)
    pub engine: Engine,
    /// Engine release to run
    pub engine_version: String,
    /// Node hardware (`cache.<class>.<size>`)
    pub node_type: String,
    /// Number of cache nodes
    pub num_cache_nodes: u32,
    /// Listener port, engine default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Parameter group to apply, platform default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_parameter_group_name: Option<String>,
    /// Subnet group placing the nodes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_subnet_group_name: Option<String>,
    /// Security groups guarding access
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub security_group_ids: Vec<String>,
    /// Daily backup window (Redis only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_window: Option<String>,
    /// Days automatic backups are retained (Redis only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_retention_limit: Option<u32>,
}

impl CacheClusterResource {
    /// A Redis cluster on the given release and hardware
    pub fn redis(
        version: RedisVersion,
        node_type: NodeType,
        num_cache_nodes: u32,
    ) -> Result<Self, TemplateError> {
        Self::with_engine(Engine::Redis, version.to_string(), node_type, num_cache_nodes)
    }

    /// A Memcached cluster on the given release and hardware
    pub fn memcached(
        version: MemcachedVersion,
        node_type: NodeType,
        num_cache_nodes: u32,
    ) -> Result<Self, TemplateError> {
        Self::with_engine(
            Engine::Memcached,
            version.to_string(),
            node_type,
            num_cache_nodes,
        )
    }

    fn with_engine(
        engine: Engine,
        engine_version: String,
        node_type: NodeType,
        num_cache_nodes: u32,
    ) -> Result<Self, TemplateError> {
        if num_cache_nodes == 0 {
            return Err(TemplateError::NoNodes);
        }
        Ok(Self {
            cluster_name: None,
            engine,
            engine_version,
            node_type: node_type.to_string(),
            num_cache_nodes,
            port: None,
            cache_parameter_group_name: None,
            cache_subnet_group_name: None,
            security_group_ids: Vec::new(),
            snapshot_window: None,
            snapshot_retention_limit: None,
        })
    }

    /// Set an explicit cluster name
    #[must_use]
    pub fn with_cluster_name(mut self, name: impl Into<String>) -> Self {
        self.cluster_name = Some(name.into());
        self
    }

    /// Set an explicit listener port
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Apply a named parameter group
    #[must_use]
    pub fn with_parameter_group(mut self, name: impl Into<String>) -> Self {
        self.cache_parameter_group_name = Some(name.into());
        self
    }

    /// Place nodes in a named subnet group
    #[must_use]
    pub fn with_subnet_group(mut self, name: impl Into<String>) -> Self {
        self.cache_subnet_group_name = Some(name.into());
        self
    }

    /// Guard access with a security group
    #[must_use]
    pub fn with_security_group(mut self, id: impl Into<String>) -> Self {
        self.security_group_ids.push(id.into());
        self
    }

    /// Schedule automatic backups
    #[must_use]
    pub fn with_snapshots(mut self, window: SnapshotWindow, retention_days: u32) -> Self {
        self.snapshot_window = Some(window.to_string());
        self.snapshot_retention_limit = Some(retention_days);
        self
    }
}
