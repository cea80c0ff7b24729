//! Replication-group resource records
//!
//! A replication group shards a Redis keyspace over node groups, each
//! with a primary and optional replicas.

use crate::error::TemplateError;
use crate::snapshot::SnapshotWindow;
use cacheforge_engine::{NodeType, RedisVersion};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Highest hash slot of the keyspace
pub const MAX_SLOT: u32 = 16_383;

/// An inclusive range of hash slots assigned to one node group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRange {
    start: u32,
    end: u32,
}

impl SlotRange {
    /// Range covering slots `start..=end`
    pub fn new(start: u32, end: u32) -> Result<Self, TemplateError> {
        if start > end || end > MAX_SLOT {
            return Err(TemplateError::SlotRangeOutOfBounds { start, end });
        }
        Ok(Self { start, end })
    }
}

impl Display for SlotRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Per-node-group placement configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroupConfiguration {
    /// Hash slots this group serves, platform-assigned when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slots: Option<String>,
    /// Replicas in this group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_count: Option<u32>,
}

impl NodeGroupConfiguration {
    /// Group with platform-assigned slots
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: None,
            replica_count: None,
        }
    }

    /// Pin the group to a slot range
    #[must_use]
    pub fn with_slots(mut self, slots: SlotRange) -> Self {
        self.slots = Some(slots.to_string());
        self
    }

    /// Set the replica count
    #[must_use]
    pub fn with_replica_count(mut self, count: u32) -> Self {
        self.replica_count = Some(count);
        self
    }
}

impl Default for NodeGroupConfiguration {
    fn default() -> Self {
        Self::new()
    }
}

/// A Redis replication-group resource record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplicationGroupResource {
    /// Free-form description
    pub replication_group_description: String,
    /// Engine release to run
    pub engine_version: String,
    /// Node hardware for every member
    pub node_type: String,
    /// Number of node groups (shards)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_node_groups: Option<u32>,
    /// Replicas per node group
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas_per_node_group: Option<u32>,
    /// Per-group placement, when not uniform
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub node_group_configuration: Vec<NodeGroupConfiguration>,
    /// Promote a replica automatically on primary failure
    pub automatic_failover_enabled: bool,
    /// Spread primaries and replicas across zones
    pub multi_az_enabled: bool,
    /// Encrypt data at rest (4.0+, and 3.2.6)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub at_rest_encryption_enabled: Option<bool>,
    /// Parameter group to apply, platform default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_parameter_group_name: Option<String>,
    /// Daily backup window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_window: Option<String>,
}

impl ReplicationGroupResource {
    /// Replication group on the given release and hardware
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        version: RedisVersion,
        node_type: NodeType,
    ) -> Self {
        Self {
            replication_group_description: description.into(),
            engine_version: version.to_string(),
            node_type: node_type.to_string(),
            num_node_groups: None,
            replicas_per_node_group: None,
            node_group_configuration: Vec::new(),
            automatic_failover_enabled: false,
            multi_az_enabled: false,
            at_rest_encryption_enabled: None,
            cache_parameter_group_name: None,
            snapshot_window: None,
        }
    }

    /// Shard over `count` uniform node groups
    #[must_use]
    pub fn with_node_groups(mut self, count: u32) -> Self {
        self.num_node_groups = Some(count);
        self
    }

    /// Replicas per node group
    #[must_use]
    pub fn with_replicas_per_node_group(mut self, count: u32) -> Self {
        self.replicas_per_node_group = Some(count);
        self
    }

    /// Add explicit per-group placement
    #[must_use]
    pub fn with_node_group(mut self, group: NodeGroupConfiguration) -> Self {
        self.node_group_configuration.push(group);
        self
    }

    /// Enable automatic failover
    #[must_use]
    pub fn with_automatic_failover(mut self) -> Self {
        self.automatic_failover_enabled = true;
        self
    }

    /// Enable multi-AZ placement (implies automatic failover)
    #[must_use]
    pub fn with_multi_az(mut self) -> Self {
        self.multi_az_enabled = true;
        self.automatic_failover_enabled = true;
        self
    }

    /// Enable at-rest encryption
    #[must_use]
    pub fn with_at_rest_encryption(mut self) -> Self {
        self.at_rest_encryption_enabled = Some(true);
        self
    }

    /// Apply a named parameter group
    #[must_use]
    pub fn with_parameter_group(mut self, name: impl Into<String>) -> Self {
        self.cache_parameter_group_name = Some(name.into());
        self
    }

    /// Schedule automatic backups
    #[must_use]
    pub fn with_snapshot_window(mut self, window: SnapshotWindow) -> Self {
        self.snapshot_window = Some(window.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cacheforge_engine::{NodeClass, NodeSize};

    #[test]
    fn slot_range_renders_inclusive() {
        let range = SlotRange::new(0, 8191).unwrap();
        assert_eq!(range.to_string(), "0-8191");
    }

    #[test]
    fn slot_range_bounds() {
        assert!(SlotRange::new(0, MAX_SLOT).is_ok());
        assert_eq!(
            SlotRange::new(100, 20_000),
            Err(TemplateError::SlotRangeOutOfBounds {
                start: 100,
                end: 20_000
            })
        );
        assert!(SlotRange::new(10, 5).is_err());
    }

    #[test]
    fn sharded_group_record() {
        let group = ReplicationGroupResource::new(
            "sessions",
            RedisVersion::V6_2,
            NodeType::of(NodeClass::R6G, NodeSize::Large),
        )
        .with_node_groups(3)
        .with_replicas_per_node_group(2)
        .with_multi_az();

        assert_eq!(group.num_node_groups, Some(3));
        assert!(group.automatic_failover_enabled);
        assert!(group.multi_az_enabled);
    }

    #[test]
    fn explicit_slot_placement() {
        let group = ReplicationGroupResource::new(
            "split",
            RedisVersion::V5_0_6,
            NodeType::of(NodeClass::R5, NodeSize::Large),
        )
        .with_node_group(
            NodeGroupConfiguration::new()
                .with_slots(SlotRange::new(0, 8191).unwrap())
                .with_replica_count(1),
        )
        .with_node_group(
            NodeGroupConfiguration::new()
                .with_slots(SlotRange::new(8192, MAX_SLOT).unwrap())
                .with_replica_count(1),
        );

        assert_eq!(group.node_group_configuration.len(), 2);
        assert_eq!(
            group.node_group_configuration[1].slots.as_deref(),
            Some("8192-16383")
        );
    }
}
