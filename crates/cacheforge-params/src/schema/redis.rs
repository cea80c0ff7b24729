//! Redis family declaration tables
//!
//! One table per family, own entries only; inherited keys come from
//! the ancestor walk in the parent module. Defaults follow the
//! platform documentation for each release line.

use super::{fixed, node_dependent, param, removed, SchemaEntry};
use crate::enums::{AppendFsync, MaxMemoryPolicy, PubSubAcl};
use crate::events::KeyspaceEventSet;
use crate::rename::RenameMap;
use once_cell::sync::Lazy;

/// `redis2.6` — chain root
pub(super) static REDIS2_6: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        param("activerehashing", true),
        param("appendonly", false),
        param("appendfsync", AppendFsync::EverySecond),
        param("clientOutputBufferLimitNormalHardLimit", 0),
        param("clientOutputBufferLimitNormalSoftLimit", 0),
        param("clientOutputBufferLimitNormalSoftSeconds", 0),
        param("clientOutputBufferLimitPubsubHardLimit", 33_554_432),
        param("clientOutputBufferLimitPubsubSoftLimit", 8_388_608),
        param("clientOutputBufferLimitPubsubSoftSeconds", 60),
        node_dependent("clientOutputBufferLimitSlaveHardLimit"),
        node_dependent("clientOutputBufferLimitSlaveSoftLimit"),
        fixed("clientOutputBufferLimitSlaveSoftSeconds", 60),
        param("databases", 16),
        param("hashMaxZiplistEntries", 512),
        param("hashMaxZiplistValue", 64),
        param("listMaxZiplistEntries", 512),
        param("listMaxZiplistValue", 64),
        fixed("luaTimeLimit", 5000),
        fixed("maxclients", 65_000),
        node_dependent("maxmemory"),
        param("maxmemoryPolicy", MaxMemoryPolicy::VolatileLru),
        param("maxmemorySamples", 3),
        param("reservedMemory", 0),
        param("setMaxIntsetEntries", 512),
        fixed("slaveAllowChaining", false),
        param("slowlogLogSlowerThan", 10_000),
        param("slowlogMaxLen", 128),
        param("tcpKeepalive", 0),
        param("timeout", 0),
        param("zsetMaxZiplistEntries", 128),
        param("zsetMaxZiplistValue", 64),
    ]
});

/// `redis2.8` — replication-aware additions
pub(super) static REDIS2_8: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        param("minSlavesMaxLag", 10),
        param("minSlavesToWrite", 0),
        param("notifyKeyspaceEvents", KeyspaceEventSet::NONE),
        param("replBacklogSize", 1_048_576),
        param("replBacklogTtl", 3600),
        fixed("replTimeout", 60),
        param("closeOnSlaveWrite", true),
    ]
});

/// `redis3.2` — drops AOF and the old list encodings, gains cluster mode
pub(super) static REDIS3_2: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        removed("appendonly"),
        removed("appendfsync"),
        removed("listMaxZiplistEntries"),
        removed("listMaxZiplistValue"),
        // re-declared: platform-fixed from 3.2.4 on
        fixed("activerehashing", true),
        // default moves from 0 to 300
        param("tcpKeepalive", 300),
        param("listMaxZiplistSize", 128),
        param("listCompressDepth", 0),
        fixed("clusterEnabled", false),
        param("clusterRequireFullCoverage", false),
        param("hllSparseMaxBytes", 3000),
        param("reservedMemoryPercent", 25),
    ]
});

/// `redis4.0` — lazy freeing, LFU eviction and active defragmentation
pub(super) static REDIS4_0: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        param("lazyfreeLazyEviction", false),
        param("lazyfreeLazyExpire", false),
        param("lazyfreeLazyServerDel", false),
        fixed("slaveLazyFlush", false),
        param("lfuLogFactor", 10),
        param("lfuDecayTime", 1),
        param("activedefrag", false),
        param("activeDefragIgnoreBytes", 104_857_600),
        param("activeDefragThresholdLower", 10),
        param("activeDefragThresholdUpper", 100),
        param("activeDefragCycleMin", 25),
        param("activeDefragCycleMax", 75),
        param("clientQueryBufferLimit", 1_073_741_824),
        param("protoMaxBulkLen", 536_870_912),
    ]
});

/// `redis5.0` — slave→replica renames, streams, command renaming
pub(super) static REDIS5_0: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        removed("slaveLazyFlush"),
        fixed("replicaLazyFlush", true),
        removed("clientOutputBufferLimitSlaveHardLimit"),
        node_dependent("clientOutputBufferLimitReplicaHardLimit"),
        removed("clientOutputBufferLimitSlaveSoftLimit"),
        node_dependent("clientOutputBufferLimitReplicaSoftLimit"),
        removed("clientOutputBufferLimitSlaveSoftSeconds"),
        fixed("clientOutputBufferLimitReplicaSoftSeconds", 60),
        removed("slaveAllowChaining"),
        fixed("replicaAllowChaining", false),
        removed("minSlavesToWrite"),
        param("minReplicasToWrite", 0),
        removed("minSlavesMaxLag"),
        param("minReplicasMaxLag", 10),
        removed("closeOnSlaveWrite"),
        param("closeOnReplicaWrite", true),
        param("streamNodeMaxBytes", 4096),
        param("streamNodeMaxEntries", 100),
        param("activeDefragMaxScanFields", 1000),
        param("luaReplicateCommands", true),
        param("replicaIgnoreMaxmemory", true),
        param("renameCommands", RenameMap::new()),
    ]
});

/// `redis6.x` — ACLs, client-side caching, removals from 6.0
pub(super) static REDIS6_X: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        removed("luaReplicateCommands"),
        removed("replicaIgnoreMaxmemory"),
        removed("replTimeout"),
        param("clusterAllowReadsWhenDown", false),
        param("trackingTableMaxKeys", 1_000_000),
        param("acllogMaxLen", 128),
        param("activeExpireEffort", 1),
        param("lazyfreeLazyUserDel", false),
        param("aclPubsubDefault", PubSubAcl::AllChannels),
    ]
});
