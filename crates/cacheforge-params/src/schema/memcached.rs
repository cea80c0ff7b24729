//! Memcached family declaration tables
//!
//! Families are modeled at parameter-group granularity (1.4 / 1.5 /
//! 1.6); the 1.4 table is the union of the 1.4.x release line.

use super::{fixed, param, removed, SchemaEntry};
use crate::enums::{BindingProtocol, HashAlgorithm};
use once_cell::sync::Lazy;

/// `memcached1.4` — chain root
pub(super) static MEMCACHED1_4: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        fixed("backlogQueueLimit", 1024),
        param("bindingProtocol", BindingProtocol::Auto),
        param("casDisabled", false),
        param("chunkSize", 48),
        param("chunkSizeGrowthFactor", 1.25),
        param("errorOnMemoryExhausted", false),
        fixed("largeMemoryPages", false),
        fixed("lockDownPagedMemory", false),
        param("maxItemSize", 1_048_576),
        fixed("maxSimultaneousConnection", 65_000),
        param("maximizeCoreFileLimit", false),
        param("memcachedConnectionsOverhead", 100),
        fixed("requestsPerEvent", 20),
        fixed("configMax", 16),
        fixed("configSizeMax", 65_536),
        fixed("hashpowerInit", 16),
        param("maxconnsFast", false),
        param("slabAutomove", false),
        param("slabReassign", false),
        param("disableFlushAll", false),
        param("hashAlgorithm", HashAlgorithm::Jenkins),
        param("lruCrawler", false),
        param("lruMaintainer", false),
        param("expirezeroDoesNotEvict", false),
        param("modern", true),
        param("watch", true),
        param("idleTimeout", 0),
        param("trackSizes", false),
        param("watcherLogbufSize", 256),
        param("workerLogbufSize", 64),
        param("slabChunkMax", 524_288),
    ]
});

/// `memcached1.5` — the modern alias flips polarity
pub(super) static MEMCACHED1_5: Lazy<Vec<SchemaEntry>> = Lazy::new(|| {
    vec![
        removed("modern"),
        param("noModern", true),
        param("inlineAsciiResp", false),
    ]
});

/// `memcached1.6` — pure inheritance, no declarations of its own
pub(super) static MEMCACHED1_6: Lazy<Vec<SchemaEntry>> = Lazy::new(Vec::new);
