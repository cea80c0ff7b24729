//! Engine versions
//!
//! Concrete engine releases and their mapping onto parameter-group
//! families. Versions carry the capability predicates the resource
//! layer needs (cluster mode, encryption, data tiering, log delivery).

use crate::family::EngineFamily;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A Redis engine release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RedisVersion {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}

impl RedisVersion {
    /// Redis version 2.6.13
    pub const V2_6_13: RedisVersion = RedisVersion::of_patch(2, 6, 13);
    /// Redis version 2.8.6
    pub const V2_8_6: RedisVersion = RedisVersion::of_patch(2, 8, 6);
    /// Redis version 2.8.19
    pub const V2_8_19: RedisVersion = RedisVersion::of_patch(2, 8, 19);
    /// Redis version 2.8.21
    pub const V2_8_21: RedisVersion = RedisVersion::of_patch(2, 8, 21);
    /// Redis version 2.8.22
    pub const V2_8_22: RedisVersion = RedisVersion::of_patch(2, 8, 22);
    /// Redis version 2.8.23
    pub const V2_8_23: RedisVersion = RedisVersion::of_patch(2, 8, 23);
    /// Redis version 2.8.24
    pub const V2_8_24: RedisVersion = RedisVersion::of_patch(2, 8, 24);
    /// Redis version 3.2.4
    pub const V3_2_4: RedisVersion = RedisVersion::of_patch(3, 2, 4);
    /// Redis version 3.2.6
    pub const V3_2_6: RedisVersion = RedisVersion::of_patch(3, 2, 6);
    /// Redis version 3.2.10
    pub const V3_2_10: RedisVersion = RedisVersion::of_patch(3, 2, 10);
    /// Redis version 4.0.10
    pub const V4_0_10: RedisVersion = RedisVersion::of_patch(4, 0, 10);
    /// Redis version 5.0.0
    pub const V5_0_0: RedisVersion = RedisVersion::of_patch(5, 0, 0);
    /// Redis version 5.0.3
    pub const V5_0_3: RedisVersion = RedisVersion::of_patch(5, 0, 3);
    /// Redis version 5.0.4
    pub const V5_0_4: RedisVersion = RedisVersion::of_patch(5, 0, 4);
    /// Redis version 5.0.5
    pub const V5_0_5: RedisVersion = RedisVersion::of_patch(5, 0, 5);
    /// Redis version 5.0.6
    pub const V5_0_6: RedisVersion = RedisVersion::of_patch(5, 0, 6);
    /// Redis version 6.0
    pub const V6_0: RedisVersion = RedisVersion::of(6, 0);
    /// Redis version 6.2
    pub const V6_2: RedisVersion = RedisVersion::of(6, 2);

    /// Custom version without a patch component
    #[inline]
    #[must_use]
    pub const fn of(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Custom version with a patch component
    #[inline]
    #[must_use]
    pub const fn of_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Major version number
    #[inline]
    #[must_use]
    pub const fn major(self) -> u32 {
        self.major
    }

    /// Minor version number
    #[inline]
    #[must_use]
    pub const fn minor(self) -> u32 {
        self.minor
    }

    /// Patch version number, if any
    #[inline]
    #[must_use]
    pub const fn patch(self) -> Option<u32> {
        self.patch
    }

    /// Whether `self` is the same release as `other` or a later one
    #[must_use]
    pub fn is_newer_or_same(self, other: RedisVersion) -> bool {
        (self.major, self.minor, self.patch.unwrap_or(0))
            >= (other.major, other.minor, other.patch.unwrap_or(0))
    }

    /// At-rest encryption: 3.2.6 exactly, and every 4.0+ release
    #[must_use]
    pub fn supports_at_rest_encryption(self) -> bool {
        self == Self::V3_2_6 || self.major >= 4
    }

    /// Cluster mode (sharding) support
    #[inline]
    #[must_use]
    pub fn supports_cluster_mode(self) -> bool {
        self.major >= 3
    }

    /// Automatic minor version upgrades
    #[inline]
    #[must_use]
    pub fn supports_auto_minor_version_upgrade(self) -> bool {
        self.major >= 6
    }

    /// Data tiering to SSD (6.2 and up)
    #[must_use]
    pub fn supports_data_tiering(self) -> bool {
        (self.major == 6 && self.minor >= 2) || self.major > 6
    }

    /// Engine-log delivery (6.2 and up)
    #[must_use]
    pub fn supports_engine_log(self) -> bool {
        (self.major == 6 && self.minor >= 2) || self.major > 6
    }

    /// Slow-log delivery (6.0 and up)
    #[inline]
    #[must_use]
    pub fn supports_slow_log(self) -> bool {
        self.major >= 6
    }

    /// The parameter-group family this release configures against
    ///
    /// Resolution is highest-match-first over the release lines.
    #[must_use]
    pub fn family(self) -> EngineFamily {
        if self.is_newer_or_same(Self::V6_0) {
            EngineFamily::Redis6X
        } else if self.is_newer_or_same(Self::V5_0_0) {
            EngineFamily::Redis5_0
        } else if self.is_newer_or_same(RedisVersion::of(4, 0)) {
            EngineFamily::Redis4_0
        } else if self.is_newer_or_same(RedisVersion::of(3, 2)) {
            EngineFamily::Redis3_2
        } else if self.is_newer_or_same(RedisVersion::of(2, 8)) {
            EngineFamily::Redis2_8
        } else {
            EngineFamily::Redis2_6
        }
    }

    /// Name of the platform-provided default parameter group
    ///
    /// Cluster-mode groups carry the `.cluster.on` suffix; versions
    /// without cluster-mode support never do.
    #[must_use]
    pub fn default_parameter_group_name(self, cluster_mode: bool) -> String {
        let family = self.family();
        if cluster_mode && self.supports_cluster_mode() {
            format!("default.{}.cluster.on", family.id())
        } else {
            format!("default.{}", family.id())
        }
    }
}

impl Display for RedisVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// A Memcached engine release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemcachedVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

impl MemcachedVersion {
    /// Memcached version 1.4.5
    pub const V1_4_5: MemcachedVersion = MemcachedVersion::of(1, 4, 5);
    /// Memcached version 1.4.14
    pub const V1_4_14: MemcachedVersion = MemcachedVersion::of(1, 4, 14);
    /// Memcached version 1.4.24
    pub const V1_4_24: MemcachedVersion = MemcachedVersion::of(1, 4, 24);
    /// Memcached version 1.4.33
    pub const V1_4_33: MemcachedVersion = MemcachedVersion::of(1, 4, 33);
    /// Memcached version 1.4.34
    pub const V1_4_34: MemcachedVersion = MemcachedVersion::of(1, 4, 34);
    /// Memcached version 1.5.10
    pub const V1_5_10: MemcachedVersion = MemcachedVersion::of(1, 5, 10);
    /// Memcached version 1.5.16
    pub const V1_5_16: MemcachedVersion = MemcachedVersion::of(1, 5, 16);
    /// Memcached version 1.6.6
    pub const V1_6_6: MemcachedVersion = MemcachedVersion::of(1, 6, 6);
    /// Memcached version 1.6.12
    pub const V1_6_12: MemcachedVersion = MemcachedVersion::of(1, 6, 12);

    /// Custom version
    #[inline]
    #[must_use]
    pub const fn of(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The parameter-group family this release configures against
    #[must_use]
    pub fn family(self) -> EngineFamily {
        if self.minor >= 6 {
            EngineFamily::Memcached1_6
        } else if self.minor >= 5 {
            EngineFamily::Memcached1_5
        } else {
            EngineFamily::Memcached1_4
        }
    }

    /// Name of the platform-provided default parameter group
    #[must_use]
    pub fn default_parameter_group_name(self) -> String {
        format!("default.{}", self.family().id())
    }
}

impl Display for MemcachedVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn version_display() {
        assert_eq!(RedisVersion::V2_6_13.to_string(), "2.6.13");
        assert_eq!(RedisVersion::V6_2.to_string(), "6.2");
        assert_eq!(MemcachedVersion::V1_5_16.to_string(), "1.5.16");
    }

    #[test]
    fn ordering_is_lexicographic_over_components() {
        assert!(RedisVersion::V6_0.is_newer_or_same(RedisVersion::V5_0_6));
        assert!(RedisVersion::V5_0_6.is_newer_or_same(RedisVersion::V5_0_6));
        assert!(!RedisVersion::V2_8_19.is_newer_or_same(RedisVersion::V3_2_4));
        // a missing patch component compares as zero
        assert!(RedisVersion::V6_0.is_newer_or_same(RedisVersion::of_patch(6, 0, 0)));
    }

    #[test]
    fn family_resolves_highest_match_first() {
        assert_eq!(RedisVersion::V2_6_13.family(), EngineFamily::Redis2_6);
        assert_eq!(RedisVersion::V2_8_24.family(), EngineFamily::Redis2_8);
        assert_eq!(RedisVersion::V3_2_10.family(), EngineFamily::Redis3_2);
        assert_eq!(RedisVersion::V4_0_10.family(), EngineFamily::Redis4_0);
        assert_eq!(RedisVersion::V5_0_6.family(), EngineFamily::Redis5_0);
        assert_eq!(RedisVersion::V6_0.family(), EngineFamily::Redis6X);
        assert_eq!(RedisVersion::V6_2.family(), EngineFamily::Redis6X);
    }

    #[test]
    fn memcached_family_by_minor_line() {
        assert_eq!(MemcachedVersion::V1_4_34.family(), EngineFamily::Memcached1_4);
        assert_eq!(MemcachedVersion::V1_5_10.family(), EngineFamily::Memcached1_5);
        assert_eq!(MemcachedVersion::V1_6_12.family(), EngineFamily::Memcached1_6);
    }

    #[test]
    fn default_parameter_group_names() {
        assert_eq!(
            RedisVersion::V6_2.default_parameter_group_name(false),
            "default.redis6.x"
        );
        assert_eq!(
            RedisVersion::V6_2.default_parameter_group_name(true),
            "default.redis6.x.cluster.on"
        );
        // 2.6 has no cluster mode, the suffix is never emitted
        assert_eq!(
            RedisVersion::V2_6_13.default_parameter_group_name(true),
            "default.redis2.6"
        );
        assert_eq!(
            MemcachedVersion::V1_6_6.default_parameter_group_name(),
            "default.memcached1.6"
        );
    }

    #[test]
    fn capability_predicates() {
        assert!(RedisVersion::V3_2_6.supports_at_rest_encryption());
        assert!(!RedisVersion::V3_2_4.supports_at_rest_encryption());
        assert!(RedisVersion::V4_0_10.supports_at_rest_encryption());
        assert!(RedisVersion::V3_2_4.supports_cluster_mode());
        assert!(!RedisVersion::V2_8_24.supports_cluster_mode());
        assert!(RedisVersion::V6_2.supports_data_tiering());
        assert!(!RedisVersion::V6_0.supports_data_tiering());
        assert!(RedisVersion::V6_0.supports_slow_log());
        assert!(!RedisVersion::V6_0.supports_engine_log());
        assert!(RedisVersion::V6_2.supports_engine_log());
    }
}
