//! Parameter-group families
//!
//! A family names one configuration schema version of a cache engine.
//! Families form a single-inheritance chain: every family except the
//! chain root designates exactly one parent whose recognized keys and
//! defaults it inherits.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The cache engine a family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Redis-compatible engine
    Redis,
    /// Memcached engine
    Memcached,
}

impl Engine {
    /// Engine name as used in provisioning templates
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Engine::Redis => "redis",
            Engine::Memcached => "memcached",
        }
    }
}

impl Display for Engine {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter-group family, one per supported engine release line
///
/// Each family inherits the recognized keys and defaults of its
/// [`parent`](EngineFamily::parent), then adds, overrides or deprecates
/// keys of its own. The chain is acyclic and terminates at a root
/// family with no parent (`redis2.6` for Redis, `memcached1.4` for
/// Memcached).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineFamily {
    /// `redis2.6` — the Redis chain root
    Redis2_6,
    /// `redis2.8`
    Redis2_8,
    /// `redis3.2`
    Redis3_2,
    /// `redis4.0`
    Redis4_0,
    /// `redis5.0`
    Redis5_0,
    /// `redis6.x`
    Redis6X,
    /// `memcached1.4` — the Memcached chain root
    Memcached1_4,
    /// `memcached1.5`
    Memcached1_5,
    /// `memcached1.6`
    Memcached1_6,
}

impl EngineFamily {
    /// All supported families, chain order
    pub const ALL: [EngineFamily; 9] = [
        EngineFamily::Redis2_6,
        EngineFamily::Redis2_8,
        EngineFamily::Redis3_2,
        EngineFamily::Redis4_0,
        EngineFamily::Redis5_0,
        EngineFamily::Redis6X,
        EngineFamily::Memcached1_4,
        EngineFamily::Memcached1_5,
        EngineFamily::Memcached1_6,
    ];

    /// Family identifier as reported to the provisioning engine
    /// (`cacheParameterGroupFamily`)
    #[inline]
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            EngineFamily::Redis2_6 => "redis2.6",
            EngineFamily::Redis2_8 => "redis2.8",
            EngineFamily::Redis3_2 => "redis3.2",
            EngineFamily::Redis4_0 => "redis4.0",
            EngineFamily::Redis5_0 => "redis5.0",
            EngineFamily::Redis6X => "redis6.x",
            EngineFamily::Memcached1_4 => "memcached1.4",
            EngineFamily::Memcached1_5 => "memcached1.5",
            EngineFamily::Memcached1_6 => "memcached1.6",
        }
    }

    /// The engine this family configures
    #[inline]
    #[must_use]
    pub fn engine(self) -> Engine {
        match self {
            EngineFamily::Redis2_6
            | EngineFamily::Redis2_8
            | EngineFamily::Redis3_2
            | EngineFamily::Redis4_0
            | EngineFamily::Redis5_0
            | EngineFamily::Redis6X => Engine::Redis,
            EngineFamily::Memcached1_4 | EngineFamily::Memcached1_5 | EngineFamily::Memcached1_6 => {
                Engine::Memcached
            }
        }
    }

    /// Parent family, or `None` for a chain root
    #[inline]
    #[must_use]
    pub fn parent(self) -> Option<EngineFamily> {
        match self {
            EngineFamily::Redis2_6 => None,
            EngineFamily::Redis2_8 => Some(EngineFamily::Redis2_6),
            EngineFamily::Redis3_2 => Some(EngineFamily::Redis2_8),
            EngineFamily::Redis4_0 => Some(EngineFamily::Redis3_2),
            EngineFamily::Redis5_0 => Some(EngineFamily::Redis4_0),
            EngineFamily::Redis6X => Some(EngineFamily::Redis5_0),
            EngineFamily::Memcached1_4 => None,
            EngineFamily::Memcached1_5 => Some(EngineFamily::Memcached1_4),
            EngineFamily::Memcached1_6 => Some(EngineFamily::Memcached1_5),
        }
    }

    /// Ancestor chain including `self`, ordered root first
    #[must_use]
    pub fn ancestry(self) -> Vec<EngineFamily> {
        let mut chain = vec![self];
        let mut current = self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }
}

impl Display for EngineFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error parsing a family identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FamilyError {
    /// Identifier does not name a supported family
    #[error("unknown parameter-group family: '{0}'")]
    Unknown(String),
}

impl FromStr for EngineFamily {
    type Err = FamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineFamily::ALL
            .iter()
            .copied()
            .find(|family| family.id() == s)
            .ok_or_else(|| FamilyError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_for_all_families() {
        for family in EngineFamily::ALL {
            assert_eq!(family.id().parse::<EngineFamily>(), Ok(family));
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "redis9.9".parse::<EngineFamily>().unwrap_err();
        assert_eq!(err, FamilyError::Unknown("redis9.9".to_string()));
    }

    #[test]
    fn redis_chain_roots_at_2_6() {
        let chain = EngineFamily::Redis6X.ancestry();
        assert_eq!(
            chain,
            vec![
                EngineFamily::Redis2_6,
                EngineFamily::Redis2_8,
                EngineFamily::Redis3_2,
                EngineFamily::Redis4_0,
                EngineFamily::Redis5_0,
                EngineFamily::Redis6X,
            ]
        );
    }

    #[test]
    fn memcached_chain_roots_at_1_4() {
        let chain = EngineFamily::Memcached1_6.ancestry();
        assert_eq!(
            chain,
            vec![
                EngineFamily::Memcached1_4,
                EngineFamily::Memcached1_5,
                EngineFamily::Memcached1_6,
            ]
        );
    }

    #[test]
    fn roots_have_no_parent() {
        assert_eq!(EngineFamily::Redis2_6.parent(), None);
        assert_eq!(EngineFamily::Memcached1_4.parent(), None);
    }

    #[test]
    fn chains_are_acyclic() {
        // ancestry() terminates for every family and never revisits a node
        for family in EngineFamily::ALL {
            let chain = family.ancestry();
            let mut seen = std::collections::HashSet::new();
            for f in &chain {
                assert!(seen.insert(*f), "cycle through {f}");
            }
        }
    }

    #[test]
    fn engines_partition_the_families() {
        assert_eq!(EngineFamily::Redis2_6.engine(), Engine::Redis);
        assert_eq!(EngineFamily::Memcached1_6.engine(), Engine::Memcached);
        assert_eq!(Engine::Redis.as_str(), "redis");
    }
}
