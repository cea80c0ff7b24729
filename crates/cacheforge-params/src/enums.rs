//! Enumerated parameter values
//!
//! Closed value domains for the string-typed parameters. Each variant
//! carries the exact token the provisioning engine expects.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// How often the append-only-file output buffer is flushed to disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppendFsync {
    /// The buffer is flushed once per second. This is the default.
    #[serde(rename = "everysec")]
    EverySecond,
    /// The buffer is flushed to disk on an as-needed basis.
    No,
    /// The buffer is flushed every time data in the cluster is modified.
    Always,
}

impl AppendFsync {
    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AppendFsync::EverySecond => "everysec",
            AppendFsync::No => "no",
            AppendFsync::Always => "always",
        }
    }
}

/// Eviction policy applied when maximum memory usage is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaxMemoryPolicy {
    /// Keeps most recently used keys; removes least recently used keys
    AllkeysLru,
    /// Removes least recently used keys with the expire field set
    VolatileLru,
    /// Keeps frequently used keys; removes least frequently used keys
    AllkeysLfu,
    /// Removes least frequently used keys with the expire field set
    VolatileLfu,
    /// Randomly removes keys to make space for the new data
    AllkeysRandom,
    /// Randomly removes keys with the expire field set
    VolatileRandom,
    /// Removes keys with the expire field set and the shortest remaining TTL
    VolatileTtl,
    /// New values are not saved when the memory limit is reached
    #[serde(rename = "noeviction")]
    NoEviction,
}

impl MaxMemoryPolicy {
    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MaxMemoryPolicy::AllkeysLru => "allkeys-lru",
            MaxMemoryPolicy::VolatileLru => "volatile-lru",
            MaxMemoryPolicy::AllkeysLfu => "allkeys-lfu",
            MaxMemoryPolicy::VolatileLfu => "volatile-lfu",
            MaxMemoryPolicy::AllkeysRandom => "allkeys-random",
            MaxMemoryPolicy::VolatileRandom => "volatile-random",
            MaxMemoryPolicy::VolatileTtl => "volatile-ttl",
            MaxMemoryPolicy::NoEviction => "noeviction",
        }
    }
}

/// Default pub/sub channel permissions for ACL users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PubSubAcl {
    /// Users may access all channels
    AllChannels,
    /// Users start with no channel permissions
    ResetChannels,
}

impl PubSubAcl {
    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PubSubAcl::AllChannels => "allchannels",
            PubSubAcl::ResetChannels => "resetchannels",
        }
    }
}

/// Memcached binding protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingProtocol {
    /// ASCII protocol only
    Ascii,
    /// Negotiated automatically
    Auto,
}

impl BindingProtocol {
    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BindingProtocol::Ascii => "ascii",
            BindingProtocol::Auto => "auto",
        }
    }
}

/// Memcached key hashing algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// Jenkins hash
    Jenkins,
    /// Murmur3 hash
    Murmur3,
}

impl HashAlgorithm {
    /// Wire token
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            HashAlgorithm::Jenkins => "jenkins",
            HashAlgorithm::Murmur3 => "murmur3",
        }
    }
}

macro_rules! display_via_as_str {
    ($($ty:ty),+) => {
        $(impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_via_as_str!(
    AppendFsync,
    MaxMemoryPolicy,
    PubSubAcl,
    BindingProtocol,
    HashAlgorithm
);
