//! Command renaming
//!
//! The `rename-commands` parameter lets operators rename potentially
//! dangerous or expensive commands (FLUSHALL, KEYS, ...). Only commands
//! from a fixed platform-approved set may be renamed; the keyword
//! `blocked` as the new name disables a command entirely.

use crate::error::ParameterError;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The closed set of renamable command names
static RENAMEABLE_COMMANDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        "append",
        "auth",
        "bitcount",
        "bitfield",
        "bitop",
        "bitpos",
        "blpop",
        "brpop",
        "brpoplpush",
        "bzpopmin",
        "bzpopmax",
        "client",
        "cluster",
        "command",
        "dbsize",
        "decr",
        "decrby",
        "del",
        "discard",
        "dump",
        "echo",
        "eval",
        "evalsha",
        "exec",
        "exists",
        "expire",
        "expireat",
        "flushall",
        "flushdb",
        "geoadd",
        "geohash",
        "geopos",
        "geodist",
        "georadius",
        "georadiusbymember",
        "get",
        "getbit",
        "getrange",
        "getset",
        "hdel",
        "hexists",
        "hget",
        "hgetall",
        "hincrby",
        "hincrbyfloat",
        "hkeys",
        "hlen",
        "hmget",
        "hmset",
        "hset",
        "hsetnx",
        "hstrlen",
        "hvals",
        "incr",
        "incrby",
        "incrbyfloat",
        "info",
        "keys",
        "lastsave",
        "lindex",
        "linsert",
        "llen",
        "lpop",
        "lpush",
        "lpushx",
        "lrange",
        "lrem",
        "lset",
        "ltrim",
        "memory",
        "mget",
        "monitor",
        "move",
        "mset",
        "msetnx",
        "multi",
        "object",
        "persist",
        "pexpire",
        "pexpireat",
        "pfadd",
        "pfcount",
        "pfmerge",
        "ping",
        "psetex",
        "psubscribe",
        "pubsub",
        "pttl",
        "publish",
        "punsubscribe",
        "randomkey",
        "readonly",
        "readwrite",
        "rename",
        "renamenx",
        "restore",
        "role",
        "rpop",
        "rpoplpush",
        "rpush",
        "rpushx",
        "sadd",
        "scard",
        "script",
        "sdiff",
        "sdiffstore",
        "select",
        "set",
        "setbit",
        "setex",
        "setnx",
        "setrange",
        "sinter",
        "sinterstore",
        "sismember",
        "slowlog",
        "smembers",
        "smove",
        "sort",
        "spop",
        "srandmember",
        "srem",
        "strlen",
        "subscribe",
        "sunion",
        "sunionstore",
        "swapdb",
        "time",
        "touch",
        "ttl",
        "type",
        "unsubscribe",
        "unlink",
        "unwatch",
        "wait",
        "watch",
        "zadd",
        "zcard",
        "zcount",
        "zincrby",
        "zinterstore",
        "zlexcount",
        "zpopmax",
        "zpopmin",
        "zrange",
        "zrangebylex",
        "zrevrangebylex",
        "zrangebyscore",
        "zrank",
        "zrem",
        "zremrangebylex",
        "zremrangebyrank",
        "zremrangebyscore",
        "zrevrange",
        "zrevrangebyscore",
        "zrevrank",
        "zscore",
        "zunionstore",
        "scan",
        "sscan",
        "hscan",
        "zscan",
        "xinfo",
        "xadd",
        "xtrim",
        "xdel",
        "xrange",
        "xrevrange",
        "xlen",
        "xread",
        "xgroup",
        "xreadgroup",
        "xack",
        "xclaim",
        "xpending",
        "georadius_ro",
        "georadiusbymember_ro",
        "lolwut",
        "xsetid",
        "substr",
    ]
    .into_iter()
    .collect()
});

/// Whether `command` belongs to the renamable set
#[must_use]
pub fn is_renamable(command: &str) -> bool {
    RENAMEABLE_COMMANDS.contains(command)
}

/// A command → new-name mapping for the `rename-commands` parameter
///
/// Entries keep their insertion order, which is also the emission
/// order. Membership of each command in the renamable set is checked
/// when the map is serialized, not when entries are added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenameMap(IndexMap<String, String>);

impl RenameMap {
    /// Empty map (the family default: nothing renamed)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Add a rename, builder style
    #[must_use]
    pub fn rename(mut self, command: impl Into<String>, new_name: impl Into<String>) -> Self {
        self.0.insert(command.into(), new_name.into());
        self
    }

    /// Number of renames
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no command is renamed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(command, new_name)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as the space-joined `<name> <newName>` wire form
    ///
    /// Fails with [`ParameterError::InvalidCommand`] if any entry names
    /// a command outside the renamable set.
    pub(crate) fn to_config_string(&self) -> Result<String, ParameterError> {
        let mut parts = Vec::with_capacity(self.0.len());
        for (command, new_name) in &self.0 {
            if !is_renamable(command) {
                return Err(ParameterError::InvalidCommand {
                    command: command.clone(),
                });
            }
            parts.push(format!("{command} {new_name}"));
        }
        Ok(parts.join(" "))
    }
}
