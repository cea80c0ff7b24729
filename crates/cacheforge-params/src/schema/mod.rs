//! Per-family parameter schemas
//!
//! Every family carries a declarative table of entries: a declaration
//! introduces (or re-introduces) a key with its modifiability and
//! default, a deprecation removes an inherited key from the family and
//! its descendants. The effective schema of a family is computed by
//! walking its ancestor chain root to leaf and folding the tables.

mod memcached;
mod redis;

use crate::error::SchemaError;
use crate::value::ParamValue;
use cacheforge_engine::EngineFamily;
use indexmap::{IndexMap, IndexSet};

/// The canonical default of a recognized key
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// A concrete platform default; values equal to it are suppressed
    /// from emitted output
    Static(ParamValue),
    /// Node-type dependent; the platform derives the value from the
    /// hardware and this crate never suppresses it on equality
    External,
}

/// A key declaration inside one family's table
#[derive(Debug, Clone, PartialEq)]
pub struct KeyDecl {
    /// Camel-case key name
    pub key: &'static str,
    /// Whether callers may supply a value for this key
    pub modifiable: bool,
    /// Canonical default
    pub default: DefaultValue,
}

/// One entry in a family's declaration table
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SchemaEntry {
    /// Introduce or re-declare a key at this family
    Declare(KeyDecl),
    /// Remove an inherited key from this family and its descendants
    Deprecate(&'static str),
}

/// Modifiable key with a static default
pub(crate) fn param(key: &'static str, default: impl Into<ParamValue>) -> SchemaEntry {
    SchemaEntry::Declare(KeyDecl {
        key,
        modifiable: true,
        default: DefaultValue::Static(default.into()),
    })
}

/// Non-modifiable key with a static default
pub(crate) fn fixed(key: &'static str, default: impl Into<ParamValue>) -> SchemaEntry {
    SchemaEntry::Declare(KeyDecl {
        key,
        modifiable: false,
        default: DefaultValue::Static(default.into()),
    })
}

/// Non-modifiable key whose default the platform derives from the node type
pub(crate) fn node_dependent(key: &'static str) -> SchemaEntry {
    SchemaEntry::Declare(KeyDecl {
        key,
        modifiable: false,
        default: DefaultValue::External,
    })
}

/// Deprecation of an inherited key
pub(crate) fn removed(key: &'static str) -> SchemaEntry {
    SchemaEntry::Deprecate(key)
}

/// Declaration table for one family, own entries only
fn declarations(family: EngineFamily) -> &'static [SchemaEntry] {
    match family {
        EngineFamily::Redis2_6 => &redis::REDIS2_6,
        EngineFamily::Redis2_8 => &redis::REDIS2_8,
        EngineFamily::Redis3_2 => &redis::REDIS3_2,
        EngineFamily::Redis4_0 => &redis::REDIS4_0,
        EngineFamily::Redis5_0 => &redis::REDIS5_0,
        EngineFamily::Redis6X => &redis::REDIS6_X,
        EngineFamily::Memcached1_4 => &memcached::MEMCACHED1_4,
        EngineFamily::Memcached1_5 => &memcached::MEMCACHED1_5,
        EngineFamily::Memcached1_6 => &memcached::MEMCACHED1_6,
    }
}

/// Effective schema of a family: every recognized key mapped to the
/// declaration that currently governs it
///
/// Computed fresh on each call by folding the ancestor chain; pure and
/// independent of call order.
#[must_use]
pub fn effective_schema(family: EngineFamily) -> IndexMap<&'static str, &'static KeyDecl> {
    let mut schema = IndexMap::new();
    for ancestor in family.ancestry() {
        for entry in declarations(ancestor) {
            match entry {
                SchemaEntry::Declare(decl) => {
                    schema.insert(decl.key, decl);
                }
                SchemaEntry::Deprecate(key) => {
                    schema.shift_remove(key);
                }
            }
        }
    }
    schema
}

/// The set of keys a family recognizes
#[must_use]
pub fn recognized_keys(family: EngineFamily) -> IndexSet<&'static str> {
    effective_schema(family).keys().copied().collect()
}

/// The subset of recognized keys callers may never supply
#[must_use]
pub fn non_modifiable_keys(family: EngineFamily) -> IndexSet<&'static str> {
    effective_schema(family)
        .iter()
        .filter(|(_, decl)| !decl.modifiable)
        .map(|(key, _)| *key)
        .collect()
}

/// Keys inherited from an ancestor but deprecated at or below `family`
/// and not re-declared since
#[must_use]
pub fn deprecated_keys(family: EngineFamily) -> IndexSet<&'static str> {
    let mut dropped = IndexSet::new();
    for ancestor in family.ancestry() {
        for entry in declarations(ancestor) {
            match entry {
                SchemaEntry::Declare(decl) => {
                    dropped.shift_remove(decl.key);
                }
                SchemaEntry::Deprecate(key) => {
                    dropped.insert(*key);
                }
            }
        }
    }
    dropped
}

/// Total default table of a family: every recognized key mapped to its
/// canonical default
#[must_use]
pub fn defaults_for(family: EngineFamily) -> IndexMap<&'static str, &'static DefaultValue> {
    effective_schema(family)
        .into_iter()
        .map(|(key, decl)| (key, &decl.default))
        .collect()
}

/// The modifiable static defaults of a family as a ready-to-use value bag
///
/// Non-modifiable keys are omitted (their presence in caller input is a
/// construction error) and so are node-type-dependent keys (they have
/// no static value to take).
#[must_use]
pub fn default_values(family: EngineFamily) -> IndexMap<&'static str, ParamValue> {
    effective_schema(family)
        .into_iter()
        .filter(|(_, decl)| decl.modifiable)
        .filter_map(|(key, decl)| match &decl.default {
            DefaultValue::Static(value) => Some((key, value.clone())),
            DefaultValue::External => None,
        })
        .collect()
}

/// Check the structural invariants of every family table
///
/// Detects duplicate declarations within one family, deprecations of
/// keys no ancestor declares, and recognized keys without a default.
/// A defect here is an authoring bug in this crate, never a caller
/// error.
pub fn verify_families() -> Result<(), SchemaError> {
    for family in EngineFamily::ALL {
        let mut inherited: IndexSet<&'static str> = family
            .parent()
            .map(|parent| recognized_keys(parent))
            .unwrap_or_default();

        let mut declared_here: IndexSet<&'static str> = IndexSet::new();
        for entry in declarations(family) {
            match entry {
                SchemaEntry::Declare(decl) => {
                    if !declared_here.insert(decl.key) {
                        return Err(SchemaError::DuplicateDeclaration {
                            family,
                            key: decl.key,
                        });
                    }
                    inherited.insert(decl.key);
                }
                SchemaEntry::Deprecate(key) => {
                    if !inherited.shift_remove(key) {
                        return Err(SchemaError::UnknownDeprecation { family, key: *key });
                    }
                }
            }
        }

        let defaults = defaults_for(family);
        for key in recognized_keys(family) {
            if !defaults.contains_key(key) {
                return Err(SchemaError::MissingDefault { family, key });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AppendFsync;
    use pretty_assertions::assert_eq;

    #[test]
    fn families_verify_clean() {
        verify_families().unwrap();
    }

    #[test]
    fn every_recognized_key_has_a_default() {
        // inheritance completeness: the default table is total
        for family in EngineFamily::ALL {
            assert_eq!(
                recognized_keys(family).len(),
                defaults_for(family).len(),
                "defaults not total for {family}"
            );
        }
    }

    #[test]
    fn redis_2_6_recognizes_its_root_keys() {
        let keys = recognized_keys(EngineFamily::Redis2_6);
        assert!(keys.contains("appendonly"));
        assert!(keys.contains("clientOutputBufferLimitNormalHardLimit"));
        assert!(keys.contains("zsetMaxZiplistValue"));
        assert!(!keys.contains("notifyKeyspaceEvents"));
        assert!(!keys.contains("renameCommands"));
    }

    #[test]
    fn descendants_inherit_ancestor_keys() {
        let keys = recognized_keys(EngineFamily::Redis6X);
        // declared at 2.6, still recognized at 6.x
        assert!(keys.contains("databases"));
        // declared at 2.8
        assert!(keys.contains("notifyKeyspaceEvents"));
        // declared at 6.x itself
        assert!(keys.contains("aclPubsubDefault"));
    }

    #[test]
    fn deprecation_removes_keys_from_descendants() {
        // appendonly exists through 2.8, is gone from 3.2 on
        assert!(recognized_keys(EngineFamily::Redis2_8).contains("appendonly"));
        for family in [
            EngineFamily::Redis3_2,
            EngineFamily::Redis4_0,
            EngineFamily::Redis5_0,
            EngineFamily::Redis6X,
        ] {
            let keys = recognized_keys(family);
            assert!(!keys.contains("appendonly"), "{family} still has appendonly");
            assert!(!keys.contains("appendfsync"), "{family} still has appendfsync");
        }
        assert!(deprecated_keys(EngineFamily::Redis3_2).contains("appendonly"));
    }

    #[test]
    fn slave_spellings_are_renamed_at_5_0() {
        let keys_4_0 = recognized_keys(EngineFamily::Redis4_0);
        assert!(keys_4_0.contains("slaveLazyFlush"));
        assert!(keys_4_0.contains("minSlavesToWrite"));

        let keys_5_0 = recognized_keys(EngineFamily::Redis5_0);
        assert!(!keys_5_0.contains("slaveLazyFlush"));
        assert!(!keys_5_0.contains("minSlavesToWrite"));
        assert!(keys_5_0.contains("replicaLazyFlush"));
        assert!(keys_5_0.contains("minReplicasToWrite"));
    }

    #[test]
    fn redeclaration_overrides_inherited_decl() {
        // activerehashing is modifiable at 2.6 but platform-fixed from 3.2
        assert!(!non_modifiable_keys(EngineFamily::Redis2_6).contains("activerehashing"));
        assert!(non_modifiable_keys(EngineFamily::Redis3_2).contains("activerehashing"));

        // tcp-keepalive default moves from 0 to 300 at 3.2
        let d26 = defaults_for(EngineFamily::Redis2_6);
        let d32 = defaults_for(EngineFamily::Redis3_2);
        assert_eq!(d26["tcpKeepalive"], &DefaultValue::Static(ParamValue::Int(0)));
        assert_eq!(d32["tcpKeepalive"], &DefaultValue::Static(ParamValue::Int(300)));
    }

    #[test]
    fn redis_6_drops_the_removed_5_0_keys() {
        let keys = recognized_keys(EngineFamily::Redis6X);
        assert!(!keys.contains("luaReplicateCommands"));
        assert!(!keys.contains("replicaIgnoreMaxmemory"));
        assert!(!keys.contains("replTimeout"));
    }

    #[test]
    fn node_dependent_keys_have_external_defaults() {
        let defaults = defaults_for(EngineFamily::Redis2_6);
        assert_eq!(defaults["maxmemory"], &DefaultValue::External);
        assert_eq!(
            defaults["clientOutputBufferLimitSlaveHardLimit"],
            &DefaultValue::External
        );
        // and never appear in the static value bag
        assert!(!default_values(EngineFamily::Redis2_6).contains_key("maxmemory"));
    }

    #[test]
    fn default_values_exclude_non_modifiable_keys() {
        let values = default_values(EngineFamily::Redis2_6);
        assert!(!values.contains_key("maxclients"));
        assert!(!values.contains_key("luaTimeLimit"));
        assert_eq!(values["appendfsync"], ParamValue::from(AppendFsync::EverySecond));
        assert_eq!(values["databases"], ParamValue::Int(16));
    }

    #[test]
    fn memcached_1_6_adds_nothing_of_its_own() {
        assert_eq!(
            recognized_keys(EngineFamily::Memcached1_5),
            recognized_keys(EngineFamily::Memcached1_6)
        );
    }

    #[test]
    fn memcached_1_5_replaces_modern() {
        assert!(recognized_keys(EngineFamily::Memcached1_4).contains("modern"));
        let keys = recognized_keys(EngineFamily::Memcached1_5);
        assert!(!keys.contains("modern"));
        assert!(keys.contains("noModern"));
        assert!(keys.contains("inlineAsciiResp"));
    }

    #[test]
    fn results_do_not_depend_on_call_order() {
        let first = effective_schema(EngineFamily::Redis5_0);
        let _ = effective_schema(EngineFamily::Memcached1_6);
        let _ = effective_schema(EngineFamily::Redis2_6);
        let again = effective_schema(EngineFamily::Redis5_0);
        assert_eq!(first, again);
    }
}
