//! End-to-end parameter-group scenarios across the family chain.
//!
//! Exercises the full construct flow a resource definition runs:
//! build a parameter set for a family, validate it, serialize it, and
//! check what the provisioning layer would receive.

use cacheforge_engine::{EngineFamily, RedisVersion};
use cacheforge_params::{
    schema, AppendFsync, KeyspaceEventSet, ParamValue, ParameterError, ParameterSet, RenameMap,
};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn props(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[test]
fn redis_2_6_override_scenario() {
    let set = ParameterSet::new(
        EngineFamily::Redis2_6,
        [
            ("appendonly", ParamValue::from(true)),
            ("appendfsync", AppendFsync::Always.into()),
            ("activerehashing", false.into()),
        ],
    )
    .unwrap();

    assert_eq!(set.family_id(), "redis2.6");
    assert_eq!(
        set.to_properties().unwrap(),
        props(&[
            ("appendonly", "yes"),
            ("appendfsync", "always"),
            ("activerehashing", "no"),
        ])
    );
}

#[test]
fn all_defaults_serialize_to_nothing() {
    for family in EngineFamily::ALL {
        let set = ParameterSet::new(family, schema::default_values(family)).unwrap();
        assert_eq!(
            set.to_properties().unwrap(),
            IndexMap::<String, String>::new(),
            "family {family}"
        );
    }
}

#[test]
fn schema_tables_are_structurally_sound() {
    schema::verify_families().unwrap();
    for family in EngineFamily::ALL {
        assert_eq!(
            schema::recognized_keys(family).len(),
            schema::defaults_for(family).len(),
            "family {family}"
        );
    }
}

#[test]
fn version_resolution_feeds_the_right_schema() {
    // a 6.2 cluster validates against the redis6.x table, where the
    // 5.0-era keys removed in 6.0 are no longer recognized
    let family = RedisVersion::V6_2.family();
    assert_eq!(family, EngineFamily::Redis6X);

    let err = ParameterSet::new(family, [("luaReplicateCommands", ParamValue::from(true))])
        .unwrap_err();
    assert!(matches!(err, ParameterError::UnrecognizedKey { .. }));

    let set = ParameterSet::new(family, [("activeExpireEffort", ParamValue::from(3))]).unwrap();
    assert_eq!(
        set.to_properties().unwrap(),
        props(&[("active-expire-effort", "3")])
    );
}

#[test]
fn rename_commands_full_flow() {
    let renames = RenameMap::new()
        .rename("flushall", "blocked")
        .rename("get", "g");
    let set = ParameterSet::new(
        EngineFamily::Redis5_0,
        [("renameCommands", ParamValue::from(renames))],
    )
    .unwrap();

    assert_eq!(
        set.to_properties().unwrap(),
        props(&[("rename-commands", "flushall blocked get g")])
    );
}

#[test]
fn notify_keyspace_events_full_flow() {
    let events = KeyspaceEventSet::KEYSPACE | KeyspaceEventSet::EXPIRED | KeyspaceEventSet::EVICTED;
    let set = ParameterSet::new(
        EngineFamily::Redis6X,
        [("notifyKeyspaceEvents", ParamValue::from(events))],
    )
    .unwrap();

    assert_eq!(
        set.to_properties().unwrap(),
        props(&[("notify-keyspace-events", "Kxe")])
    );
}

#[test]
fn mixed_defaults_and_overrides_emit_only_overrides() {
    let set = ParameterSet::new(
        EngineFamily::Redis4_0,
        [
            // default-equal, suppressed
            ("lfuLogFactor", ParamValue::from(10)),
            ("activedefrag", false.into()),
            // overridden, emitted
            ("lfuDecayTime", 2.into()),
            ("protoMaxBulkLen", 268_435_456.into()),
        ],
    )
    .unwrap();

    assert_eq!(
        set.to_properties().unwrap(),
        props(&[
            ("lfu-decay-time", "2"),
            ("proto-max-bulk-len", "268435456"),
        ])
    );
}

#[test]
fn construction_failures_name_the_offending_key() {
    let err = ParameterSet::new(
        EngineFamily::Redis2_6,
        [("clientOutputBufferLimitSlaveSoftLimit", ParamValue::from(100))],
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "non-modifiable parameter `clientOutputBufferLimitSlaveSoftLimit` \
         was specified for family redis2.6"
    );

    let err = ParameterSet::new(EngineFamily::Memcached1_6, [("modern", ParamValue::from(false))])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "parameter `modern` is not recognized by family memcached1.6"
    );
}
