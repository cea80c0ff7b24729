//! Parameter values
//!
//! [`ParamValue`] is the typed value domain of every parameter a
//! caller can set, together with the transform into the flat string
//! form the provisioning engine consumes.

use crate::enums::{AppendFsync, BindingProtocol, HashAlgorithm, MaxMemoryPolicy, PubSubAcl};
use crate::error::ParameterError;
use crate::events::KeyspaceEventSet;
use crate::rename::RenameMap;
use serde::{Deserialize, Serialize};

/// A typed parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Boolean, emitted as `yes` / `no`
    Bool(bool),
    /// Integer, emitted in decimal form
    Int(i64),
    /// Floating point, emitted in decimal form
    Float(f64),
    /// Free or enumerated string, emitted verbatim
    Str(String),
    /// Keyspace-event flags, emitted as the fixed-order character string
    KeyspaceEvents(KeyspaceEventSet),
    /// Command renames, emitted as space-joined `<name> <newName>` pairs
    RenameCommands(RenameMap),
}

impl ParamValue {
    /// Render into the string form used in the emitted property map
    ///
    /// Rename maps are the one value kind whose validation happens
    /// here rather than at parameter-set construction: membership in
    /// the renamable-command set is only checked when the map is
    /// expanded.
    pub(crate) fn to_property_string(&self) -> Result<String, ParameterError> {
        Ok(match self {
            ParamValue::Bool(true) => "yes".to_string(),
            ParamValue::Bool(false) => "no".to_string(),
            ParamValue::Int(n) => n.to_string(),
            ParamValue::Float(x) => x.to_string(),
            ParamValue::Str(s) => s.clone(),
            ParamValue::KeyspaceEvents(set) => set.to_config_string(),
            ParamValue::RenameCommands(map) => map.to_config_string()?,
        })
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<KeyspaceEventSet> for ParamValue {
    fn from(value: KeyspaceEventSet) -> Self {
        ParamValue::KeyspaceEvents(value)
    }
}

impl From<RenameMap> for ParamValue {
    fn from(value: RenameMap) -> Self {
        ParamValue::RenameCommands(value)
    }
}

impl From<AppendFsync> for ParamValue {
    fn from(value: AppendFsync) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<MaxMemoryPolicy> for ParamValue {
    fn from(value: MaxMemoryPolicy) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<PubSubAcl> for ParamValue {
    fn from(value: PubSubAcl) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<BindingProtocol> for ParamValue {
    fn from(value: BindingProtocol) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}

impl From<HashAlgorithm> for ParamValue {
    fn from(value: HashAlgorithm) -> Self {
        ParamValue::Str(value.as_str().to_string())
    }
}
