//! Parameter-group resources
//!
//! The record that carries a serialized [`ParameterSet`] into the
//! provisioning template: the family identifier, a description, and
//! the flat property map of non-default values.

use cacheforge_params::{ParameterError, ParameterSet};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parameter-group resource record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterGroupResource {
    /// Family the properties were validated against
    pub cache_parameter_group_family: String,
    /// Free-form description shown by the provisioning engine
    pub description: String,
    /// Non-default parameter values, hyphenated keys
    pub properties: IndexMap<String, String>,
}

impl ParameterGroupResource {
    /// Build the record from a validated parameter set
    ///
    /// Serialization runs here; a rename-map entry naming an unknown
    /// command surfaces as [`ParameterError::InvalidCommand`].
    pub fn from_parameters(
        parameters: &ParameterSet,
        description: impl Into<String>,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            cache_parameter_group_family: parameters.family_id().to_string(),
            description: description.into(),
            properties: parameters.to_properties()?,
        })
    }
}
