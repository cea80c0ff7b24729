//! Parameter sets
//!
//! A [`ParameterSet`] holds the caller's explicit overrides for one
//! family. Validation happens once, at construction, and is
//! all-or-nothing: a set that fails validation is never observable.
//! Serialization into the flat property map can then run any number of
//! times without further caller-input errors, except for rename-map
//! expansion.

use crate::error::ParameterError;
use crate::key::hyphenate;
use crate::schema::{self, DefaultValue};
use crate::value::ParamValue;
use cacheforge_engine::EngineFamily;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// A validated, immutable set of parameter overrides for one family
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    family: EngineFamily,
    values: IndexMap<String, ParamValue>,
}

impl ParameterSet {
    /// Validate `values` against `family` and bind them
    ///
    /// Every key must belong to the family's recognized set and be
    /// modifiable; the first offending key fails the whole
    /// construction. Unknown keys are an error, never silently
    /// ignored.
    pub fn new<K, V, I>(family: EngineFamily, values: I) -> Result<Self, ParameterError>
    where
        K: Into<String>,
        V: Into<ParamValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let values: IndexMap<String, ParamValue> = values
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        let schema = schema::effective_schema(family);
        for key in values.keys() {
            match schema.get(key.as_str()) {
                None => {
                    return Err(ParameterError::UnrecognizedKey {
                        family,
                        key: key.clone(),
                    });
                }
                Some(decl) if !decl.modifiable => {
                    return Err(ParameterError::NonModifiableKey {
                        family,
                        key: key.clone(),
                    });
                }
                Some(_) => {}
            }
        }

        debug!(family = %family, overrides = values.len(), "parameter set validated");
        Ok(Self { family, values })
    }

    /// An empty set: every parameter at its platform default
    #[must_use]
    pub fn empty(family: EngineFamily) -> Self {
        Self {
            family,
            values: IndexMap::new(),
        }
    }

    /// The family this set is bound to
    #[inline]
    #[must_use]
    pub fn family(&self) -> EngineFamily {
        self.family
    }

    /// Family identifier for the `cacheParameterGroupFamily` field of
    /// the emitted resource
    #[inline]
    #[must_use]
    pub fn family_id(&self) -> &'static str {
        self.family.id()
    }

    /// The explicitly-set value for `key`, if any
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    /// Number of explicit overrides
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameter was overridden
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Serialize into the flat property map the provisioning layer consumes
    ///
    /// Only explicitly-set keys are considered. A value equal to the
    /// family's *static* default is suppressed; keys whose default is
    /// node-type dependent are always emitted when set. Output keys
    /// are the hyphenated wire names.
    pub fn to_properties(&self) -> Result<IndexMap<String, String>, ParameterError> {
        let defaults = schema::defaults_for(self.family);
        let mut properties = IndexMap::new();
        for (key, value) in &self.values {
            if let Some(DefaultValue::Static(default)) = defaults.get(key.as_str()) {
                if *default == *value {
                    trace!(family = %self.family, key, "suppressing default-equal value");
                    continue;
                }
            }
            properties.insert(hyphenate(key), value.to_property_string()?);
        }
        Ok(properties)
    }
}
