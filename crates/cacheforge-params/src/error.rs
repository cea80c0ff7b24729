//! Error types for parameter validation and serialization

use cacheforge_engine::EngineFamily;

/// Errors surfaced to callers constructing or serializing parameter sets
///
/// All failures are synchronous and final; nothing in this crate is
/// retried and no partial output is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    /// A supplied key is not in the family's recognized set
    #[error("parameter `{key}` is not recognized by family {family}")]
    UnrecognizedKey {
        /// Family the set was bound to
        family: EngineFamily,
        /// The offending key
        key: String,
    },

    /// A supplied key is recognized but fixed by the platform
    #[error("non-modifiable parameter `{key}` was specified for family {family}")]
    NonModifiableKey {
        /// Family the set was bound to
        family: EngineFamily,
        /// The offending key
        key: String,
    },

    /// A rename-map entry names a command outside the renamable set
    #[error("`{command}` is not a renamable command")]
    InvalidCommand {
        /// The command name that was rejected
        command: String,
    },
}

/// Structural defects in the schema tables themselves
///
/// These indicate an authoring bug in the per-family declarations, not
/// bad caller input; they are checked by [`crate::schema::verify_families`]
/// from the test suite.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A family declares the same key twice
    #[error("family {family} declares `{key}` more than once")]
    DuplicateDeclaration {
        /// Family whose table is defective
        family: EngineFamily,
        /// The doubly-declared key
        key: &'static str,
    },

    /// A family deprecates a key it never inherited
    #[error("family {family} deprecates `{key}` which no ancestor declares")]
    UnknownDeprecation {
        /// Family whose table is defective
        family: EngineFamily,
        /// The unknown key
        key: &'static str,
    },

    /// A recognized key ended up without a default entry
    #[error("family {family} recognizes `{key}` but has no default for it")]
    MissingDefault {
        /// Family whose table is defective
        family: EngineFamily,
        /// The key lacking a default
        key: &'static str,
    },
}
