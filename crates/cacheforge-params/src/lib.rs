//! cacheforge Parameter Groups
//!
//! Versioned parameter-group schemas with validation and
//! serialization. Each engine family recognizes a set of configuration
//! keys, inherited along the family chain, with per-family defaults,
//! deprecations and platform-fixed (non-modifiable) keys.
//!
//! # Core Concepts
//!
//! - [`ParameterSet`]: a caller's sparse overrides bound to one
//!   family, validated eagerly at construction
//! - [`schema`]: the registry answering which keys a family
//!   recognizes, which are non-modifiable, and what the defaults are
//! - [`ParamValue`]: the typed value domain, including
//!   [`KeyspaceEventSet`] flags and command [`RenameMap`]s
//!
//! Serialization collapses a set into a flat string map holding only
//! the values that differ from the family defaults:
//!
//! ```rust
//! use cacheforge_engine::EngineFamily;
//! use cacheforge_params::{ParamValue, ParameterSet};
//!
//! let set = ParameterSet::new(
//!     EngineFamily::Redis6X,
//!     [("trackingTableMaxKeys", ParamValue::from(500_000))],
//! )?;
//!
//! let properties = set.to_properties()?;
//! assert_eq!(properties["tracking-table-max-keys"], "500000");
//! # Ok::<(), cacheforge_params::ParameterError>(())
//! ```

#![warn(unreachable_pub)]

mod enums;
mod error;
mod events;
mod key;
mod params;
mod rename;
mod value;

pub mod schema;

pub use enums::{AppendFsync, BindingProtocol, HashAlgorithm, MaxMemoryPolicy, PubSubAcl};
pub use error::{ParameterError, SchemaError};
pub use events::KeyspaceEventSet;
pub use key::hyphenate;
pub use params::ParameterSet;
pub use rename::{is_renamable, RenameMap};
pub use value::ParamValue;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
