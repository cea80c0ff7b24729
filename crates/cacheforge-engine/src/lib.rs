//! cacheforge Engine Identity
//!
//! Names the things the rest of the workspace configures: engine
//! kinds, parameter-group families, engine releases and node types.
//!
//! # Core Concepts
//!
//! - [`EngineFamily`]: a configuration schema version, one per engine
//!   release line, forming a single-inheritance chain
//! - [`RedisVersion`] / [`MemcachedVersion`]: concrete releases with
//!   capability predicates and family resolution
//! - [`NodeType`]: instance hardware naming (`cache.m5.large`)
//!
//! # Example
//!
//! ```rust
//! use cacheforge_engine::{EngineFamily, RedisVersion};
//!
//! let version = RedisVersion::V6_2;
//! assert_eq!(version.family(), EngineFamily::Redis6X);
//! assert_eq!(version.family().id(), "redis6.x");
//! ```

#![warn(unreachable_pub)]

mod family;
mod node_type;
mod version;

pub use family::{Engine, EngineFamily, FamilyError};
pub use node_type::{NodeClass, NodeSize, NodeType};
pub use version::{MemcachedVersion, RedisVersion};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
