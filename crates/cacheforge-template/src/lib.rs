//! cacheforge Template Layer
//!
//! Declarative resource records and the provisioning-template document
//! they assemble into. Records validate their own structural fields;
//! parameter semantics live in `cacheforge-params`.
//!
//! # Core Concepts
//!
//! - [`ParameterGroupResource`]: a serialized parameter set with its
//!   family identifier and description
//! - [`CacheClusterResource`] / [`ReplicationGroupResource`]: compute
//!   records referencing parameter, subnet and security groups by name
//! - [`Template`]: logical id → resource map emitting the JSON the
//!   external provisioning engine consumes
//!
//! # Example
//!
//! ```rust
//! use cacheforge_engine::{EngineFamily, NodeClass, NodeSize, NodeType, RedisVersion};
//! use cacheforge_params::{ParamValue, ParameterSet};
//! use cacheforge_template::{CacheClusterResource, ParameterGroupResource, Template};
//!
//! let params = ParameterSet::new(
//!     EngineFamily::Redis6X,
//!     [("maxmemorySamples", ParamValue::from(5))],
//! )?;
//!
//! let mut template = Template::new();
//! template.add(
//!     "Params",
//!     ParameterGroupResource::from_parameters(&params, "tuned sampling")?,
//! )?;
//! template.add(
//!     "Cache",
//!     CacheClusterResource::redis(
//!         RedisVersion::V6_2,
//!         NodeType::of(NodeClass::T3, NodeSize::Medium),
//!         1,
//!     )?,
//! )?;
//!
//! let doc = template.to_json()?;
//! assert_eq!(doc["resources"]["Params"]["type"], "parameterGroup");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]

mod cluster;
mod error;
mod network;
mod parameter_group;
mod replication;
mod snapshot;
mod template;

pub use cluster::CacheClusterResource;
pub use error::TemplateError;
pub use network::{IngressRule, SecurityGroupResource, SubnetGroupResource};
pub use parameter_group::ParameterGroupResource;
pub use replication::{
    NodeGroupConfiguration, ReplicationGroupResource, SlotRange, MAX_SLOT,
};
pub use snapshot::SnapshotWindow;
pub use template::{Resource, Template};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
