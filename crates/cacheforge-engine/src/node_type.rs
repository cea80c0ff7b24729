//! Cache node types
//!
//! Node types name the instance hardware a cluster runs on, as
//! `cache.<class>.<size>`. This module only provides the naming and the
//! capability predicates the resource layer needs; node-type-dependent
//! parameter values (such as the memory ceiling) are lookup tables the
//! caller supplies.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Instance class and generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeClass {
    /// General purpose, previous generation (m1)
    M1,
    /// Memory optimized, previous generation (m2)
    M2,
    /// General purpose, previous generation (m3)
    M3,
    /// General purpose (m4)
    M4,
    /// General purpose (m5)
    M5,
    /// General purpose, Graviton (m6g)
    M6G,
    /// Burstable, previous generation (t1)
    T1,
    /// Burstable, previous generation (t2)
    T2,
    /// Burstable (t3)
    T3,
    /// Burstable, Graviton (t4g)
    T4G,
    /// Memory optimized, previous generation (r3)
    R3,
    /// Memory optimized (r4)
    R4,
    /// Memory optimized (r5)
    R5,
    /// Memory optimized, Graviton (r6g)
    R6G,
    /// Memory optimized with data tiering (r6gd)
    R6GD,
    /// Compute optimized, previous generation (c1)
    C1,
}

impl NodeClass {
    /// Class token inside the node-type name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeClass::M1 => "m1",
            NodeClass::M2 => "m2",
            NodeClass::M3 => "m3",
            NodeClass::M4 => "m4",
            NodeClass::M5 => "m5",
            NodeClass::M6G => "m6g",
            NodeClass::T1 => "t1",
            NodeClass::T2 => "t2",
            NodeClass::T3 => "t3",
            NodeClass::T4G => "t4g",
            NodeClass::R3 => "r3",
            NodeClass::R4 => "r4",
            NodeClass::R5 => "r5",
            NodeClass::R6G => "r6g",
            NodeClass::R6GD => "r6gd",
            NodeClass::C1 => "c1",
        }
    }
}

/// Instance size within a class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeSize {
    /// micro
    Micro,
    /// small
    Small,
    /// medium
    Medium,
    /// large
    Large,
    /// xlarge
    Xlarge,
    /// 2xlarge
    Xlarge2,
    /// 4xlarge
    Xlarge4,
    /// 8xlarge
    Xlarge8,
    /// 10xlarge
    Xlarge10,
    /// 12xlarge
    Xlarge12,
    /// 16xlarge
    Xlarge16,
    /// 24xlarge
    Xlarge24,
}

impl NodeSize {
    /// Size token inside the node-type name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NodeSize::Micro => "micro",
            NodeSize::Small => "small",
            NodeSize::Medium => "medium",
            NodeSize::Large => "large",
            NodeSize::Xlarge => "xlarge",
            NodeSize::Xlarge2 => "2xlarge",
            NodeSize::Xlarge4 => "4xlarge",
            NodeSize::Xlarge8 => "8xlarge",
            NodeSize::Xlarge10 => "10xlarge",
            NodeSize::Xlarge12 => "12xlarge",
            NodeSize::Xlarge16 => "16xlarge",
            NodeSize::Xlarge24 => "24xlarge",
        }
    }
}

/// A concrete cache node type (`cache.m5.large`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeType {
    class: NodeClass,
    size: NodeSize,
}

impl NodeType {
    /// Node type from class and size
    #[inline]
    #[must_use]
    pub const fn of(class: NodeClass, size: NodeSize) -> Self {
        Self { class, size }
    }

    /// Instance class
    #[inline]
    #[must_use]
    pub const fn class(self) -> NodeClass {
        self.class
    }

    /// Instance size
    #[inline]
    #[must_use]
    pub const fn size(self) -> NodeSize {
        self.size
    }

    /// Append-only-file persistence is not available on t1/t2 nodes;
    /// the platform ignores the parameter there.
    #[must_use]
    pub fn supports_append_only(self) -> bool {
        !matches!(self.class, NodeClass::T1 | NodeClass::T2)
    }

    /// Burstable nodes cannot take snapshots
    #[must_use]
    pub fn supports_snapshots(self) -> bool {
        !matches!(self.class, NodeClass::T1 | NodeClass::T2)
    }
}

impl Display for NodeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "cache.{}.{}", self.class.as_str(), self.size.as_str())
    }
}
