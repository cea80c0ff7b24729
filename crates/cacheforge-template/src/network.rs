//! Subnet-group and security-group resource records
//!
//! Pure declarative records; VPC wiring and IAM stay with the caller.

use serde::{Deserialize, Serialize};

/// A cache subnet group: the subnets a cluster may place nodes in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetGroupResource {
    /// Free-form description
    pub description: String,
    /// Subnet identifiers
    pub subnet_ids: Vec<String>,
}

impl SubnetGroupResource {
    /// Subnet group over the given subnets
    pub fn new(
        description: impl Into<String>,
        subnet_ids: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            description: description.into(),
            subnet_ids: subnet_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// One allowed ingress source for a cache security group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngressRule {
    /// TCP port the source may reach
    pub port: u16,
    /// Source identifier (security group or CIDR)
    pub source: String,
}

/// A cache security group record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityGroupResource {
    /// Free-form description
    pub description: String,
    /// Allowed ingress sources
    pub ingress_rules: Vec<IngressRule>,
}

impl SecurityGroupResource {
    /// Security group with no ingress yet
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ingress_rules: Vec::new(),
        }
    }

    /// Allow `source` to reach `port`, builder style
    #[must_use]
    pub fn allow_from(mut self, source: impl Into<String>, port: u16) -> Self {
        self.ingress_rules.push(IngressRule {
            port,
            source: source.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subnet_group_collects_ids() {
        let group = SubnetGroupResource::new("private subnets", ["subnet-a", "subnet-b"]);
        assert_eq!(group.subnet_ids, vec!["subnet-a", "subnet-b"]);
    }

    #[test]
    fn security_group_builder_appends_rules() {
        let group = SecurityGroupResource::new("cache access")
            .allow_from("sg-app", 6379)
            .allow_from("sg-batch", 6379);
        assert_eq!(group.ingress_rules.len(), 2);
        assert_eq!(group.ingress_rules[0].source, "sg-app");
        assert_eq!(group.ingress_rules[0].port, 6379);
    }
}
