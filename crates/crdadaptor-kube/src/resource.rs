//! `CasbinPolicy` custom resource.
//!
//! The CRD itself is provisioned out of band; this type only lets the client
//! address it. The whole policy lives in `spec.policyItem`.

use kube::CustomResource;
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[kube(
    group = "auth.casbin.org",
    version = "v1",
    kind = "CasbinPolicy",
    plural = "casbinpolicies",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct CasbinPolicySpec {
    /// Policy document, one rule per line.
    #[serde(default)]
    pub policy_item: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::Resource;

    #[test]
    fn resource_identity() {
        assert_eq!(CasbinPolicy::group(&()), "auth.casbin.org");
        assert_eq!(CasbinPolicy::version(&()), "v1");
        assert_eq!(CasbinPolicy::kind(&()), "CasbinPolicy");
        assert_eq!(CasbinPolicy::plural(&()), "casbinpolicies");
    }

    #[test]
    fn spec_uses_camel_case_field() {
        let spec = CasbinPolicySpec {
            policy_item: "p,alice,data1,read\n".into(),
        };
        let v = serde_json::to_value(&spec).unwrap();
        assert_eq!(v["policyItem"], "p,alice,data1,read\n");

        let empty: CasbinPolicySpec = serde_json::from_str("{}").unwrap();
        assert!(empty.policy_item.is_empty());
    }
}
