use async_trait::async_trait;
use kube::api::{Patch, PatchParams};
use kube::{Api, Client};
use serde_json::{json, Value};

use crdadaptor_core::error::{AdaptorError, Result};

use super::{PolicyRecord, RecordStore};
use crate::resource::CasbinPolicy;

/// `CasbinPolicy` records in the cluster the client points at.
#[derive(Clone)]
pub struct KubeRecordStore {
    client: Client,
}

impl KubeRecordStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<CasbinPolicy> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl RecordStore for KubeRecordStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<PolicyRecord> {
        let obj = self
            .api(namespace)
            .get(name)
            .await
            .map_err(|e| map_kube_error(e, namespace, name))?;

        Ok(PolicyRecord {
            namespace: namespace.to_string(),
            name: name.to_string(),
            document: obj.spec.policy_item,
            revision: obj.metadata.resource_version,
        })
    }

    async fn update(&self, record: &PolicyRecord) -> Result<()> {
        let patch = update_patch(record)?;
        self.api(&record.namespace)
            .patch(&record.name, &PatchParams::default(), &Patch::Merge(&patch))
            .await
            .map_err(|e| map_kube_error(e, &record.namespace, &record.name))?;
        Ok(())
    }
}

/// Merge patch replacing the document.
///
/// resourceVersion in a merge patch is enforced as a precondition (409 on
/// mismatch), so a record without one is refused rather than blindly written.
fn update_patch(record: &PolicyRecord) -> Result<Value> {
    let rv = record.revision.as_deref().ok_or_else(|| {
        AdaptorError::Transport(format!(
            "policy record {}/{} has no resourceVersion",
            record.namespace, record.name
        ))
    })?;
    Ok(json!({
        "metadata": { "resourceVersion": rv },
        "spec": { "policyItem": record.document },
    }))
}

fn map_kube_error(err: kube::Error, namespace: &str, name: &str) -> AdaptorError {
    match err {
        kube::Error::Api(resp) if resp.code == 404 => AdaptorError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        kube::Error::Api(resp) if resp.code == 409 => AdaptorError::Conflict {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        other => AdaptorError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kube::core::ErrorResponse;

    fn api_error(code: u16) -> kube::Error {
        kube::Error::Api(ErrorResponse {
            status: "Failure".into(),
            message: format!("status {code}"),
            reason: String::new(),
            code,
        })
    }

    fn record(revision: Option<&str>) -> PolicyRecord {
        PolicyRecord {
            namespace: "default".into(),
            name: "policy".into(),
            document: "p,alice,data1,read\n".into(),
            revision: revision.map(str::to_string),
        }
    }

    #[test]
    fn update_patch_carries_revision() {
        let patch = update_patch(&record(Some("4711"))).unwrap();
        assert_eq!(patch["metadata"]["resourceVersion"], "4711");
        assert_eq!(patch["spec"]["policyItem"], "p,alice,data1,read\n");
    }

    #[test]
    fn update_without_revision_is_refused() {
        let err = update_patch(&record(None)).unwrap_err();
        assert_eq!(err.kind().as_str(), "TRANSPORT");
        assert!(err.to_string().contains("default/policy"), "got: {err}");
    }

    #[test]
    fn maps_api_status_codes() {
        assert_eq!(
            map_kube_error(api_error(404), "default", "policy").kind().as_str(),
            "NOT_FOUND"
        );
        assert_eq!(
            map_kube_error(api_error(409), "default", "policy").kind().as_str(),
            "CONFLICT"
        );
        assert_eq!(
            map_kube_error(api_error(403), "default", "policy").kind().as_str(),
            "TRANSPORT"
        );
    }
}
