//! Policy adaptor backed by one `CasbinPolicy` record.
//!
//! - `load_policy` appends every rule of the record's document to the model.
//! - `save_policy` rewrites the whole document (fetch, replace, update with
//!   the fetched revision). A concurrent writer makes the update fail with
//!   `Conflict`; nothing is retried or merged.
//! - Incremental mutations are not supported: mutate the model and save it.

use async_trait::async_trait;

use crdadaptor_core::codec;
use crdadaptor_core::error::{AdaptorError, Result};
use crdadaptor_core::{Adapter, PolicyModel};

use crate::bootstrap::{self, CredentialSource};
use crate::config::AdaptorConfig;
use crate::store::{KubeRecordStore, RecordStore};

pub struct CrdAdaptor<S = KubeRecordStore> {
    namespace: String,
    record_name: String,
    store: S,
}

impl CrdAdaptor<KubeRecordStore> {
    /// Build an adaptor with its own cluster client.
    ///
    /// `use_external_credentials` selects `~/.kube/config` over in-cluster
    /// credentials.
    pub async fn new(
        namespace: impl Into<String>,
        record_name: impl Into<String>,
        use_external_credentials: bool,
    ) -> Result<Self> {
        let source = CredentialSource::from_external_flag(use_external_credentials);
        Self::with_credentials(namespace, record_name, &source).await
    }

    pub async fn with_credentials(
        namespace: impl Into<String>,
        record_name: impl Into<String>,
        source: &CredentialSource,
    ) -> Result<Self> {
        let client = bootstrap::establish(source).await?;
        Ok(Self::with_store(
            namespace,
            record_name,
            KubeRecordStore::new(client),
        ))
    }

    pub async fn from_config(cfg: &AdaptorConfig) -> Result<Self> {
        Self::with_credentials(
            cfg.namespace.clone(),
            cfg.record_name.clone(),
            &cfg.credential_source(),
        )
        .await
    }
}

impl<S: RecordStore> CrdAdaptor<S> {
    pub fn with_store(namespace: impl Into<String>, record_name: impl Into<String>, store: S) -> Self {
        Self {
            namespace: namespace.into(),
            record_name: record_name.into(),
            store,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }
}

#[async_trait]
impl<S: RecordStore> Adapter for CrdAdaptor<S> {
    async fn load_policy(&self, model: &mut PolicyModel) -> Result<()> {
        let record = self.store.get(&self.namespace, &self.record_name).await?;
        let summary = codec::load_document(&record.document, model);

        tracing::debug!(
            namespace = %self.namespace,
            name = %self.record_name,
            loaded = summary.loaded,
            skipped = summary.skipped,
            "policy loaded"
        );
        Ok(())
    }

    async fn save_policy(&self, model: &PolicyModel) -> Result<()> {
        let document = codec::serialize(model);

        let mut record = self.store.get(&self.namespace, &self.record_name).await?;
        record.document = document;
        self.store.update(&record).await?;

        tracing::debug!(
            namespace = %self.namespace,
            name = %self.record_name,
            rules = model.len(),
            "policy saved"
        );
        Ok(())
    }

    async fn add_policy(&self, _sec: &str, _ptype: &str, _rule: &[String]) -> Result<()> {
        Err(AdaptorError::Unsupported("add_policy"))
    }

    async fn remove_policy(&self, _sec: &str, _ptype: &str, _rule: &[String]) -> Result<()> {
        Err(AdaptorError::Unsupported("remove_policy"))
    }

    async fn remove_filtered_policy(
        &self,
        _sec: &str,
        _ptype: &str,
        _field_index: usize,
        _field_values: &[String],
    ) -> Result<()> {
        Err(AdaptorError::Unsupported("remove_filtered_policy"))
    }
}
