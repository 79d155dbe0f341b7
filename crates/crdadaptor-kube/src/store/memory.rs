//! In-memory record store.
//!
//! Stands in for the cluster in tests and local tooling. Clones share the same
//! backing map, so several adaptors can contend for one record. Revisions come
//! from a store-wide counter and change on every write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crdadaptor_core::error::{AdaptorError, Result};

use super::{PolicyRecord, RecordStore};

type RecordKey = (String, String);

#[derive(Debug, Clone)]
struct StoredRecord {
    document: String,
    revision: u64,
}

#[derive(Debug, Clone)]
pub struct MemoryRecordStore {
    records: Arc<DashMap<RecordKey, StoredRecord>>,
    seq: Arc<AtomicU64>,
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(DashMap::new()),
            seq: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Provision (or overwrite) a record, bypassing revision checks.
    pub fn insert(&self, namespace: &str, name: &str, document: impl Into<String>) {
        let revision = self.next_revision();
        self.records.insert(
            key(namespace, name),
            StoredRecord {
                document: document.into(),
                revision,
            },
        );
    }

    pub fn remove(&self, namespace: &str, name: &str) -> bool {
        self.records.remove(&key(namespace, name)).is_some()
    }

    pub fn document(&self, namespace: &str, name: &str) -> Option<String> {
        self.records
            .get(&key(namespace, name))
            .map(|r| r.value().document.clone())
    }

    pub fn revision(&self, namespace: &str, name: &str) -> Option<String> {
        self.records
            .get(&key(namespace, name))
            .map(|r| r.value().revision.to_string())
    }

    fn next_revision(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, namespace: &str, name: &str) -> Result<PolicyRecord> {
        let entry = self
            .records
            .get(&key(namespace, name))
            .ok_or_else(|| not_found(namespace, name))?;

        Ok(PolicyRecord {
            namespace: namespace.to_string(),
            name: name.to_string(),
            document: entry.value().document.clone(),
            revision: Some(entry.value().revision.to_string()),
        })
    }

    async fn update(&self, record: &PolicyRecord) -> Result<()> {
        let next = self.next_revision();
        let mut entry = self
            .records
            .get_mut(&key(&record.namespace, &record.name))
            .ok_or_else(|| not_found(&record.namespace, &record.name))?;

        let current = entry.value().revision.to_string();
        if record.revision.as_deref() != Some(current.as_str()) {
            return Err(AdaptorError::Conflict {
                namespace: record.namespace.clone(),
                name: record.name.clone(),
            });
        }

        let stored = entry.value_mut();
        stored.document = record.document.clone();
        stored.revision = next;
        Ok(())
    }
}

fn key(namespace: &str, name: &str) -> RecordKey {
    (namespace.to_string(), name.to_string())
}

fn not_found(namespace: &str, name: &str) -> AdaptorError {
    AdaptorError::NotFound {
        namespace: namespace.to_string(),
        name: name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = MemoryRecordStore::new();
        let err = store.get("default", "policy").await.unwrap_err();
        assert_eq!(err.kind().as_str(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn update_bumps_revision() {
        let store = MemoryRecordStore::new();
        store.insert("default", "policy", "");

        let mut rec = store.get("default", "policy").await.unwrap();
        let before = rec.revision.clone();
        rec.document = "p,alice,data1,read\n".into();
        store.update(&rec).await.unwrap();

        assert_eq!(
            store.document("default", "policy").as_deref(),
            Some("p,alice,data1,read\n")
        );
        assert_ne!(store.revision("default", "policy"), before);
    }

    #[tokio::test]
    async fn stale_revision_is_rejected() {
        let store = MemoryRecordStore::new();
        store.insert("default", "policy", "p,root,*,*\n");

        let mut first = store.get("default", "policy").await.unwrap();
        let mut second = store.get("default", "policy").await.unwrap();

        first.document = "p,alice,data1,read\n".into();
        store.update(&first).await.unwrap();

        second.document = "p,bob,data2,write\n".into();
        let err = store.update(&second).await.unwrap_err();
        assert_eq!(err.kind().as_str(), "CONFLICT");
        assert_eq!(
            store.document("default", "policy").as_deref(),
            Some("p,alice,data1,read\n")
        );
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let store = MemoryRecordStore::new();
        let rec = PolicyRecord {
            namespace: "default".into(),
            name: "policy".into(),
            document: String::new(),
            revision: Some("1".into()),
        };
        let err = store.update(&rec).await.unwrap_err();
        assert_eq!(err.kind().as_str(), "NOT_FOUND");
    }
}
