//! Remote record access.
//!
//! A `RecordStore` fetches and updates one namespaced record holding a policy
//! document. Implementations are thin: no retries, no caching.

pub mod cluster;
pub mod memory;

use async_trait::async_trait;

use crdadaptor_core::error::Result;

pub use cluster::KubeRecordStore;
pub use memory::MemoryRecordStore;

/// Snapshot of a remote policy record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyRecord {
    pub namespace: String,
    pub name: String,
    /// Full policy document.
    pub document: String,
    /// Opaque revision token; an update carrying a stale one is rejected.
    pub revision: Option<String>,
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch `namespace/name`. Absent records are `NotFound`.
    async fn get(&self, namespace: &str, name: &str) -> Result<PolicyRecord>;

    /// Replace the record's document if its revision still matches.
    /// A stale revision is `Conflict`.
    async fn update(&self, record: &PolicyRecord) -> Result<()>;
}
