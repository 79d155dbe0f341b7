//! Persistence contract consumed by the policy engine.

use async_trait::async_trait;

use crate::error::Result;
use crate::model::PolicyModel;

/// Storage backend for a policy model.
///
/// `load_policy` appends to the given model; it does not clear it first.
/// `save_policy` always persists the complete model.
#[async_trait]
pub trait Adapter: Send + Sync {
    async fn load_policy(&self, model: &mut PolicyModel) -> Result<()>;

    async fn save_policy(&self, model: &PolicyModel) -> Result<()>;

    async fn add_policy(&self, sec: &str, ptype: &str, rule: &[String]) -> Result<()>;

    async fn remove_policy(&self, sec: &str, ptype: &str, rule: &[String]) -> Result<()>;

    async fn remove_filtered_policy(
        &self,
        sec: &str,
        ptype: &str,
        field_index: usize,
        field_values: &[String],
    ) -> Result<()>;
}
