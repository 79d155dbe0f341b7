//! Client bootstrap.
//!
//! Materializes a `kube::Client` from one of two credential sources. No request
//! is sent here; the first network round trip happens on the first store call.
//! Must run inside a Tokio runtime (the client spawns its request buffer).

use std::path::{Path, PathBuf};

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crdadaptor_core::error::{AdaptorError, Result};

/// Credential source for the cluster client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Service-account token, CA and API endpoint mounted into the pod.
    Internal,
    /// Kubeconfig file; `None` means `<home>/.kube/config`.
    External { kubeconfig: Option<PathBuf> },
}

impl CredentialSource {
    pub fn from_external_flag(use_external: bool) -> Self {
        if use_external {
            CredentialSource::External { kubeconfig: None }
        } else {
            CredentialSource::Internal
        }
    }
}

/// Build a client for `source`.
pub async fn establish(source: &CredentialSource) -> Result<Client> {
    let config = match source {
        CredentialSource::Internal => internal_config()?,
        CredentialSource::External { kubeconfig } => {
            let path = match kubeconfig {
                Some(p) => p.clone(),
                None => default_kubeconfig_path()?,
            };
            external_config(&path).await?
        }
    };

    Client::try_from(config)
        .map_err(|e| AdaptorError::Config(format!("build client failed: {e}")))
}

fn internal_config() -> Result<Config> {
    let config = Config::incluster()
        .map_err(|e| AdaptorError::Config(format!("in-cluster config unavailable: {e}")))?;
    tracing::debug!(cluster_url = %config.cluster_url, "using in-cluster credentials");
    Ok(config)
}

async fn external_config(path: &Path) -> Result<Config> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        AdaptorError::Config(format!("read kubeconfig {} failed: {e}", path.display()))
    })?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| {
            AdaptorError::Config(format!("invalid kubeconfig {}: {e}", path.display()))
        })?;
    tracing::debug!(path = %path.display(), cluster_url = %config.cluster_url, "using kubeconfig credentials");
    Ok(config)
}

/// `<home>/.kube/config`.
pub fn default_kubeconfig_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AdaptorError::Config("home directory cannot be resolved".into()))?;
    Ok(home.join(".kube").join("config"))
}
