use std::path::PathBuf;

use serde::Deserialize;
use crdadaptor_core::error::{AdaptorError, Result};

use crate::bootstrap::CredentialSource;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdaptorConfig {
    pub version: u32,

    pub namespace: String,

    pub record_name: String,

    #[serde(default)]
    pub credentials: CredentialMode,

    /// Kubeconfig override for external credentials.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
}

/// Where the client reads credentials from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialMode {
    /// Mounted service-account credentials (process runs in the cluster).
    #[default]
    Internal,
    /// Kubeconfig file (defaults to `~/.kube/config`).
    External,
}

impl AdaptorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(AdaptorError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        validate_namespace(&self.namespace)?;
        validate_record_name(&self.record_name)?;

        if self.kubeconfig.is_some() && self.credentials != CredentialMode::External {
            return Err(AdaptorError::Config(
                "kubeconfig requires credentials: external".into(),
            ));
        }
        Ok(())
    }

    pub fn credential_source(&self) -> CredentialSource {
        match self.credentials {
            CredentialMode::Internal => CredentialSource::Internal,
            CredentialMode::External => CredentialSource::External {
                kubeconfig: self.kubeconfig.clone(),
            },
        }
    }
}

/// Namespaces are RFC 1123 labels.
fn validate_namespace(ns: &str) -> Result<()> {
    if !is_dns_label(ns) {
        return Err(AdaptorError::Config(format!(
            "namespace must be a lowercase RFC 1123 label: {ns:?}"
        )));
    }
    Ok(())
}

/// Object names are RFC 1123 subdomains.
fn validate_record_name(name: &str) -> Result<()> {
    let ok = !name.is_empty() && name.len() <= 253 && name.split('.').all(is_dns_label);
    if !ok {
        return Err(AdaptorError::Config(format!(
            "record_name must be a lowercase RFC 1123 subdomain: {name:?}"
        )));
    }
    Ok(())
}

fn is_dns_label(s: &str) -> bool {
    let bytes = s.as_bytes();
    let edge_ok = |b: Option<&u8>| matches!(b, Some(c) if c.is_ascii_lowercase() || c.is_ascii_digit());
    !s.is_empty()
        && s.len() <= 63
        && edge_ok(bytes.first())
        && edge_ok(bytes.last())
        && bytes
            .iter()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dns_labels() {
        assert!(is_dns_label("default"));
        assert!(is_dns_label("kube-system"));
        assert!(is_dns_label("a1"));
        assert!(!is_dns_label(""));
        assert!(!is_dns_label("-lead"));
        assert!(!is_dns_label("trail-"));
        assert!(!is_dns_label("Upper"));
        assert!(!is_dns_label(&"a".repeat(64)));
    }

    #[test]
    fn record_name_allows_dots() {
        assert!(validate_record_name("casbin.policy").is_ok());
        assert!(validate_record_name("casbin..policy").is_err());
    }
}
