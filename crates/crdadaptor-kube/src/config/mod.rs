//! Adaptor config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use crdadaptor_core::error::{AdaptorError, Result};

pub use schema::{AdaptorConfig, CredentialMode};

pub fn load_from_file(path: impl AsRef<Path>) -> Result<AdaptorConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        AdaptorError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AdaptorConfig> {
    let cfg: AdaptorConfig = serde_yaml::from_str(s)
        .map_err(|e| AdaptorError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
