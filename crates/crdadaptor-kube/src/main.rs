//! crdadaptor diagnostic tool
//!
//! Loads the configured `CasbinPolicy` record through the adaptor and prints
//! the normalized policy document to stdout.
//!
//! Usage: `crdadaptor-dump [config.yaml]` (default `crdadaptor.yaml`).

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use crdadaptor_core::{codec, Adapter, PolicyModel};
use crdadaptor_kube::{config, CrdAdaptor};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "crdadaptor.yaml".to_string());

    match run(&path).await {
        Ok(doc) => {
            print!("{doc}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "policy dump failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(path: &str) -> crdadaptor_core::Result<String> {
    let cfg = config::load_from_file(path)?;
    let adaptor = CrdAdaptor::from_config(&cfg).await?;

    tracing::info!(
        namespace = %adaptor.namespace(),
        name = %adaptor.record_name(),
        "loading policy"
    );
    let mut model = PolicyModel::new();
    adaptor.load_policy(&mut model).await?;

    Ok(codec::serialize(&model))
}
