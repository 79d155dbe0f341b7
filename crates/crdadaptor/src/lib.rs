//! Top-level facade crate for crdadaptor.
//!
//! Re-exports the core model/codec and the Kubernetes backend so users can
//! depend on a single crate.

pub mod core {
    pub use crdadaptor_core::*;
}

pub mod kube {
    pub use crdadaptor_kube::*;
}

pub use crdadaptor_core::{Adapter, AdaptorError, ErrorKind, PolicyModel, Result};
pub use crdadaptor_kube::CrdAdaptor;
