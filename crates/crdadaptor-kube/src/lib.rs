//! crdadaptor Kubernetes backend.
//!
//! Wires the client bootstrap, the `CasbinPolicy` resource type and the
//! record stores into `CrdAdaptor`, an implementation of the core `Adapter`
//! contract. Consumed by the `crdadaptor` binary and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod adaptor;
pub mod bootstrap;
pub mod config;
pub mod resource;
pub mod store;

pub use adaptor::CrdAdaptor;
pub use bootstrap::CredentialSource;
