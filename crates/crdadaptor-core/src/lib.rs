//! crdadaptor core: policy model, document codec, error types and the
//! persistence contract.
//!
//! This crate carries no cluster or runtime dependencies so the codec and
//! model can be reused by any storage backend.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! Every fallible path surfaces as `AdaptorError`/`Result`; a corrupt policy
//! document never crashes the host process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod adapter;
pub mod codec;
pub mod error;
pub mod model;

pub use adapter::Adapter;
/// Shared result type.
pub use error::{AdaptorError, ErrorKind, Result};
pub use model::{to_rule, PolicyModel, Rule};
