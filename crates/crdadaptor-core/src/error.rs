//! Shared error type across crdadaptor crates.

use thiserror::Error;

/// Stable error kinds callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Credential source missing, unreadable or malformed.
    Config,
    /// Remote call failed (network, auth, server error).
    Transport,
    /// Named policy record is absent.
    NotFound,
    /// Record revision changed between fetch and update.
    Conflict,
    /// Incremental mutation requested; only full saves are supported.
    Unsupported,
    /// Policy line could not be parsed.
    Malformed,
}

impl ErrorKind {
    /// String representation used in logs and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::Config => "CONFIG",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Unsupported => "UNSUPPORTED",
            ErrorKind::Malformed => "MALFORMED",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, AdaptorError>;

/// Unified error type used by the codec, stores and adaptor.
#[derive(Debug, Error)]
pub enum AdaptorError {
    #[error("config: {0}")]
    Config(String),
    #[error("transport: {0}")]
    Transport(String),
    #[error("policy record {namespace}/{name} not found")]
    NotFound { namespace: String, name: String },
    #[error("policy record {namespace}/{name} was modified concurrently")]
    Conflict { namespace: String, name: String },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    #[error("malformed policy line: {0}")]
    Malformed(String),
}

impl AdaptorError {
    /// Map the error to its stable kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdaptorError::Config(_) => ErrorKind::Config,
            AdaptorError::Transport(_) => ErrorKind::Transport,
            AdaptorError::NotFound { .. } => ErrorKind::NotFound,
            AdaptorError::Conflict { .. } => ErrorKind::Conflict,
            AdaptorError::Unsupported(_) => ErrorKind::Unsupported,
            AdaptorError::Malformed(_) => ErrorKind::Malformed,
        }
    }

    pub fn is_unsupported(&self) -> bool {
        self.kind() == ErrorKind::Unsupported
    }
}
