//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur while building operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Gate name is not in the extended-gate whitelist.
    #[error("Unknown gate: {0}")]
    UnknownGate(String),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
