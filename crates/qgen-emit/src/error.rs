//! Error types for rendering.

use qgen_ir::IrError;
use thiserror::Error;

use crate::dialect::Dialect;

/// Errors that can occur while rendering a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// The gate has no rendering rule in the requested dialect.
    #[error("{gate} operation not supported on {dialect}")]
    Unsupported {
        /// Whitelist name of the gate.
        gate: String,
        /// Requested dialect.
        dialect: Dialect,
    },

    /// An angle expression could not be reduced to a decimal literal.
    #[error("Cannot render expression '{expression}' in this dialect: {reason}")]
    MathExpression {
        /// The angle expression as supplied.
        expression: String,
        /// What went wrong.
        reason: String,
    },

    /// Dialect selector not recognised.
    #[error("Unknown dialect: '{0}'. Available: quil, qasm, q#")]
    UnknownDialect(String),

    /// Operation construction error.
    #[error(transparent)]
    Ir(#[from] IrError),
}

impl EmitError {
    pub(crate) fn math(expression: &str, reason: impl Into<String>) -> Self {
        EmitError::MathExpression {
            expression: expression.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for rendering.
pub type EmitResult<T> = Result<T, EmitError>;
