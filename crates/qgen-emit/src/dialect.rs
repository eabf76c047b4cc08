//! Target dialects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EmitError;

/// Output language for a rendered program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// Rigetti Quil.
    #[serde(rename = "quil")]
    Quil,
    /// OpenQASM 2.0.
    #[serde(rename = "qasm", alias = "qasm2")]
    Qasm,
    /// Q#-style statements.
    #[serde(rename = "q#", alias = "qsharp")]
    QSharp,
}

impl Dialect {
    /// All dialects.
    pub const ALL: [Dialect; 3] = [Dialect::Quil, Dialect::Qasm, Dialect::QSharp];

    /// The selector string accepted by [`FromStr`].
    pub fn selector(&self) -> &'static str {
        match self {
            Dialect::Quil => "quil",
            Dialect::Qasm => "qasm",
            Dialect::QSharp => "q#",
        }
    }

    /// Whether output starts with a preamble computed from the whole program.
    pub fn requires_header(&self) -> bool {
        matches!(self, Dialect::Qasm)
    }

    /// Separator between rendered lines.
    pub fn separator(&self) -> &'static str {
        "\n"
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Quil => "Quil",
            Dialect::Qasm => "QASM",
            Dialect::QSharp => "Q#",
        })
    }
}

impl FromStr for Dialect {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quil" => Ok(Dialect::Quil),
            "qasm" | "qasm2" | "openqasm" => Ok(Dialect::Qasm),
            "q#" | "qsharp" => Ok(Dialect::QSharp),
            _ => Err(EmitError::UnknownDialect(s.to_string())),
        }
    }
}
