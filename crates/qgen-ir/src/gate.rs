//! The extended-gate whitelist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{IrError, IrResult};

/// Multi-qubit, controlled and rotation gates accepted by extended and
/// phase operations.
///
/// Each variant corresponds to exactly one whitelist name; see
/// [`ExtendedGate::name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExtendedGate {
    /// `CNOT`
    Cnot,
    /// `CCNOT` (Toffoli).
    Ccnot,
    /// `CZ`
    Cz,
    /// `Controlled H`
    ControlledH,
    /// `Controlled Rz`
    ControlledRz,
    /// `CXBASE`, the QASM built-in controlled-X.
    CxBase,
    /// `Controlled Y`
    ControlledY,
    /// `SWAP`
    Swap,
    /// `CSWAP` (Fredkin).
    Cswap,
    /// `ISWAP`
    Iswap,
    /// `PSWAP`, parametric swap.
    Pswap,
    /// `Rx`
    Rx,
    /// `Ry`
    Ry,
    /// `Rz`
    Rz,
}

impl ExtendedGate {
    /// Every whitelisted gate, in whitelist order.
    pub const ALL: [ExtendedGate; 14] = [
        ExtendedGate::Cnot,
        ExtendedGate::Ccnot,
        ExtendedGate::Cz,
        ExtendedGate::ControlledH,
        ExtendedGate::ControlledRz,
        ExtendedGate::CxBase,
        ExtendedGate::ControlledY,
        ExtendedGate::Swap,
        ExtendedGate::Cswap,
        ExtendedGate::Iswap,
        ExtendedGate::Pswap,
        ExtendedGate::Rx,
        ExtendedGate::Ry,
        ExtendedGate::Rz,
    ];

    /// The exact whitelist name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ExtendedGate::Cnot => "CNOT",
            ExtendedGate::Ccnot => "CCNOT",
            ExtendedGate::Cz => "CZ",
            ExtendedGate::ControlledH => "Controlled H",
            ExtendedGate::ControlledRz => "Controlled Rz",
            ExtendedGate::CxBase => "CXBASE",
            ExtendedGate::ControlledY => "Controlled Y",
            ExtendedGate::Swap => "SWAP",
            ExtendedGate::Cswap => "CSWAP",
            ExtendedGate::Iswap => "ISWAP",
            ExtendedGate::Pswap => "PSWAP",
            ExtendedGate::Rx => "Rx",
            ExtendedGate::Ry => "Ry",
            ExtendedGate::Rz => "Rz",
        }
    }

    /// Resolve a whitelist name. Matching is exact and case-sensitive.
    pub fn from_name(name: &str) -> IrResult<Self> {
        Self::ALL
            .into_iter()
            .find(|gate| gate.name() == name)
            .ok_or_else(|| IrError::UnknownGate(name.to_string()))
    }
}

impl fmt::Display for ExtendedGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExtendedGate {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for ExtendedGate {
    type Error = IrError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::from_name(name)
    }
}

impl TryFrom<String> for ExtendedGate {
    type Error = IrError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::from_name(&name)
    }
}

impl From<ExtendedGate> for String {
    fn from(gate: ExtendedGate) -> Self {
        gate.name().to_string()
    }
}
