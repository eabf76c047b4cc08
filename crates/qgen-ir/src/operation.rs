//! Circuit operations: gate applications and measurements.

use serde::{Deserialize, Serialize};

use crate::error::IrResult;
use crate::gate::ExtendedGate;
use crate::qubit::{ClbitId, QubitId};

/// One step of a quantum program.
///
/// Operations are immutable once built. Qubit lists are kept exactly as
/// supplied: arity, duplicates and ranges are not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// A standard gate from an open set of names (`X`, `H`, ...).
    Simple {
        /// Gate name.
        name: String,
        /// Target qubits, in order.
        qubits: Vec<QubitId>,
    },
    /// A whitelisted multi-qubit or controlled gate.
    Extended {
        /// The gate.
        gate: ExtendedGate,
        /// Qubits in order; controls first by convention.
        qubits: Vec<QubitId>,
    },
    /// A whitelisted gate carrying a rotation angle.
    Phase {
        /// The gate.
        gate: ExtendedGate,
        /// Qubits in order.
        qubits: Vec<QubitId>,
        /// Angle expression, either a decimal literal or a form like `pi/2`.
        angle: String,
    },
    /// Measurement of one qubit into one classical register.
    Measure {
        /// Measured qubit.
        qubit: QubitId,
        /// Destination register.
        #[serde(alias = "register")]
        clbit: ClbitId,
    },
}

impl Operation {
    /// Create a simple gate. Never fails.
    pub fn simple(name: impl Into<String>, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Operation::Simple {
            name: name.into(),
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create an extended gate from its whitelist name.
    ///
    /// Returns [`IrError::UnknownGate`](crate::IrError::UnknownGate) if the
    /// name is not whitelisted.
    pub fn extended(name: &str, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let gate = ExtendedGate::from_name(name)?;
        Ok(Self::extended_gate(gate, qubits))
    }

    /// Create an extended gate from an already-resolved whitelist entry.
    pub fn extended_gate(gate: ExtendedGate, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Operation::Extended {
            gate,
            qubits: qubits.into_iter().collect(),
        }
    }

    /// Create a phase gate from its whitelist name and an angle expression.
    ///
    /// The angle is stored verbatim; it is only interpreted when a dialect
    /// needs a decimal literal.
    pub fn phase(
        name: &str,
        qubits: impl IntoIterator<Item = QubitId>,
        angle: impl Into<String>,
    ) -> IrResult<Self> {
        let gate = ExtendedGate::from_name(name)?;
        Ok(Self::phase_gate(gate, qubits, angle))
    }

    /// Create a phase gate from an already-resolved whitelist entry.
    pub fn phase_gate(
        gate: ExtendedGate,
        qubits: impl IntoIterator<Item = QubitId>,
        angle: impl Into<String>,
    ) -> Self {
        Operation::Phase {
            gate,
            qubits: qubits.into_iter().collect(),
            angle: angle.into(),
        }
    }

    /// Create a measurement.
    pub fn measure(qubit: QubitId, clbit: ClbitId) -> Self {
        Operation::Measure { qubit, clbit }
    }

    /// Qubits referenced by this operation, exactly as supplied.
    pub fn qubits_used(&self) -> &[QubitId] {
        match self {
            Operation::Simple { qubits, .. }
            | Operation::Extended { qubits, .. }
            | Operation::Phase { qubits, .. } => qubits,
            Operation::Measure { qubit, .. } => std::slice::from_ref(qubit),
        }
    }

    /// Classical register written by this operation, if any.
    pub fn clbit_used(&self) -> Option<ClbitId> {
        match self {
            Operation::Measure { clbit, .. } => Some(*clbit),
            _ => None,
        }
    }

    /// Gate name, or `MEASURE` for measurements.
    pub fn name(&self) -> &str {
        match self {
            Operation::Simple { name, .. } => name,
            Operation::Extended { gate, .. } | Operation::Phase { gate, .. } => gate.name(),
            Operation::Measure { .. } => "MEASURE",
        }
    }

    /// Check if this is a measurement.
    pub fn is_measure(&self) -> bool {
        matches!(self, Operation::Measure { .. })
    }

    /// Angle expression of a phase gate.
    pub fn angle(&self) -> Option<&str> {
        match self {
            Operation::Phase { angle, .. } => Some(angle),
            _ => None,
        }
    }
}
