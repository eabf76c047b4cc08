//! Q# emitter.

use qgen_ir::{ExtendedGate, Operation};

use super::{Emitter, join_qubits};
use crate::angle;
use crate::dialect::Dialect;
use crate::error::EmitResult;

/// Renders operations as Q# statements.
///
/// Controlled gates take their first qubit as a single-element control
/// array: `Controlled Z([0], 1);`. Angles must be decimal literals, so
/// symbolic angles are evaluated to three decimals.
#[derive(Debug, Clone, Copy, Default)]
pub struct QSharpEmitter;

impl QSharpEmitter {
    /// Q# callable name for an extended gate.
    ///
    /// `CZ` and `CSWAP` become `Controlled Z` and `Controlled SWAP`; other
    /// names are used as-is.
    pub fn gate_name(gate: ExtendedGate) -> String {
        let name = gate.name();
        match gate {
            ExtendedGate::Cz | ExtendedGate::Cswap => name.replacen('C', "Controlled ", 1),
            _ => name.to_string(),
        }
    }
}

impl Emitter for QSharpEmitter {
    fn dialect(&self) -> Dialect {
        Dialect::QSharp
    }

    fn supports(&self, gate: ExtendedGate) -> bool {
        !matches!(gate, ExtendedGate::Iswap | ExtendedGate::CxBase)
    }

    fn supports_phase(&self, gate: ExtendedGate) -> bool {
        !matches!(gate, ExtendedGate::Pswap)
    }

    fn emit_operation(&self, operation: &Operation) -> EmitResult<String> {
        match operation {
            Operation::Simple { name, qubits } => {
                Ok(format!("{name}({});", join_qubits(qubits, ", ")))
            }
            Operation::Extended { gate, qubits } => {
                self.check_supported(*gate)?;
                let name = Self::gate_name(*gate);
                if name.contains("Controlled") {
                    let (control, targets) = match qubits.split_first() {
                        Some((control, targets)) => (control.to_string(), targets),
                        None => (String::new(), qubits.as_slice()),
                    };
                    Ok(format!(
                        "{name}([{control}], {});",
                        join_qubits(targets, ", ")
                    ))
                } else {
                    Ok(format!("{name}({});", join_qubits(qubits, ", ")))
                }
            }
            Operation::Phase {
                gate,
                qubits,
                angle,
            } => {
                self.check_phase_supported(*gate)?;
                let value = angle::normalize(angle)?;
                Ok(format!(
                    "{}({value}, {});",
                    gate.name(),
                    join_qubits(qubits, ", ")
                ))
            }
            Operation::Measure { qubit, clbit } => Ok(format!("let reg{clbit} = M({qubit});")),
        }
    }
}
