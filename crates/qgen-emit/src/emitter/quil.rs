//! Quil emitter.

use qgen_ir::{ExtendedGate, Operation};

use super::{Emitter, join_qubits};
use crate::dialect::Dialect;
use crate::error::EmitResult;

/// Renders operations as Quil instructions.
///
/// Gate names are upper-cased and qubits separated by spaces. Angles are
/// passed through unevaluated: `RX(pi/2) 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuilEmitter;

impl Emitter for QuilEmitter {
    fn dialect(&self) -> Dialect {
        Dialect::Quil
    }

    fn supports(&self, gate: ExtendedGate) -> bool {
        !matches!(gate, ExtendedGate::CxBase)
    }

    fn emit_operation(&self, operation: &Operation) -> EmitResult<String> {
        match operation {
            Operation::Simple { name, qubits } => {
                Ok(format!("{} {}", name.to_uppercase(), join_qubits(qubits, " ")))
            }
            Operation::Extended { gate, qubits } => {
                self.check_supported(*gate)?;
                Ok(format!(
                    "{} {}",
                    gate.name().to_uppercase(),
                    join_qubits(qubits, " ")
                ))
            }
            Operation::Phase {
                gate,
                qubits,
                angle,
            } => {
                self.check_phase_supported(*gate)?;
                Ok(format!(
                    "{}({angle}) {}",
                    gate.name().to_uppercase(),
                    join_qubits(qubits, " ")
                ))
            }
            Operation::Measure { qubit, clbit } => Ok(format!("MEASURE {qubit} ro[{clbit}]")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmitError;
    use qgen_ir::{ClbitId, QubitId, gates};

    fn emit(op: &Operation) -> EmitResult<String> {
        QuilEmitter.emit_operation(op)
    }

    #[test]
    fn test_simple_gate_uppercased() {
        assert_eq!(emit(&gates::x(1)).unwrap(), "X 1");
        assert_eq!(emit(&Operation::simple("h", [QubitId(0)])).unwrap(), "H 0");
    }

    #[test]
    fn test_extended_gates() {
        assert_eq!(emit(&gates::cnot(0, 1)).unwrap(), "CNOT 0 1");
        assert_eq!(emit(&gates::ccnot(0, 1, 2)).unwrap(), "CCNOT 0 1 2");
        assert_eq!(emit(&gates::iswap(2, 3)).unwrap(), "ISWAP 2 3");
        assert_eq!(emit(&gates::ch(0, 1)).unwrap(), "CONTROLLED H 0 1");
    }

    #[test]
    fn test_phase_angle_verbatim() {
        assert_eq!(emit(&gates::rx("pi/2", 0)).unwrap(), "RX(pi/2) 0");
        assert_eq!(emit(&gates::pswap("0.5", 1, 2)).unwrap(), "PSWAP(0.5) 1 2");
        assert_eq!(emit(&gates::rz("theta", 4)).unwrap(), "RZ(theta) 4");
    }

    #[test]
    fn test_measure() {
        let op = Operation::measure(QubitId(1), ClbitId(2));
        assert_eq!(emit(&op).unwrap(), "MEASURE 1 ro[2]");
    }

    #[test]
    fn test_cxbase_unsupported() {
        let err = emit(&gates::cxbase(0, 1)).unwrap_err();
        assert_eq!(
            err,
            EmitError::Unsupported {
                gate: "CXBASE".into(),
                dialect: Dialect::Quil,
            }
        );
        assert_eq!(err.to_string(), "CXBASE operation not supported on Quil");
    }
}
