//! OpenQASM 2.0 emitter.

use qgen_ir::{ExtendedGate, Operation, Program, QubitId};

use super::Emitter;
use crate::dialect::Dialect;
use crate::error::EmitResult;

/// Renders operations as OpenQASM 2.0 statements.
///
/// Every qubit lives in register `q` and every classical bit in `c`. The
/// header declares each register with the highest index the program
/// references (0 when nothing is referenced).
#[derive(Debug, Clone, Copy, Default)]
pub struct Qasm2Emitter;

impl Qasm2Emitter {
    /// `qelib1.inc` name of an extended gate.
    ///
    /// `CXBASE` maps to the upper-case `CX` built into OpenQASM 2.0.
    pub fn gate_name(gate: ExtendedGate) -> &'static str {
        match gate {
            ExtendedGate::Cnot => "cx",
            ExtendedGate::Ccnot => "ccx",
            ExtendedGate::Cz => "cz",
            ExtendedGate::ControlledH => "ch",
            ExtendedGate::ControlledRz => "crz",
            ExtendedGate::CxBase => "CX",
            ExtendedGate::ControlledY => "cy",
            ExtendedGate::Swap => "swap",
            ExtendedGate::Cswap => "cswap",
            ExtendedGate::Iswap => "iswap",
            ExtendedGate::Pswap => "pswap",
            ExtendedGate::Rx => "rx",
            ExtendedGate::Ry => "ry",
            ExtendedGate::Rz => "rz",
        }
    }

    fn qubit_list(qubits: &[QubitId]) -> String {
        qubits
            .iter()
            .map(|q| format!("q[{q}]"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Emitter for Qasm2Emitter {
    fn dialect(&self) -> Dialect {
        Dialect::Qasm
    }

    fn supports(&self, gate: ExtendedGate) -> bool {
        !matches!(gate, ExtendedGate::Iswap | ExtendedGate::Pswap)
    }

    fn emit_operation(&self, operation: &Operation) -> EmitResult<String> {
        match operation {
            Operation::Simple { name, qubits } => Ok(format!(
                "{} {};",
                name.to_lowercase(),
                Self::qubit_list(qubits)
            )),
            Operation::Extended { gate, qubits } => {
                self.check_supported(*gate)?;
                Ok(format!(
                    "{} {};",
                    Self::gate_name(*gate),
                    Self::qubit_list(qubits)
                ))
            }
            Operation::Phase {
                gate,
                qubits,
                angle,
            } => {
                self.check_phase_supported(*gate)?;
                Ok(format!(
                    "{}({angle}) {};",
                    Self::gate_name(*gate),
                    Self::qubit_list(qubits)
                ))
            }
            Operation::Measure { qubit, clbit } => {
                Ok(format!("measure q[{qubit}] -> c[{clbit}];"))
            }
        }
    }

    fn header(&self, program: &Program) -> Option<String> {
        Some(format!(
            "OPENQASM 2.0;include \"qelib1.inc\";qreg q[{}];creg c[{}];",
            program.max_qubit().map_or(0, |q| q.0),
            program.max_clbit().map_or(0, |c| c.0)
        ))
    }
}
