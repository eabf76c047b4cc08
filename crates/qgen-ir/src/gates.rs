//! Constructors for the standard gates.
//!
//! Extended and phase constructors use whitelist constants, so unlike
//! [`Operation::extended`] they cannot fail.

use crate::gate::ExtendedGate;
use crate::operation::Operation;
use crate::qubit::QubitId;

fn single(name: &str, q: u32) -> Operation {
    Operation::simple(name, [QubitId(q)])
}

/// Identity.
pub fn i(q: u32) -> Operation {
    single("I", q)
}

/// Pauli-X.
pub fn x(q: u32) -> Operation {
    single("X", q)
}

/// Pauli-Y.
pub fn y(q: u32) -> Operation {
    single("Y", q)
}

/// Pauli-Z.
pub fn z(q: u32) -> Operation {
    single("Z", q)
}

/// Hadamard.
pub fn h(q: u32) -> Operation {
    single("H", q)
}

/// S gate (sqrt(Z)).
pub fn s(q: u32) -> Operation {
    single("S", q)
}

/// T gate (fourth root of Z).
pub fn t(q: u32) -> Operation {
    single("T", q)
}

/// Controlled-NOT.
pub fn cnot(control: u32, target: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::Cnot, [QubitId(control), QubitId(target)])
}

/// Toffoli.
pub fn ccnot(c1: u32, c2: u32, target: u32) -> Operation {
    Operation::extended_gate(
        ExtendedGate::Ccnot,
        [QubitId(c1), QubitId(c2), QubitId(target)],
    )
}

/// Controlled-Z.
pub fn cz(control: u32, target: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::Cz, [QubitId(control), QubitId(target)])
}

/// SWAP.
pub fn swap(q1: u32, q2: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::Swap, [QubitId(q1), QubitId(q2)])
}

/// Fredkin (controlled SWAP).
pub fn cswap(control: u32, q1: u32, q2: u32) -> Operation {
    Operation::extended_gate(
        ExtendedGate::Cswap,
        [QubitId(control), QubitId(q1), QubitId(q2)],
    )
}

/// iSWAP.
pub fn iswap(q1: u32, q2: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::Iswap, [QubitId(q1), QubitId(q2)])
}

/// Controlled-Hadamard.
pub fn ch(control: u32, target: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::ControlledH, [QubitId(control), QubitId(target)])
}

/// Controlled-Y.
pub fn cy(control: u32, target: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::ControlledY, [QubitId(control), QubitId(target)])
}

/// QASM built-in `CX`.
pub fn cxbase(control: u32, target: u32) -> Operation {
    Operation::extended_gate(ExtendedGate::CxBase, [QubitId(control), QubitId(target)])
}

/// Parametric swap.
pub fn pswap(angle: impl Into<String>, q1: u32, q2: u32) -> Operation {
    Operation::phase_gate(ExtendedGate::Pswap, [QubitId(q1), QubitId(q2)], angle)
}

/// Rotation around X.
pub fn rx(angle: impl Into<String>, q: u32) -> Operation {
    Operation::phase_gate(ExtendedGate::Rx, [QubitId(q)], angle)
}

/// Rotation around Y.
pub fn ry(angle: impl Into<String>, q: u32) -> Operation {
    Operation::phase_gate(ExtendedGate::Ry, [QubitId(q)], angle)
}

/// Rotation around Z.
pub fn rz(angle: impl Into<String>, q: u32) -> Operation {
    Operation::phase_gate(ExtendedGate::Rz, [QubitId(q)], angle)
}

/// Controlled rotation around Z.
pub fn crz(angle: impl Into<String>, control: u32, target: u32) -> Operation {
    Operation::phase_gate(
        ExtendedGate::ControlledRz,
        [QubitId(control), QubitId(target)],
        angle,
    )
}
