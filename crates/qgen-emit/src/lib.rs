//! Quil, OpenQASM 2.0 and Q# emitters for qgen
//!
//! This crate renders a [`qgen_ir::Program`] as source text in one of three
//! quantum assembly dialects.
//!
//! # Dialects
//!
//! | Dialect | Selector | Gate | Measurement |
//! |---------|----------|------|-------------|
//! | Quil | `quil` | `CNOT 0 1` | `MEASURE 1 ro[2]` |
//! | OpenQASM 2.0 | `qasm` | `cx q[0],q[1];` | `measure q[1] -> c[2];` |
//! | Q# | `q#` | `CNOT(0, 1);` | `let reg2 = M(1);` |
//!
//! OpenQASM output starts with a header declaring `qreg` and `creg` sized
//! from the highest indices used.
//!
//! # Unsupported Gates
//!
//! | Dialect | Gates |
//! |---------|-------|
//! | Quil | `CXBASE` |
//! | OpenQASM 2.0 | `ISWAP`, `PSWAP` |
//! | Q# | `ISWAP`, `CXBASE` (extended); `PSWAP` (phase) |
//!
//! # Example
//!
//! ```rust
//! use qgen_emit::{Dialect, Render};
//! use qgen_ir::{gates, Program};
//!
//! let mut program = Program::new();
//! program.append(gates::x(1));
//! program.measure(1u32, 2u32);
//!
//! assert_eq!(program.render(Dialect::QSharp).unwrap(), "X(1);\nlet reg2 = M(1);");
//! assert_eq!(
//!     program.render(Dialect::Qasm).unwrap(),
//!     "OPENQASM 2.0;include \"qelib1.inc\";qreg q[1];creg c[2];\nx q[1];\nmeasure q[1] -> c[2];"
//! );
//! ```
//!
//! # Angles
//!
//! Quil and OpenQASM accept symbolic angles such as `pi/2` and receive them
//! verbatim. Q# needs decimal literals, so [`angle::normalize`] evaluates
//! products and quotients of integers and `pi` to three decimals.

pub mod angle;
mod dialect;
mod emitter;
mod error;

pub use dialect::Dialect;
pub use emitter::{
    Emitter, QSharpEmitter, Qasm2Emitter, QuilEmitter, Render, emit, emitter_for,
};
pub use error::{EmitError, EmitResult};
