//! qgen Operation Model
//!
//! This crate provides the data structures for describing a quantum program as
//! an ordered list of operations. Rendering those operations into assembly
//! dialects lives in `qgen-emit`.
//!
//! # Core Components
//!
//! - **Ids**: [`QubitId`], [`ClbitId`]
//! - **Whitelist**: [`ExtendedGate`], the fixed set of names accepted by
//!   extended and phase gates
//! - **Operations**: [`Operation`], a closed union of simple gates, extended
//!   gates, phase gates and measurements
//! - **Program**: [`Program`], an append-only sequence of operations
//! - **Constructors**: [`gates`] for the standard gates
//!
//! # Example
//!
//! ```rust
//! use qgen_ir::{gates, Operation, Program, QubitId};
//!
//! let mut program = Program::new();
//! program.append(gates::h(0));
//! program.append(gates::cnot(0, 1));
//! program.append(Operation::phase("Rz", [QubitId(1)], "pi/2").unwrap());
//! program.measure(1u32, 0u32);
//!
//! assert_eq!(program.num_qubits(), 2);
//! assert_eq!(program.num_clbits(), 1);
//!
//! // Names outside the whitelist are rejected at construction.
//! assert!(Operation::extended("CY", [QubitId(0), QubitId(1)]).is_err());
//! ```

pub mod error;
pub mod gate;
pub mod gates;
pub mod operation;
pub mod program;
pub mod qubit;

pub use error::{IrError, IrResult};
pub use gate::ExtendedGate;
pub use operation::Operation;
pub use program::Program;
pub use qubit::{ClbitId, QubitId};
