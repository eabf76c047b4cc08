//! Dialect emitters and the program rendering entry point.

mod qasm2;
mod qsharp;
mod quil;

use qgen_ir::{ExtendedGate, Operation, Program, QubitId};
use tracing::{debug, trace};

use crate::dialect::Dialect;
use crate::error::{EmitError, EmitResult};

pub use qasm2::Qasm2Emitter;
pub use qsharp::QSharpEmitter;
pub use quil::QuilEmitter;

/// Rendering rules for one dialect.
pub trait Emitter: Send + Sync {
    /// The dialect this emitter produces.
    fn dialect(&self) -> Dialect;

    /// Whether the dialect has a rendering rule for `gate` as an extended
    /// gate.
    fn supports(&self, gate: ExtendedGate) -> bool;

    /// Whether the dialect has a rendering rule for `gate` as a phase gate.
    fn supports_phase(&self, gate: ExtendedGate) -> bool {
        self.supports(gate)
    }

    /// Render a single operation as one line.
    fn emit_operation(&self, operation: &Operation) -> EmitResult<String>;

    /// Program-level preamble, if the dialect has one.
    fn header(&self, _program: &Program) -> Option<String> {
        None
    }

    /// Fail with [`EmitError::Unsupported`] if `gate` cannot be rendered as
    /// an extended gate.
    fn check_supported(&self, gate: ExtendedGate) -> EmitResult<()> {
        if self.supports(gate) {
            Ok(())
        } else {
            Err(unsupported(gate, self.dialect()))
        }
    }

    /// Fail with [`EmitError::Unsupported`] if `gate` cannot be rendered as
    /// a phase gate.
    fn check_phase_supported(&self, gate: ExtendedGate) -> EmitResult<()> {
        if self.supports_phase(gate) {
            Ok(())
        } else {
            Err(unsupported(gate, self.dialect()))
        }
    }
}

static QUIL: QuilEmitter = QuilEmitter;
static QSHARP: QSharpEmitter = QSharpEmitter;
static QASM2: Qasm2Emitter = Qasm2Emitter;

/// The emitter for `dialect`.
pub fn emitter_for(dialect: Dialect) -> &'static dyn Emitter {
    match dialect {
        Dialect::Quil => &QUIL,
        Dialect::Qasm => &QASM2,
        Dialect::QSharp => &QSHARP,
    }
}

/// Render `program` in `dialect`.
///
/// The first failing operation aborts the render; no partial output is
/// returned. Rendering never modifies the program.
pub fn emit(program: &Program, dialect: Dialect) -> EmitResult<String> {
    let emitter = emitter_for(dialect);
    debug!(%dialect, operations = program.len(), "Rendering program");

    let mut lines = Vec::with_capacity(program.len());
    for (index, operation) in program.iter().enumerate() {
        trace!(index, name = operation.name(), "Rendering operation");
        let line = emitter.emit_operation(operation)?;
        if !line.is_empty() {
            lines.push(line);
        }
    }

    let separator = dialect.separator();
    let body = lines.join(separator);
    match emitter.header(program) {
        Some(header) => Ok(format!("{header}{separator}{body}")),
        None => Ok(body),
    }
}

/// Rendering as a method on [`Program`].
///
/// ```rust
/// use qgen_emit::{Dialect, Render};
/// use qgen_ir::{gates, Program};
///
/// let mut program = Program::new();
/// program.append(gates::x(1));
/// program.measure(1u32, 2u32);
///
/// assert_eq!(program.render(Dialect::Quil).unwrap(), "X 1\nMEASURE 1 ro[2]");
/// ```
pub trait Render {
    /// Render in `dialect`.
    fn render(&self, dialect: Dialect) -> EmitResult<String>;
}

impl Render for Program {
    fn render(&self, dialect: Dialect) -> EmitResult<String> {
        emit(self, dialect)
    }
}

fn unsupported(gate: ExtendedGate, dialect: Dialect) -> EmitError {
    EmitError::Unsupported {
        gate: gate.name().to_string(),
        dialect,
    }
}

fn join_qubits(qubits: &[QubitId], separator: &str) -> String {
    qubits
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
