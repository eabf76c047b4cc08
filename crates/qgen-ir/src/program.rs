//! Ordered container of operations.

use serde::{Deserialize, Serialize};

use crate::operation::Operation;
use crate::qubit::{ClbitId, QubitId};

/// A quantum program: operations in circuit order.
///
/// Programs only grow. Insertion order is the order every dialect emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    operations: Vec<Operation>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation.
    pub fn append(&mut self, operation: Operation) -> &mut Self {
        self.operations.push(operation);
        self
    }

    /// Append a measurement of `qubit` into `clbit`.
    pub fn measure(&mut self, qubit: impl Into<QubitId>, clbit: impl Into<ClbitId>) -> &mut Self {
        self.append(Operation::measure(qubit.into(), clbit.into()))
    }

    /// Operations in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Iterate over operations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the program has no operations.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Highest qubit index referenced by any operation.
    pub fn max_qubit(&self) -> Option<QubitId> {
        self.operations
            .iter()
            .flat_map(Operation::qubits_used)
            .copied()
            .max()
    }

    /// Highest classical register index written by any measurement.
    pub fn max_clbit(&self) -> Option<ClbitId> {
        self.operations
            .iter()
            .filter_map(Operation::clbit_used)
            .max()
    }

    /// Size of the qubit register needed: one past the highest qubit index
    /// referenced by any operation, or 0.
    pub fn num_qubits(&self) -> usize {
        self.max_qubit().map_or(0, |q| q.0 as usize + 1)
    }

    /// Size of the classical register needed: one past the highest register
    /// index written by any measurement, or 0.
    pub fn num_clbits(&self) -> usize {
        self.max_clbit().map_or(0, |c| c.0 as usize + 1)
    }
}

impl Extend<Operation> for Program {
    fn extend<T: IntoIterator<Item = Operation>>(&mut self, iter: T) {
        self.operations.extend(iter);
    }
}

impl FromIterator<Operation> for Program {
    fn from_iter<T: IntoIterator<Item = Operation>>(iter: T) -> Self {
        Self {
            operations: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
