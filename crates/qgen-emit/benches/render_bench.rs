//! Benchmarks for rendering programs.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qgen_emit::{Dialect, Render};
use qgen_ir::{Program, gates};

fn layered_program(num_qubits: u32, layers: u32) -> Program {
    let mut program = Program::new();
    for _ in 0..layers {
        for q in 0..num_qubits {
            program.append(gates::h(q));
            program.append(gates::rz("pi/4", q));
        }
        for q in 0..num_qubits.saturating_sub(1) {
            program.append(gates::cnot(q, q + 1));
        }
    }
    for q in 0..num_qubits {
        program.measure(q, q);
    }
    program
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for num_qubits in [5, 20, 50] {
        let program = layered_program(num_qubits, 10);
        for dialect in Dialect::ALL {
            group.bench_with_input(
                BenchmarkId::new(dialect.selector(), num_qubits),
                &program,
                |b, program| b.iter(|| program.render(black_box(dialect))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
