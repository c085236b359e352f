use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ketsim_gates::{apply_matrix, change_phase, hadamard, matrices, qc_not, s_gate};
use ketsim_state::{ONE_KET, POSITIVE_HADAMARD, ZERO_KET};

fn benchmark_named_gates(c: &mut Criterion) {
    let mut group = c.benchmark_group("named_gates");

    for (name, q) in [("zero", ZERO_KET), ("one", ONE_KET), ("plus", POSITIVE_HADAMARD)] {
        group.bench_with_input(BenchmarkId::new("H", name), &q, |b, &q| {
            b.iter(|| black_box(hadamard(q)));
        });
        group.bench_with_input(BenchmarkId::new("X", name), &q, |b, &q| {
            b.iter(|| black_box(qc_not(q)));
        });
        group.bench_with_input(BenchmarkId::new("Z", name), &q, |b, &q| {
            b.iter(|| black_box(change_phase(q)));
        });
        group.bench_with_input(BenchmarkId::new("S", name), &q, |b, &q| {
            b.iter(|| black_box(s_gate(q)));
        });
    }

    group.finish();
}

fn benchmark_matrix_application(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_matrix");

    group.bench_function("hadamard_matrix", |b| {
        b.iter(|| black_box(apply_matrix(black_box(ZERO_KET), &matrices::HADAMARD)));
    });

    group.bench_function("five_gate_chain", |b| {
        b.iter(|| {
            let q = black_box(ZERO_KET);
            black_box(s_gate(change_phase(hadamard(qc_not(hadamard(q))))))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_named_gates, benchmark_matrix_application);
criterion_main!(benches);
