// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use pauli_tracker::{BitVec, Frames, Map, PauliStack, Tracker};
use rand::prelude::*;

// A brickwork circuit: alternating layers of single-qubit conjugations and
// nearest-neighbour cx gates, with a tracked measurement after every layer.
fn track_brickwork(tracker: &mut Frames<Map<PauliStack<BitVec>>>, num_qubits: usize, layers: usize) {
    let mut rng = StdRng::seed_from_u64(0xb5fe);
    for layer in 0..layers {
        for qubit in 0..num_qubits {
            match rng.gen_range(0..3) {
                0 => tracker.h(qubit),
                1 => tracker.s(qubit),
                _ => tracker.sx(qubit),
            }
        }
        let offset = layer % 2;
        for qubit in (offset..num_qubits - 1).step_by(2) {
            tracker.cx(qubit, qubit + 1);
        }
        tracker.track_x(rng.gen_range(0..num_qubits));
    }
}

pub fn frames_tracking_benchmark(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("Frames::brickwork");
    for num_qubits in [16usize, 64usize, 256usize] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_qubits),
            &num_qubits,
            |bencher, &num_qubits| {
                bencher.iter_batched(
                    || Frames::init(num_qubits),
                    |mut tracker| {
                        track_brickwork(&mut tracker, num_qubits, 100);
                        tracker
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(benches, frames_tracking_benchmark);
criterion_main!(benches);
