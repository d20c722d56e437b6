use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mix_sim::{simulate, SimulationConfig};

fn run_throughput_bench(c: &mut Criterion) {
    c.bench_function("simulate_100_nodes_60s", |b| {
        b.iter(|| {
            let report = simulate(&SimulationConfig::new(100, 42)).unwrap();
            black_box(report);
        });
    });
}

criterion_group!(benches, run_throughput_bench);
criterion_main!(benches);
