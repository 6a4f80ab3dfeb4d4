//! Engine throughput benchmarks.
//!
//! Measures records per second across batch sizes for a schema touching
//! every generator family.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use mocksmith_core::{Engine, EngineConfig};
use mocksmith_testutil::mixed_type_schema;

fn bench_generate(c: &mut Criterion) {
    // Lift the item ceiling so the largest batch fits.
    let config = EngineConfig {
        max_projected_items: 1_000_000,
        seed: Some(42),
        ..EngineConfig::default()
    };
    let engine = Engine::new(config);
    let schema = mixed_type_schema();

    let mut group = c.benchmark_group("generate");
    for &count in &[10usize, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| engine.generate(&schema, count).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
