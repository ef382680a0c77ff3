use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pagesim::{compare, compare_parallel, PolicyKind, ReferenceString, SimConfig, Simulator};

/// Deterministic pseudo-random trace with a hot working set.
fn workload(len: usize, pages: i64) -> ReferenceString {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let hot = state % 4 != 0;
            let span = if hot { pages / 4 } else { pages };
            (state >> 8) as i64 % span.max(1)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let trace = workload(2_000, 64);
    let config = SimConfig::new(8).unwrap();

    let mut group = c.benchmark_group("policy");
    for kind in PolicyKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| Simulator::new(kind, config).run(black_box(&trace)))
        });
    }
    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let trace = workload(2_000, 64);
    let config = SimConfig::new(8).unwrap();

    c.bench_function("compare", |b| b.iter(|| compare(black_box(&trace), config)));
    c.bench_function("compare_parallel", |b| {
        b.iter(|| compare_parallel(black_box(&trace), config))
    });
}

criterion_group!(benches, bench_policies, bench_compare);
criterion_main!(benches);
