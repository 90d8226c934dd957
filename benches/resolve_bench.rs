use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use thmenv::{get_theorem_like_env, registry::registry};

fn bench_resolve(c: &mut Criterion) {
    // Force the one-time build outside the measured loop.
    black_box(registry());

    let mut group = c.benchmark_group("resolve");

    let keys = vec![
        ("axiom", "first id"),
        ("rmk", "last prefix"),
        ("THEOREM", "uppercase id"),
        ("演習問題", "Japanese name"),
        ("Hypothesis", "English name"),
        ("not-a-real-env", "miss (ASCII)"),
        ("証明", "miss (proof name)"),
    ];

    for (key, desc) in &keys {
        group.bench_with_input(BenchmarkId::new("get_theorem_like_env", desc), key, |b, key| {
            b.iter(|| black_box(get_theorem_like_env(black_box(key)).is_ok()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
