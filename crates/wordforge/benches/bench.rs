use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use wordforge::{Options, combine, generate, seed_tokens};

fn profile(related: &[&str]) -> Options {
    Options::builder()
        .first_names(["sasha", "maria"])
        .last_names(["ivanova"])
        .birthday(["07", "03", "1994"])
        .related_words(related.iter().copied())
        .leet(true)
        .capitalize(true)
        .build()
}

/// Benchmarks the full engine for growing seed sets.
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let words = ["tesla", "oslo", "rex", "guitar", "summer", "hawks"];

    for take in [0, 2, 4, 6] {
        let options = profile(&words[..take]);
        let seeds = seed_tokens(&options).len();
        group.throughput(Throughput::Elements(seeds as u64));
        group.bench_function(format!("seeds/{seeds}"), |b| {
            b.iter(|| black_box(generate(black_box(&options))))
        });
    }
    group.finish();
}

/// Benchmarks the combinator on its own, without variants or filtering.
fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("combine");
    for n in [8, 16, 24] {
        let seeds: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
        group.bench_function(format!("seeds/{n}"), |b| {
            b.iter(|| black_box(combine(black_box(&seeds))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_combine);
criterion_main!(benches);
