//! Performance benchmarks for sorting and grouping
//!
//! Run with: cargo bench --bench collation_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kanasort_core::{Collator, Field, MatchStrategy, ReadingDictionary};
use std::hint::black_box;

const SAMPLE_NAMES: [&str; 12] = [
    "田中 太郎",
    "佐藤花子",
    "すずき",
    "タカハシ",
    "Smith",
    "伊藤忠商事",
    "王",
    "長谷川 由美",
    "がっこう",
    "株式会社トヨタ",
    "Brown",
    "山田 雄大",
];

/// Generate `count` names cycling through the samples
fn generate_names(count: usize) -> Vec<String> {
    SAMPLE_NAMES
        .iter()
        .cycle()
        .take(count)
        .enumerate()
        .map(|(i, name)| format!("{name}{}", i % 7))
        .collect()
}

/// Benchmark sorting at different input sizes
fn bench_sort_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_sizes");
    let collator = Collator::default();

    for size in [100, 1_000, 10_000] {
        let names = generate_names(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sort", size), &names, |b, names| {
            b.iter(|| collator.sorted(black_box(names), Field::Name));
        });
    }

    group.finish();
}

/// Compare the two substring match strategies
fn bench_match_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("match_strategies");
    let names = generate_names(1_000);

    for strategy in [MatchStrategy::FirstInserted, MatchStrategy::Longest] {
        let collator = Collator::with_dictionary(ReadingDictionary::embedded(), strategy);
        group.bench_with_input(
            BenchmarkId::new("sort_and_group", strategy),
            &names,
            |b, names| {
                b.iter(|| collator.sort_and_group(black_box(names.clone()), Field::Name));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sort_sizes, bench_match_strategies);
criterion_main!(benches);
