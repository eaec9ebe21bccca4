//! Formatting benchmarks for timeago

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use timeago::prelude::*;

fn bucketize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bucketize");
    group.throughput(Throughput::Elements(1));

    for seconds in [45u64, 5_400, 300_000, 40_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(seconds), &seconds, |b, &s| {
            b.iter(|| black_box(bucketize(black_box(s))));
        });
    }

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("format_elapsed");
    group.throughput(Throughput::Elements(1));

    for language in ["en", "ru"] {
        let formatter = Formatter::new(Settings::default().with_language(language))
            .with_cache(Arc::new(TableCache::new()));
        let options = Options::new();
        // Warm the cache so the loop measures lookups only
        formatter.table().unwrap();

        group.bench_function(BenchmarkId::new("cached", language), |b| {
            b.iter(|| black_box(formatter.format_elapsed(black_box(93_784), &options).unwrap()));
        });
    }

    let formatter = Formatter::new(Settings::default()).with_cache(Arc::new(TableCache::new()));
    formatter.table().unwrap();
    group.bench_function("text_input", |b| {
        b.iter(|| {
            black_box(
                formatter
                    .format(black_box("2020-02-29 12:00:00"), &Options::new())
                    .unwrap(),
            )
        });
    });

    group.finish();
}

fn table_load_benchmark(c: &mut Criterion) {
    c.bench_function("table_load_cold", |b| {
        b.iter(|| {
            let cache = TableCache::new();
            black_box(cache.get_or_load(&EmbeddedSource, "ru").unwrap())
        });
    });
}

criterion_group!(benches, bucketize_benchmark, format_benchmark, table_load_benchmark);
criterion_main!(benches);
