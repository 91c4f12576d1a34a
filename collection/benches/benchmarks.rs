//! Performance benchmarks for trove-collection

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use trove_collection::{Collection, WhereClause};

fn build_records(n: usize) -> Collection<Value> {
    let items = (0..n)
        .map(|i| {
            json!({
                "id": i,
                "group": i % 10,
                "name": format!("user_{i}"),
            })
        })
        .collect();
    Collection::with_primary_key(items, "id")
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for size in [100usize, 1_000, 10_000] {
        let collection = build_records(size);

        group.bench_with_input(BenchmarkId::new("filter", size), &collection, |b, col| {
            b.iter(|| col.filter(|item| item["group"] == json!(3)))
        });

        group.bench_with_input(
            BenchmarkId::new("where_attribute", size),
            &collection,
            |b, col| b.iter(|| col.where_(WhereClause::attribute("group", 3)).unwrap()),
        );

        group.bench_with_input(
            BenchmarkId::new("unique_by_group", size),
            &collection,
            |b, col| b.iter(|| col.unique(Some("group"))),
        );

        group.bench_with_input(BenchmarkId::new("chunk_64", size), &collection, |b, col| {
            b.iter(|| col.chunk(black_box(64)))
        });
    }

    group.finish();
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    let collection = build_records(10_000);

    group.bench_function("get_hit", |b| {
        b.iter(|| collection.get(black_box(9_999)))
    });

    group.bench_function("get_miss", |b| {
        b.iter(|| collection.get(black_box(123_456)))
    });

    group.finish();
}

criterion_group!(benches, bench_queries, bench_lookups);
criterion_main!(benches);
