use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use route_trie::Builder;

/// Builds a trie with `n` sibling resource groups, each exposing a literal, a parameter and a
/// catch-all route, so lookups exercise all three child kinds at every depth.
fn build_trie(n: usize) -> route_trie::Trie<usize> {
    let mut builder = Builder::new();
    for i in 0..n {
        builder.add(&format!("/resource{i}/items"), i).unwrap();
        builder.add(&format!("/resource{i}/items/:"), i).unwrap();
        builder.add(&format!("/resource{i}/items/:/*"), i).unwrap();
    }
    builder.build().unwrap()
}

fn build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [10, 100, 1_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("patterns", n), &n, |b, &n| {
            b.iter(|| build_trie(n));
        });
    }
}

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for n in [10, 100, 1_000] {
        let trie = build_trie(n);
        let path = format!("/resource{}/items/42/tail/of/the/path", n / 2);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("find", n), &path, |b, path| {
            b.iter(|| trie.find(path));
        });
        group.bench_with_input(BenchmarkId::new("find_all", n), &path, |b, path| {
            b.iter(|| trie.find_all(path));
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(3));
    targets = build_benchmark, lookup_benchmark
}

criterion_main!(benches);
