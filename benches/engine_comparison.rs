use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use routegraph::graph::generators::connected_random_graph;
use routegraph::{HeapDijkstra, MinScanDijkstra, ShortestPathAlgorithm};

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_source");

    for &n in &[50usize, 200, 500] {
        let graph = connected_random_graph(n, n * 2);

        group.bench_with_input(BenchmarkId::new("min_scan", n), &graph, |b, g| {
            b.iter(|| MinScanDijkstra::new().compute(g, 0).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("heap", n), &graph, |b, g| {
            b.iter(|| HeapDijkstra::new().compute(g, 0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_engines);
criterion_main!(benches);
