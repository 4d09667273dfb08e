use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csr_bfs::algo::bfs::{ParHybrid, Seq};
use csr_bfs::graph;
use csr_bfs::utils::Distances;
use dsi_progress_logger::no_logging;

fn bench_bfs(c: &mut Criterion) {
    let mut group = c.benchmark_group("Breadth-first visit");
    group.sample_size(20);

    for &(num_nodes, density) in &[(1_000usize, 0.01f64), (10_000, 0.001)] {
        let graph = graph::random_undirected(num_nodes, density, 42).unwrap();
        let dist = Distances::new(graph.num_nodes());
        let parameter = format!("{} nodes, {} arcs", graph.num_nodes(), graph.num_arcs());
        group.throughput(Throughput::Elements(graph.num_arcs() as u64));

        group.bench_with_input(
            BenchmarkId::new("Sequential", &parameter),
            &graph,
            |b, graph| {
                b.iter(|| {
                    Seq::new(graph).visit(0, &dist, no_logging![]).unwrap();
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Hybrid (granularity 4)", &parameter),
            &graph,
            |b, graph| {
                let visit = ParHybrid::new(graph, 4);
                b.iter(|| {
                    visit.visit(0, &dist, no_logging![]).unwrap();
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Hybrid (granularity 64)", &parameter),
            &graph,
            |b, graph| {
                let visit = ParHybrid::new(graph, 64);
                b.iter(|| {
                    visit.visit(0, &dist, no_logging![]).unwrap();
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Hybrid multi-source", &parameter),
            &graph,
            |b, graph| {
                let visit = ParHybrid::new(graph, 4);
                b.iter(|| {
                    visit.visit_all(&dist, no_logging![]).unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_bfs);
criterion_main!(benches);
