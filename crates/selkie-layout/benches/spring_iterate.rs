use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use selkie_graph::{SparseGraph, generators};
use selkie_layout::{IterativeGraphLayout, SpringLayout, StaticLayout, layout};
use std::hint::black_box;
use std::time::Duration;

fn random_graph(nodes: usize, edges: usize) -> SparseGraph<usize> {
    let mut rng = StdRng::seed_from_u64(7);
    generators::random_by_edge_count(false, nodes, edges, &mut rng)
        .unwrap_or_else(|_| generators::empty(false, nodes))
}

fn bench_spring_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("spring_iterate");
    group.measurement_time(Duration::from_secs(5));

    let cases = [
        ("n100_m200", 100usize, 200usize),
        ("n1000_m3000", 1000, 3000),
        ("n5000_m10000", 5000, 10000),
    ];

    for (name, nodes, edges) in cases {
        let g = random_graph(nodes, edges);
        let start = match layout(&g, &StaticLayout::seeded_random(nodes as f64, 1)) {
            Ok(p) => p,
            Err(_) => continue,
        };
        let spring = SpringLayout::new();
        spring.reset(start);
        // Let the initial transient pass before measuring.
        for _ in 0..10 {
            spring.iterate(&g);
        }

        group.bench_with_input(BenchmarkId::new("spring::iterate", name), &g, |b, g| {
            b.iter(|| black_box(spring.iterate(black_box(g)).len()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_spring_iterate);
criterion_main!(benches);
