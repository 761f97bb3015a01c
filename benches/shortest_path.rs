use criterion::{black_box, criterion_group, criterion_main, Criterion};
use graph_path::graph::generators::{generate_grid, generate_random};
use graph_path::{shortest_path, Edge, Vertex};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn three_vertices(c: &mut Criterion) {
    let vertices = vec![Vertex::new(0), Vertex::new(1), Vertex::new(2)];
    let edges = vec![
        Edge::new(0, 0, 1, 0.5),
        Edge::new(1, 1, 2, 0.5),
        Edge::new(2, 0, 2, 1.1),
    ];

    c.bench_function("three vertices", |b| {
        b.iter(|| shortest_path(black_box(&vertices), black_box(&edges), 0, 2))
    });
}

fn grid(c: &mut Criterion) {
    let (vertices, edges) = generate_grid(100, 100);

    c.bench_function("grid 100x100 corner to corner", |b| {
        b.iter(|| shortest_path(black_box(&vertices), black_box(&edges), 0, 9_999))
    });
}

fn random(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let (vertices, edges) = generate_random(&mut rng, 10_000, 4.0);

    c.bench_function("random 10k vertices", |b| {
        b.iter(|| shortest_path(black_box(&vertices), black_box(&edges), 0, 9_999))
    });
}

criterion_group!(benches, three_vertices, grid, random);
criterion_main!(benches);
