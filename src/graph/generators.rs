use crate::graph::{Edge, EdgeId, Vertex, VertexId};
use rand::Rng;

/// A graph as flat vertex and edge lists
pub type FlatGraph = (Vec<Vertex>, Vec<Edge<f64>>);

/// Generates a random directed graph with n vertices and about `edge_factor * n` edges.
/// Self-loops are skipped, parallel edges are kept.
pub fn generate_random<R: Rng>(rng: &mut R, n: usize, edge_factor: f64) -> FlatGraph {
    let vertices: Vec<Vertex> = (0..n as VertexId).map(Vertex::new).collect();
    let mut edges = Vec::new();

    if n < 2 {
        return (vertices, edges);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n) as VertexId;
        let v = rng.gen_range(0..n) as VertexId;
        if u != v {
            let id = edges.len() as EdgeId;
            edges.push(Edge::new(id, u, v, rng.gen_range(1.0..100.0)));
        }
    }

    (vertices, edges)
}

/// Generates a 2D grid graph with width*height vertices and unit weights in both
/// directions between horizontal and vertical neighbours.
pub fn generate_grid(width: usize, height: usize) -> FlatGraph {
    let vertices: Vec<Vertex> = (0..(width * height) as VertexId).map(Vertex::new).collect();
    let mut edges = Vec::new();

    let index = |x: usize, y: usize| -> VertexId { (y * width + x) as VertexId };

    let connect = |edges: &mut Vec<Edge<f64>>, from: VertexId, to: VertexId| {
        let id = edges.len() as EdgeId;
        edges.push(Edge::new(id, from, to, 1.0));
    };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                connect(&mut edges, current, index(x - 1, y));
            }
            if x + 1 < width {
                connect(&mut edges, current, index(x + 1, y));
            }
            if y > 0 {
                connect(&mut edges, current, index(x, y - 1));
            }
            if y + 1 < height {
                connect(&mut edges, current, index(x, y + 1));
            }
        }
    }

    (vertices, edges)
}

/// Generates a random geometric graph in the unit square.
/// Points within distance `r` of each other are connected in both directions,
/// weighted by their Euclidean distance.
pub fn generate_geometric<R: Rng>(rng: &mut R, n: usize, r: f64) -> FlatGraph {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0)))
        .collect();
    let vertices: Vec<Vertex> = (0..n as VertexId).map(Vertex::new).collect();
    let mut edges = Vec::new();

    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            let (x1, y1) = points[i];
            let (x2, y2) = points[j];
            let dist = ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt();
            if dist <= r {
                let id = edges.len() as EdgeId;
                edges.push(Edge::new(id, i as VertexId, j as VertexId, dist));
            }
        }
    }

    (vertices, edges)
}
