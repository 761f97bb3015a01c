use graph_path::algorithm::{
    dijkstra::Dijkstra, worklist::WorklistRelaxation, ShortestPathAlgorithm, ShortestPathResult,
};
use graph_path::graph::generators::generate_random;
use graph_path::graph::{AdjacencyView, Vertex, VertexId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &AdjacencyView<f64>,
    source: VertexId,
) -> (ShortestPathResult<f64>, Duration)
where
    A: ShortestPathAlgorithm<f64>,
{
    let start = Instant::now();
    let result = algorithm.compute_paths(graph, source);
    let duration = start.elapsed();

    println!(
        "  - {}: reached {} vertices, relaxed {} edges in {:?}",
        algorithm.name(),
        result.distances.len(),
        result.edges_relaxed,
        duration
    );

    (result, duration)
}

// Counts vertices whose worklist distance is worse than the optimal one
fn count_suboptimal(
    vertices: &[Vertex],
    worklist: &ShortestPathResult<f64>,
    optimal: &ShortestPathResult<f64>,
    source: VertexId,
) -> usize {
    vertices
        .iter()
        .filter(|v| v.id != source)
        .filter(|v| match (worklist.distance(v.id), optimal.distance(v.id)) {
            (Some(found), Some(best)) => found > best + 1e-9,
            _ => false,
        })
        .count()
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;
    let source: VertexId = 0;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: worklist relaxation vs Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let worklist = WorklistRelaxation::new();
    let dijkstra = Dijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let (vertices, edges) = generate_random(&mut rng, size, edge_factor);
        let graph = AdjacencyView::build(&vertices, &edges);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let (worklist_result, worklist_time) = benchmark_algorithm(&worklist, &graph, source);
        let (dijkstra_result, dijkstra_time) = benchmark_algorithm(&dijkstra, &graph, source);

        let suboptimal = count_suboptimal(&vertices, &worklist_result, &dijkstra_result, source);
        println!(
            "  {} of {} reached vertices have a longer worklist path",
            suboptimal,
            worklist_result.distances.len()
        );

        results.push((size, worklist_time, dijkstra_time, suboptimal));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10} | {:<10}",
        "Vertices", "Worklist (ms)", "Dijkstra (ms)", "Speedup", "Suboptimal"
    );
    println!("-----------------------------------------------------");

    for (size, worklist_time, dijkstra_time, suboptimal) in &results {
        let speedup = dijkstra_time.as_secs_f64() / worklist_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.2} | {:<10}",
            size,
            worklist_time.as_millis(),
            dijkstra_time.as_millis(),
            speedup,
            suboptimal
        );
    }
}
