use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{AdjacencyView, Edge, VertexId};

/// Classic Dijkstra's algorithm, used as a reference for the worklist engine.
///
/// Assumes non-negative weights. Equal-weight alternatives keep the first one found.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_paths(&self, graph: &AdjacencyView<W>, source: VertexId) -> ShortestPathResult<W> {
        let mut result = ShortestPathResult::new(source);

        let mut tentative: HashMap<VertexId, W> = HashMap::new();
        let mut predecessor: HashMap<VertexId, Edge<W>> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();

        tentative.insert(source, W::zero());

        let mut queue = BinaryHeapWrapper::new();
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, OrderedFloat(dist_u))) = queue.pop() {
            if !settled.insert(u) {
                continue;
            }

            // Predecessors are settled before their successors, so their
            // paths are already final.
            result.distances.insert(u, dist_u);
            let path = match predecessor.get(&u) {
                Some(edge) => {
                    let mut path = result.paths.get(&edge.from).cloned().unwrap_or_default();
                    path.push(*edge);
                    path
                }
                None => Vec::new(),
            };
            result.paths.insert(u, path);

            for edge in graph.outgoing_edges(u) {
                result.edges_relaxed += 1;

                if settled.contains(&edge.to) {
                    continue;
                }

                let new_dist = dist_u + edge.weight;
                let should_update = match tentative.get(&edge.to) {
                    None => true,
                    Some(&current) => new_dist < current,
                };

                if should_update {
                    tentative.insert(edge.to, new_dist);
                    predecessor.insert(edge.to, *edge);
                    queue.push(edge.to, OrderedFloat(new_dist));
                }
            }
        }

        result
    }
}
