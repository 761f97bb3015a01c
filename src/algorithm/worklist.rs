use num_traits::Float;
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::EdgeQueue;
use crate::graph::{AdjacencyView, Edge, VertexId};

/// Label-correcting relaxation over a FIFO worklist of edges.
///
/// A vertex's outgoing edges are enqueued at most once, the first time the
/// vertex is reached. Its distance and path may still improve afterwards, but
/// the improvement is not propagated to vertices beyond it. This bounds the
/// work to one dequeue per edge and means the result can differ from
/// [`Dijkstra`](crate::Dijkstra) when a cheaper route to an already expanded
/// vertex is found late.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorklistRelaxation;

impl WorklistRelaxation {
    /// Creates a new engine instance
    pub fn new() -> Self {
        WorklistRelaxation
    }
}

impl<W> ShortestPathAlgorithm<W> for WorklistRelaxation
where
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Worklist relaxation"
    }

    fn compute_paths(&self, graph: &AdjacencyView<W>, source: VertexId) -> ShortestPathResult<W> {
        let mut result = ShortestPathResult::new(source);

        let mut visited: HashSet<VertexId> = HashSet::new();
        visited.insert(source);

        let mut worklist: EdgeQueue<Edge<W>> = EdgeQueue::from_slice(graph.outgoing_edges(source));

        while let Some(edge) = worklist.pop() {
            result.edges_relaxed += 1;

            // The source is never recorded unless an edge leads back to it,
            // so an absent distance counts as zero.
            let candidate = result.distance_or_zero(edge.from) + edge.weight;

            // Ties keep the first path found.
            let improves = match result.distance(edge.to) {
                None => true,
                Some(current) => candidate < current,
            };

            if improves {
                log::trace!(
                    "edge {} improves vertex {} to {:?}",
                    edge.id,
                    edge.to,
                    candidate
                );
                result.record(&edge, candidate);
            }

            if visited.insert(edge.to) {
                worklist.extend_from_slice(graph.outgoing_edges(edge.to));
            }
        }

        log::debug!(
            "worklist from {} drained after {} of {} edges",
            source,
            worklist.total_enqueued(),
            graph.edge_count()
        );

        result
    }
}
