use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

use crate::graph::{AdjacencyView, Edge, EdgeId, Vertex, VertexId};
use crate::{Error, Result};

/// Result of a single-source run
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Best known distance from the source to each reached vertex
    pub distances: HashMap<VertexId, W>,

    /// Best known edge path from the source to each reached vertex.
    /// Every path is an independent copy.
    pub paths: HashMap<VertexId, Vec<Edge<W>>>,

    /// Source vertex ID
    pub source: VertexId,

    /// Number of edges taken off the worklist
    pub edges_relaxed: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Debug,
{
    /// Creates an empty result for `source`
    pub fn new(source: VertexId) -> Self {
        ShortestPathResult {
            distances: HashMap::new(),
            paths: HashMap::new(),
            source,
            edges_relaxed: 0,
        }
    }

    /// Recorded distance of a vertex
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.distances.get(&vertex).copied()
    }

    /// Recorded edge path of a vertex
    pub fn path(&self, vertex: VertexId) -> Option<&[Edge<W>]> {
        self.paths.get(&vertex).map(Vec::as_slice)
    }

    /// Edge ids of the recorded path to `target`, None when absent or empty
    pub fn edge_ids_to(&self, target: VertexId) -> Option<Vec<EdgeId>> {
        match self.paths.get(&target) {
            Some(path) if !path.is_empty() => Some(path.iter().map(|e| e.id).collect()),
            _ => None,
        }
    }

    /// Distance of `vertex`, falling back to zero when nothing is recorded
    pub(crate) fn distance_or_zero(&self, vertex: VertexId) -> W {
        self.distance(vertex).unwrap_or_else(W::zero)
    }

    /// Records `distance` for `to` with the path of `edge.from` followed by `edge`
    pub(crate) fn record(&mut self, edge: &Edge<W>, distance: W) {
        let mut path = self.paths.get(&edge.from).cloned().unwrap_or_default();
        path.push(*edge);
        self.distances.insert(edge.to, distance);
        self.paths.insert(edge.to, path);
    }
}

/// Trait for single-source, single-target path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Debug,
{
    /// Runs the algorithm from `source` over the whole view
    fn compute_paths(&self, graph: &AdjacencyView<W>, source: VertexId) -> ShortestPathResult<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Finds the edge ids leading from `source` to `target`.
    ///
    /// `source == target` is an empty path, never an error.
    fn shortest_path(
        &self,
        vertices: &[Vertex],
        edges: &[Edge<W>],
        source: VertexId,
        target: VertexId,
    ) -> Result<Vec<EdgeId>> {
        if source == target {
            return Ok(Vec::new());
        }

        let graph = AdjacencyView::build(vertices, edges);
        let result = self.compute_paths(&graph, source);

        log::debug!(
            "{}: {} -> {} relaxed {} edges, reached {} vertices",
            self.name(),
            source,
            target,
            result.edges_relaxed,
            result.distances.len()
        );

        result.edge_ids_to(target).ok_or(Error::NotConnected)
    }
}
