//! Graph Path - single-source, single-target edge-path search
//!
//! The engine takes a graph as flat lists of vertices and edges, builds an
//! adjacency view, runs a FIFO worklist relaxation from the source vertex and
//! returns the ordered edge identifiers leading to the target.
//!
//! Each vertex's outgoing edges are enqueued at most once per invocation, so
//! the result is not always the globally cheapest path. A priority-queue
//! [`Dijkstra`] is provided for comparison.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::Dijkstra, worklist::WorklistRelaxation, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{AdjacencyView, Edge, EdgeId, Vertex, VertexId};

use num_traits::Float;
use std::fmt::Debug;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("vertices are not connected")]
    NotConnected,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Finds the edge path from `source` to `target` with the worklist engine.
///
/// Returns an empty path when `source == target` and [`Error::NotConnected`]
/// when the target is never reached.
pub fn shortest_path<W>(
    vertices: &[Vertex],
    edges: &[Edge<W>],
    source: VertexId,
    target: VertexId,
) -> Result<Vec<EdgeId>>
where
    W: Float + Debug,
{
    WorklistRelaxation::new().shortest_path(vertices, edges, source, target)
}
