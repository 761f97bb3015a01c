use crate::graph::types::{Edge, Vertex, VertexId};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;

/// Outgoing edges per vertex, built once from flat vertex and edge lists
#[derive(Debug, Clone)]
pub struct AdjacencyView<W>
where
    W: Float + Debug,
{
    /// Outgoing edges for each vertex: vertex_id -> [edge], in input order
    outgoing_edges: HashMap<VertexId, Vec<Edge<W>>>,

    /// Number of edges kept in the view
    edge_count: usize,
}

impl<W> AdjacencyView<W>
where
    W: Float + Debug,
{
    /// Builds the adjacency view.
    ///
    /// Every listed vertex gets an entry, even without outgoing edges.
    /// Duplicate vertex ids collapse into one entry. Edges whose source is
    /// not listed are left out, so an unlisted vertex can be reached but
    /// never expanded.
    pub fn build(vertices: &[Vertex], edges: &[Edge<W>]) -> Self {
        let mut outgoing_edges: HashMap<VertexId, Vec<Edge<W>>> =
            HashMap::with_capacity(vertices.len());

        for vertex in vertices {
            outgoing_edges.entry(vertex.id).or_default();
        }

        for edge in edges {
            if let Some(list) = outgoing_edges.get_mut(&edge.from) {
                list.push(*edge);
            }
        }

        let edge_count = outgoing_edges.values().map(Vec::len).sum();

        AdjacencyView {
            outgoing_edges,
            edge_count,
        }
    }

    /// Returns the outgoing edges of a vertex, empty for unknown ids
    pub fn outgoing_edges(&self, vertex: VertexId) -> &[Edge<W>] {
        self.outgoing_edges
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if the vertex has an entry in the view
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.outgoing_edges.contains_key(&vertex)
    }

    /// Number of distinct vertex ids with an entry
    pub fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
