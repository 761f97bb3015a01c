use num_traits::Float;
use std::fmt::Debug;

/// Opaque vertex identifier
pub type VertexId = i64;

/// Opaque edge identifier
pub type EdgeId = i64;

/// A vertex as seen by the engine. Only the identifier takes part in the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub id: VertexId,
}

impl Vertex {
    pub fn new(id: VertexId) -> Self {
        Vertex { id }
    }
}

impl From<VertexId> for Vertex {
    fn from(id: VertexId) -> Self {
        Vertex { id }
    }
}

/// A directed, weighted edge carrying its own identifier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<W>
where
    W: Float + Debug,
{
    pub id: EdgeId,
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

impl<W> Edge<W>
where
    W: Float + Debug,
{
    /// Creates a new edge from `from` to `to`
    pub fn new(id: EdgeId, from: VertexId, to: VertexId, weight: W) -> Self {
        Edge {
            id,
            from,
            to,
            weight,
        }
    }

    /// Returns true if the edge starts and ends at the same vertex
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}
