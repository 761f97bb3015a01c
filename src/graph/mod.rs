pub mod adjacency;
pub mod generators;
pub mod types;

pub use adjacency::AdjacencyView;
pub use types::{Edge, EdgeId, Vertex, VertexId};
