use serde::{Deserialize, Serialize};

use crate::graph::{Edge, EdgeId, Vertex, VertexId};

pub type GraphId = i64;

/// A named graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRecord {
    pub id: GraphId,
    pub name: String,
}

/// A stored vertex with its drawing coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexRecord {
    #[serde(default)]
    pub id: VertexId,
    pub graph_id: GraphId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// A stored directed edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(default)]
    pub id: EdgeId,
    pub graph_id: GraphId,
    #[serde(default)]
    pub from: VertexId,
    #[serde(default)]
    pub to: VertexId,
    #[serde(default)]
    pub weight: f64,
}

impl From<&VertexRecord> for Vertex {
    fn from(record: &VertexRecord) -> Self {
        Vertex::new(record.id)
    }
}

impl From<&EdgeRecord> for Edge<f64> {
    fn from(record: &EdgeRecord) -> Self {
        Edge::new(record.id, record.from, record.to, record.weight)
    }
}

/// A graph with all of its vertices and edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDetails {
    pub graph: GraphRecord,
    pub vertexes: Vec<VertexRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// Body of a graph creation request
#[derive(Debug, Deserialize)]
pub struct NewGraphRequest {
    #[serde(default)]
    pub name: String,
}

/// Query string of a shortest path request. Parsed by hand so that bad
/// values produce a descriptive error.
#[derive(Debug, Default, Deserialize)]
pub struct ShortestPathQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// The rejected input, keyed by parameter name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
