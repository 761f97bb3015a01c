use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::graph::{EdgeId, VertexId};
use crate::web::models::{EdgeRecord, GraphId, GraphRecord, VertexRecord};

/// Storage errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("graph not found")]
    GraphNotFound,

    #[error("duplicated graph name")]
    DuplicatedGraphName,

    #[error("vertex not found")]
    VertexNotFound,

    #[error("edge not found")]
    EdgeNotFound,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Graph, vertex and edge storage used by the web API
pub trait GraphStore: Send + Sync {
    fn graph(&self, graph_id: GraphId) -> StoreResult<GraphRecord>;

    /// All graphs ordered by name
    fn graphs(&self) -> StoreResult<Vec<GraphRecord>>;

    fn add_graph(&self, name: &str) -> StoreResult<GraphId>;

    /// Removes a graph together with its vertices and edges
    fn remove_graph(&self, graph_id: GraphId) -> StoreResult<()>;

    fn vertex(&self, vertex_id: VertexId) -> StoreResult<VertexRecord>;

    /// Vertices of a graph in creation order
    fn vertexes(&self, graph_id: GraphId) -> StoreResult<Vec<VertexRecord>>;

    fn add_vertex(&self, vertex: VertexRecord) -> StoreResult<VertexId>;

    /// Updates the coordinates of an existing vertex
    fn set_vertex(&self, vertex: VertexRecord) -> StoreResult<()>;

    /// Removes a vertex and every edge touching it
    fn remove_vertex(&self, vertex_id: VertexId) -> StoreResult<()>;

    fn edge(&self, edge_id: EdgeId) -> StoreResult<EdgeRecord>;

    /// Edges of a graph in creation order
    fn edges(&self, graph_id: GraphId) -> StoreResult<Vec<EdgeRecord>>;

    fn add_edge(&self, edge: EdgeRecord) -> StoreResult<EdgeId>;

    /// Updates the weight of an existing edge
    fn set_edge(&self, edge: EdgeRecord) -> StoreResult<()>;

    fn remove_edge(&self, edge_id: EdgeId) -> StoreResult<()>;
}

#[derive(Debug, Default)]
struct Tables {
    graphs: BTreeMap<GraphId, GraphRecord>,
    vertexes: BTreeMap<VertexId, VertexRecord>,
    edges: BTreeMap<EdgeId, EdgeRecord>,
    last_graph_id: GraphId,
    last_vertex_id: VertexId,
    last_edge_id: EdgeId,
}

/// Thread-safe in-memory store. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl GraphStore for MemoryStore {
    fn graph(&self, graph_id: GraphId) -> StoreResult<GraphRecord> {
        self.read()
            .graphs
            .get(&graph_id)
            .cloned()
            .ok_or(StoreError::GraphNotFound)
    }

    fn graphs(&self) -> StoreResult<Vec<GraphRecord>> {
        let mut graphs: Vec<GraphRecord> = self.read().graphs.values().cloned().collect();
        graphs.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(graphs)
    }

    fn add_graph(&self, name: &str) -> StoreResult<GraphId> {
        let mut tables = self.write();
        if tables.graphs.values().any(|g| g.name == name) {
            return Err(StoreError::DuplicatedGraphName);
        }

        tables.last_graph_id += 1;
        let id = tables.last_graph_id;
        tables.graphs.insert(
            id,
            GraphRecord {
                id,
                name: name.to_string(),
            },
        );
        Ok(id)
    }

    fn remove_graph(&self, graph_id: GraphId) -> StoreResult<()> {
        let mut tables = self.write();
        tables.graphs.remove(&graph_id);
        tables.vertexes.retain(|_, v| v.graph_id != graph_id);
        tables.edges.retain(|_, e| e.graph_id != graph_id);
        Ok(())
    }

    fn vertex(&self, vertex_id: VertexId) -> StoreResult<VertexRecord> {
        self.read()
            .vertexes
            .get(&vertex_id)
            .cloned()
            .ok_or(StoreError::VertexNotFound)
    }

    fn vertexes(&self, graph_id: GraphId) -> StoreResult<Vec<VertexRecord>> {
        Ok(self
            .read()
            .vertexes
            .values()
            .filter(|v| v.graph_id == graph_id)
            .cloned()
            .collect())
    }

    fn add_vertex(&self, mut vertex: VertexRecord) -> StoreResult<VertexId> {
        let mut tables = self.write();
        if !tables.graphs.contains_key(&vertex.graph_id) {
            return Err(StoreError::GraphNotFound);
        }

        tables.last_vertex_id += 1;
        vertex.id = tables.last_vertex_id;
        tables.vertexes.insert(vertex.id, vertex.clone());
        Ok(vertex.id)
    }

    fn set_vertex(&self, vertex: VertexRecord) -> StoreResult<()> {
        let mut tables = self.write();
        let stored = tables
            .vertexes
            .get_mut(&vertex.id)
            .ok_or(StoreError::VertexNotFound)?;
        stored.x = vertex.x;
        stored.y = vertex.y;
        Ok(())
    }

    fn remove_vertex(&self, vertex_id: VertexId) -> StoreResult<()> {
        let mut tables = self.write();
        if tables.vertexes.remove(&vertex_id).is_none() {
            return Err(StoreError::VertexNotFound);
        }
        tables
            .edges
            .retain(|_, e| e.from != vertex_id && e.to != vertex_id);
        Ok(())
    }

    fn edge(&self, edge_id: EdgeId) -> StoreResult<EdgeRecord> {
        self.read()
            .edges
            .get(&edge_id)
            .cloned()
            .ok_or(StoreError::EdgeNotFound)
    }

    fn edges(&self, graph_id: GraphId) -> StoreResult<Vec<EdgeRecord>> {
        Ok(self
            .read()
            .edges
            .values()
            .filter(|e| e.graph_id == graph_id)
            .cloned()
            .collect())
    }

    fn add_edge(&self, mut edge: EdgeRecord) -> StoreResult<EdgeId> {
        let mut tables = self.write();
        if !tables.graphs.contains_key(&edge.graph_id) {
            return Err(StoreError::GraphNotFound);
        }

        let in_graph = |id: VertexId| {
            tables
                .vertexes
                .get(&id)
                .map_or(false, |v| v.graph_id == edge.graph_id)
        };
        if !in_graph(edge.from) || !in_graph(edge.to) {
            return Err(StoreError::VertexNotFound);
        }

        tables.last_edge_id += 1;
        edge.id = tables.last_edge_id;
        tables.edges.insert(edge.id, edge.clone());
        Ok(edge.id)
    }

    fn set_edge(&self, edge: EdgeRecord) -> StoreResult<()> {
        let mut tables = self.write();
        let stored = tables
            .edges
            .get_mut(&edge.id)
            .ok_or(StoreError::EdgeNotFound)?;
        stored.weight = edge.weight;
        Ok(())
    }

    fn remove_edge(&self, edge_id: EdgeId) -> StoreResult<()> {
        self.write()
            .edges
            .remove(&edge_id)
            .map(|_| ())
            .ok_or(StoreError::EdgeNotFound)
    }
}
