use axum::{
    extract::{
        rejection::JsonRejection,
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::broadcast::{self, error::RecvError};

use crate::graph::{Edge, EdgeId, Vertex, VertexId};
use crate::web::events::{GraphEvent, GraphEvents};
use crate::web::models::*;
use crate::web::store::{GraphStore, MemoryStore, StoreError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GraphStore>,
    pub events: Arc<GraphEvents>,
}

impl AppState {
    /// State backed by an empty [`MemoryStore`]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Arc<dyn GraphStore>) -> Self {
        Self {
            store,
            events: Arc::new(GraphEvents::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors returned by the API handlers
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    /// A path or query parameter that failed to parse
    #[error("{message}")]
    InvalidParameter {
        message: String,
        name: String,
        value: String,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Search(#[from] crate::Error),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) | ApiError::InvalidParameter { .. } => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            ApiError::Store(StoreError::GraphNotFound) => {
                (StatusCode::NOT_FOUND, "graph_not_found")
            }
            ApiError::Store(StoreError::VertexNotFound) => {
                (StatusCode::NOT_FOUND, "vertex_not_found")
            }
            ApiError::Store(StoreError::EdgeNotFound) => (StatusCode::NOT_FOUND, "edge_not_found"),
            ApiError::Store(StoreError::DuplicatedGraphName) => {
                (StatusCode::BAD_REQUEST, "duplicated_graph_name")
            }
            ApiError::Search(crate::Error::NotConnected) => {
                (StatusCode::BAD_REQUEST, "not_connected")
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::InvalidParameter { name, value, .. } => {
                let mut details = serde_json::Map::new();
                details.insert(name.clone(), serde_json::Value::String(value.clone()));
                Some(serde_json::Value::Object(details))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_code();
        let details = self.details();
        let message = self.to_string();

        if status.is_server_error() {
            log::error!("request failed: {}", message);
        } else {
            log::warn!("request rejected: {}", message);
        }

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
                details,
            }),
        )
            .into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", get(list_graphs).post(add_graph))
        .route("/api/graphs/:graph_id", get(get_graph).delete(remove_graph))
        .route("/api/graphs/:graph_id/shortest-path", get(shortest_path))
        .route("/api/graphs/:graph_id/ws", get(graph_updates))
        .route("/api/vertexes", post(add_vertex).put(set_vertex))
        .route("/api/vertexes/:vertex_id", delete(remove_vertex))
        .route("/api/edges", post(add_edge).put(set_edge))
        .route("/api/edges/:edge_id", delete(remove_edge))
        .route("/api/health", get(health_check))
}

fn parse_id(raw: &str, name: &str) -> ApiResult<i64> {
    raw.parse().map_err(|_| ApiError::InvalidParameter {
        message: format!("invalid {}", name),
        name: name.to_string(),
        value: raw.to_string(),
    })
}

fn parse_query_id(raw: Option<&str>, name: &str) -> ApiResult<i64> {
    let raw = raw.ok_or_else(|| ApiError::BadRequest(format!("missing {}", name)))?;
    raw.parse().map_err(|e| ApiError::InvalidParameter {
        message: format!("failed to parse {}: {}", name, e),
        name: name.to_string(),
        value: raw.to_string(),
    })
}

fn body<T>(payload: Result<Json<T>, JsonRejection>, what: &str) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|e| ApiError::BadRequest(format!("bind {}: {}", what, e.body_text())))
}

/// List graphs ordered by name
pub async fn list_graphs(State(state): State<AppState>) -> ApiResult<Json<Vec<GraphRecord>>> {
    Ok(Json(state.store.graphs()?))
}

/// Create a new graph
pub async fn add_graph(
    State(state): State<AppState>,
    payload: Result<Json<NewGraphRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<GraphId>)> {
    let request = body(payload, "graph")?;
    if request.name.is_empty() {
        return Err(ApiError::BadRequest("empty name".to_string()));
    }

    let id = state.store.add_graph(&request.name)?;
    log::info!("graph {} created with name {:?}", id, request.name);

    Ok((StatusCode::CREATED, Json(id)))
}

/// Get a graph with its vertices and edges
pub async fn get_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<String>,
) -> ApiResult<Json<GraphDetails>> {
    let graph_id = parse_id(&graph_id, "graph_id")?;
    let graph = state.store.graph(graph_id)?;

    Ok(Json(GraphDetails {
        graph,
        vertexes: state.store.vertexes(graph_id)?,
        edges: state.store.edges(graph_id)?,
    }))
}

/// Remove a graph
pub async fn remove_graph(
    State(state): State<AppState>,
    Path(graph_id): Path<String>,
) -> ApiResult<StatusCode> {
    let graph_id = parse_id(&graph_id, "graph_id")?;
    state.store.remove_graph(graph_id)?;
    log::info!("graph {} removed", graph_id);

    state.events.publish(graph_id, GraphEvent::GraphRemoved);
    state.events.close(graph_id);

    Ok(StatusCode::NO_CONTENT)
}

/// Find the edge path between two vertices of a graph
pub async fn shortest_path(
    State(state): State<AppState>,
    Path(graph_id): Path<String>,
    Query(query): Query<ShortestPathQuery>,
) -> ApiResult<Json<Vec<EdgeId>>> {
    let graph_id = parse_id(&graph_id, "graph_id")?;
    let from: VertexId = parse_query_id(query.from.as_deref(), "from")?;
    let to: VertexId = parse_query_id(query.to.as_deref(), "to")?;

    state.store.graph(graph_id)?;
    let vertices: Vec<Vertex> = state
        .store
        .vertexes(graph_id)?
        .iter()
        .map(Vertex::from)
        .collect();
    let edges: Vec<Edge<f64>> = state
        .store
        .edges(graph_id)?
        .iter()
        .map(Edge::from)
        .collect();

    let path = tokio::task::spawn_blocking(move || {
        crate::shortest_path(&vertices, &edges, from, to)
    })
    .await
    .map_err(|e| ApiError::Internal(format!("path search task failed: {}", e)))??;

    log::info!(
        "graph {}: path {} -> {} has {} edges",
        graph_id,
        from,
        to,
        path.len()
    );

    Ok(Json(path))
}

/// Add a vertex to a graph
pub async fn add_vertex(
    State(state): State<AppState>,
    payload: Result<Json<VertexRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<VertexId>)> {
    let vertex = body(payload, "vertex")?;
    let id = state.store.add_vertex(vertex)?;

    let stored = state.store.vertex(id)?;
    state
        .events
        .publish(stored.graph_id, GraphEvent::NewVertex(stored));

    Ok((StatusCode::CREATED, Json(id)))
}

/// Move a vertex
pub async fn set_vertex(
    State(state): State<AppState>,
    payload: Result<Json<VertexRecord>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let vertex = body(payload, "vertex")?;
    let vertex_id = vertex.id;
    state.store.set_vertex(vertex)?;

    let stored = state.store.vertex(vertex_id)?;
    state
        .events
        .publish(stored.graph_id, GraphEvent::VertexUpdate(stored));

    Ok(StatusCode::NO_CONTENT)
}

/// Remove a vertex and its edges
pub async fn remove_vertex(
    State(state): State<AppState>,
    Path(vertex_id): Path<String>,
) -> ApiResult<StatusCode> {
    let vertex_id = parse_id(&vertex_id, "vertex_id")?;
    let vertex = state.store.vertex(vertex_id)?;
    let touching: Vec<EdgeRecord> = state
        .store
        .edges(vertex.graph_id)?
        .into_iter()
        .filter(|e| e.from == vertex_id || e.to == vertex_id)
        .collect();

    state.store.remove_vertex(vertex_id)?;

    let graph_id = vertex.graph_id;
    for edge in touching {
        state.events.publish(graph_id, GraphEvent::EdgeRemoved(edge));
    }
    state
        .events
        .publish(graph_id, GraphEvent::VertexRemoved(vertex));

    Ok(StatusCode::NO_CONTENT)
}

/// Add an edge between two vertices of the same graph
pub async fn add_edge(
    State(state): State<AppState>,
    payload: Result<Json<EdgeRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<EdgeId>)> {
    let edge = body(payload, "edge")?;
    let id = state.store.add_edge(edge)?;

    let stored = state.store.edge(id)?;
    state
        .events
        .publish(stored.graph_id, GraphEvent::NewEdge(stored));

    Ok((StatusCode::CREATED, Json(id)))
}

/// Change the weight of an edge
pub async fn set_edge(
    State(state): State<AppState>,
    payload: Result<Json<EdgeRecord>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let edge = body(payload, "edge")?;
    let edge_id = edge.id;
    state.store.set_edge(edge)?;

    let stored = state.store.edge(edge_id)?;
    state
        .events
        .publish(stored.graph_id, GraphEvent::EdgeUpdate(stored));

    Ok(StatusCode::NO_CONTENT)
}

pub async fn remove_edge(
    State(state): State<AppState>,
    Path(edge_id): Path<String>,
) -> ApiResult<StatusCode> {
    let edge_id = parse_id(&edge_id, "edge_id")?;
    let edge = state.store.edge(edge_id)?;
    state.store.remove_edge(edge_id)?;

    state
        .events
        .publish(edge.graph_id, GraphEvent::EdgeRemoved(edge));

    Ok(StatusCode::NO_CONTENT)
}

/// Stream live updates of a graph over a WebSocket
pub async fn graph_updates(
    State(state): State<AppState>,
    Path(graph_id): Path<String>,
    ws: WebSocketUpgrade,
) -> ApiResult<Response> {
    let graph_id = parse_id(&graph_id, "graph_id")?;
    let graph = state.store.graph(graph_id)?;

    // Subscribe before the snapshot so no change falls between the two
    let receiver = state.events.subscribe(graph_id);
    let snapshot = GraphEvent::SetGraph(GraphDetails {
        graph,
        vertexes: state.store.vertexes(graph_id)?,
        edges: state.store.edges(graph_id)?,
    });
    log::debug!("graph {}: live update subscriber connected", graph_id);

    Ok(ws.on_upgrade(move |socket| stream_events(socket, graph_id, snapshot, receiver)))
}

async fn stream_events(
    mut socket: WebSocket,
    graph_id: GraphId,
    snapshot: GraphEvent,
    mut receiver: broadcast::Receiver<GraphEvent>,
) {
    if send_event(&mut socket, &snapshot).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            event = receiver.recv() => match event {
                Ok(event) => {
                    if send_event(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    log::warn!("graph {}: subscriber skipped {} events", graph_id, skipped);
                }
                Err(RecvError::Closed) => {
                    let _ = socket.send(Message::Close(None)).await;
                    break;
                }
            },
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    log::debug!("graph {}: live update subscriber disconnected", graph_id);
}

async fn send_event(socket: &mut WebSocket, event: &GraphEvent) -> Result<(), axum::Error> {
    let text = serde_json::to_string(event).map_err(axum::Error::new)?;
    socket.send(Message::Text(text)).await
}

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
