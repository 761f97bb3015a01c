use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::broadcast;

use crate::web::models::{EdgeRecord, GraphDetails, GraphId, VertexRecord};

/// Events pending per subscriber before it starts lagging
const CHANNEL_CAPACITY: usize = 64;

/// A change to one graph, sent to live subscribers as
/// `{"type": "...", "data": ...}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum GraphEvent {
    /// Full snapshot, sent once when a subscriber connects
    SetGraph(GraphDetails),
    NewVertex(VertexRecord),
    VertexUpdate(VertexRecord),
    VertexRemoved(VertexRecord),
    NewEdge(EdgeRecord),
    EdgeUpdate(EdgeRecord),
    EdgeRemoved(EdgeRecord),
    GraphRemoved,
}

/// Per-graph broadcast channels for live updates.
///
/// A channel is created on first subscription and dropped once it has no
/// receivers left or its graph is closed.
#[derive(Debug)]
pub struct GraphEvents {
    channels: Mutex<HashMap<GraphId, broadcast::Sender<GraphEvent>>>,
    capacity: usize,
}

impl GraphEvents {
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            channels: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    fn channels(&self) -> MutexGuard<'_, HashMap<GraphId, broadcast::Sender<GraphEvent>>> {
        self.channels.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Starts receiving events published for `graph_id` from now on
    pub fn subscribe(&self, graph_id: GraphId) -> broadcast::Receiver<GraphEvent> {
        let capacity = self.capacity;
        self.channels()
            .entry(graph_id)
            .or_insert_with(|| broadcast::channel(capacity).0)
            .subscribe()
    }

    /// Sends `event` to every subscriber of `graph_id` and returns how many
    /// received it
    pub fn publish(&self, graph_id: GraphId, event: GraphEvent) -> usize {
        let mut channels = self.channels();
        let Some(sender) = channels.get(&graph_id) else {
            return 0;
        };

        match sender.send(event) {
            Ok(receivers) => {
                log::debug!("graph {}: event sent to {} subscribers", graph_id, receivers);
                receivers
            }
            Err(_) => {
                channels.remove(&graph_id);
                0
            }
        }
    }

    /// Drops the channel of `graph_id`. Subscribers see the stream end after
    /// the events already sent.
    pub fn close(&self, graph_id: GraphId) {
        self.channels().remove(&graph_id);
    }

    /// Number of live subscribers of `graph_id`
    pub fn subscriber_count(&self, graph_id: GraphId) -> usize {
        self.channels()
            .get(&graph_id)
            .map(broadcast::Sender::receiver_count)
            .unwrap_or(0)
    }
}

impl Default for GraphEvents {
    fn default() -> Self {
        Self::new()
    }
}
