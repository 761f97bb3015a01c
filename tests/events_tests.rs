use graph_path::web::models::VertexRecord;
use graph_path::web::{GraphEvent, GraphEvents};
use tokio::sync::broadcast::error::TryRecvError;

fn vertex(id: i64, graph_id: i64) -> GraphEvent {
    GraphEvent::NewVertex(VertexRecord {
        id,
        graph_id,
        x: 0.0,
        y: 0.0,
    })
}

#[test]
fn test_publish_without_subscribers() {
    let events = GraphEvents::new();
    assert_eq!(events.publish(1, vertex(1, 1)), 0);
    assert_eq!(events.subscriber_count(1), 0);
}

#[test]
fn test_every_subscriber_receives_each_event() {
    let events = GraphEvents::new();
    let mut first = events.subscribe(1);
    let mut second = events.subscribe(1);

    assert_eq!(events.publish(1, vertex(7, 1)), 2);

    assert_eq!(first.try_recv(), Ok(vertex(7, 1)));
    assert_eq!(second.try_recv(), Ok(vertex(7, 1)));
    assert_eq!(first.try_recv(), Err(TryRecvError::Empty));
}

#[test]
fn test_channels_are_per_graph() {
    let events = GraphEvents::new();
    let mut one = events.subscribe(1);
    let mut two = events.subscribe(2);

    events.publish(2, vertex(3, 2));

    assert_eq!(one.try_recv(), Err(TryRecvError::Empty));
    assert_eq!(two.try_recv(), Ok(vertex(3, 2)));
}

#[test]
fn test_dropped_subscribers_release_the_channel() {
    let events = GraphEvents::new();
    let receiver = events.subscribe(1);
    assert_eq!(events.subscriber_count(1), 1);

    drop(receiver);
    assert_eq!(events.publish(1, vertex(1, 1)), 0);
    assert_eq!(events.subscriber_count(1), 0);

    // A later subscriber gets a fresh channel
    let mut receiver = events.subscribe(1);
    assert_eq!(events.publish(1, vertex(2, 1)), 1);
    assert_eq!(receiver.try_recv(), Ok(vertex(2, 1)));
}

#[test]
fn test_slow_subscriber_lags() {
    let events = GraphEvents::with_capacity(2);
    let mut receiver = events.subscribe(1);

    for id in 0..4 {
        events.publish(1, vertex(id, 1));
    }

    assert_eq!(receiver.try_recv(), Err(TryRecvError::Lagged(2)));
    assert_eq!(receiver.try_recv(), Ok(vertex(2, 1)));
    assert_eq!(receiver.try_recv(), Ok(vertex(3, 1)));
}

#[test]
fn test_close_ends_the_stream_after_pending_events() {
    let events = GraphEvents::new();
    let mut receiver = events.subscribe(1);

    events.publish(1, GraphEvent::GraphRemoved);
    events.close(1);

    assert_eq!(receiver.try_recv(), Ok(GraphEvent::GraphRemoved));
    assert_eq!(receiver.try_recv(), Err(TryRecvError::Closed));
}

#[test]
fn test_events_are_tagged_on_the_wire() {
    let wire = serde_json::to_value(vertex(4, 9)).unwrap();
    assert_eq!(wire["type"], "new-vertex");
    assert_eq!(wire["data"]["id"], 4);
    assert_eq!(wire["data"]["graph_id"], 9);

    let parsed: GraphEvent =
        serde_json::from_str(r#"{"type":"graph-removed"}"#).unwrap();
    assert_eq!(parsed, GraphEvent::GraphRemoved);
}
