use graph_path::web::models::{EdgeRecord, VertexRecord};
use graph_path::web::{GraphStore, MemoryStore, StoreError};

fn vertex(graph_id: i64, x: f64, y: f64) -> VertexRecord {
    VertexRecord { id: 0, graph_id, x, y }
}

fn edge(graph_id: i64, from: i64, to: i64, weight: f64) -> EdgeRecord {
    EdgeRecord { id: 0, graph_id, from, to, weight }
}

#[test]
fn test_graphs_are_listed_by_name() {
    let store = MemoryStore::new();
    assert_eq!(store.add_graph("roads"), Ok(1));
    assert_eq!(store.add_graph("metro"), Ok(2));
    assert_eq!(store.add_graph("roads"), Err(StoreError::DuplicatedGraphName));

    let names: Vec<String> = store.graphs().unwrap().into_iter().map(|g| g.name).collect();
    assert_eq!(names, vec!["metro", "roads"]);
    assert_eq!(store.graph(3), Err(StoreError::GraphNotFound));
}

#[test]
fn test_vertices_and_edges_need_their_graph() {
    let store = MemoryStore::new();
    assert_eq!(store.add_vertex(vertex(1, 0.0, 0.0)), Err(StoreError::GraphNotFound));

    let roads = store.add_graph("roads").unwrap();
    let metro = store.add_graph("metro").unwrap();
    let a = store.add_vertex(vertex(roads, 0.0, 0.0)).unwrap();
    let b = store.add_vertex(vertex(roads, 1.0, 0.0)).unwrap();
    let c = store.add_vertex(vertex(metro, 2.0, 0.0)).unwrap();

    assert_eq!(store.add_edge(edge(roads, a, b, 1.5)), Ok(1));
    assert_eq!(store.add_edge(edge(roads, a, c, 1.0)), Err(StoreError::VertexNotFound));
    assert_eq!(store.add_edge(edge(99, a, b, 1.0)), Err(StoreError::GraphNotFound));

    let edges = store.edges(roads).unwrap();
    assert_eq!(edges.len(), 1);
    assert_eq!((edges[0].from, edges[0].to, edges[0].weight), (a, b, 1.5));
    assert!(store.edges(metro).unwrap().is_empty());
}

#[test]
fn test_updates_only_touch_mutable_fields() {
    let store = MemoryStore::new();
    let g = store.add_graph("g").unwrap();
    let a = store.add_vertex(vertex(g, 0.0, 0.0)).unwrap();
    let b = store.add_vertex(vertex(g, 1.0, 1.0)).unwrap();
    let e = store.add_edge(edge(g, a, b, 1.0)).unwrap();

    store
        .set_vertex(VertexRecord { id: a, graph_id: 42, x: 5.0, y: 6.0 })
        .unwrap();
    let moved = store.vertex(a).unwrap();
    assert_eq!((moved.graph_id, moved.x, moved.y), (g, 5.0, 6.0));

    store
        .set_edge(EdgeRecord { id: e, graph_id: g, from: b, to: a, weight: 9.0 })
        .unwrap();
    let reweighted = store.edge(e).unwrap();
    assert_eq!((reweighted.from, reweighted.to, reweighted.weight), (a, b, 9.0));

    assert_eq!(store.set_vertex(vertex(g, 0.0, 0.0)), Err(StoreError::VertexNotFound));
    assert_eq!(store.set_edge(edge(g, a, b, 1.0)), Err(StoreError::EdgeNotFound));
}

#[test]
fn test_removals_cascade() {
    let store = MemoryStore::new();
    let g = store.add_graph("g").unwrap();
    let a = store.add_vertex(vertex(g, 0.0, 0.0)).unwrap();
    let b = store.add_vertex(vertex(g, 1.0, 0.0)).unwrap();
    let c = store.add_vertex(vertex(g, 2.0, 0.0)).unwrap();
    store.add_edge(edge(g, a, b, 1.0)).unwrap();
    let kept = store.add_edge(edge(g, a, c, 1.0)).unwrap();
    store.add_edge(edge(g, b, c, 1.0)).unwrap();

    store.remove_vertex(b).unwrap();
    let edges: Vec<i64> = store.edges(g).unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(edges, vec![kept]);
    assert_eq!(store.remove_vertex(b), Err(StoreError::VertexNotFound));

    store.remove_edge(kept).unwrap();
    assert_eq!(store.remove_edge(kept), Err(StoreError::EdgeNotFound));

    store.remove_graph(g).unwrap();
    assert_eq!(store.graph(g), Err(StoreError::GraphNotFound));
    assert!(store.vertexes(g).unwrap().is_empty());
    assert_eq!(store.vertex(a), Err(StoreError::VertexNotFound));

    // Ids are never reused
    let g2 = store.add_graph("g").unwrap();
    assert_eq!(store.add_vertex(vertex(g2, 0.0, 0.0)), Ok(4));
}
