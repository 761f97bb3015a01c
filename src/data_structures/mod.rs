pub mod edge_queue;
pub mod priority_queue;

pub use edge_queue::EdgeQueue;
pub use priority_queue::BinaryHeapWrapper;
