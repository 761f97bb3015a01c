pub mod dijkstra;
pub mod traits;
pub mod worklist;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
