pub mod api;
pub mod events;
pub mod models;
pub mod server;
pub mod store;

pub use api::{create_router, AppState};
pub use events::{GraphEvent, GraphEvents};
pub use server::{start_server, ServerConfig};
pub use store::{GraphStore, MemoryStore, StoreError};
