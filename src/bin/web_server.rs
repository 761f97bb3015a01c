use graph_path::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env()?;

    // An optional port argument overrides the configured one
    if let Some(arg) = env::args().nth(1) {
        let port: u16 = arg
            .parse()
            .map_err(|e| format!("invalid port {:?}: {}", arg, e))?;
        config = config.with_port(port);
    }

    log::info!(
        "starting web server on {} (cors: {})",
        config.bind_addr,
        config.enable_cors
    );

    start_server(config).await
}
