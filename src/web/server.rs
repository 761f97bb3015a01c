use axum::{
    http::{header, Method},
    Router,
};
use std::env;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration errors
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {0:?}")]
    InvalidBindAddr(String),

    #[error("invalid ENABLE_CORS {0:?}, expected true or false")]
    InvalidEnableCors(String),
}

/// Configuration for the web server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3005)),
            enable_cors: true,
        }
    }
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `ENABLE_CORS`, falling back to defaults for unset variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("BIND_ADDR").ok(), env::var("ENABLE_CORS").ok())
    }

    /// Builds a configuration from raw variable values
    pub fn from_vars(
        bind_addr: Option<String>,
        enable_cors: Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = bind_addr {
            config.bind_addr = raw
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?;
        }

        if let Some(raw) = enable_cors {
            config.enable_cors = match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidEnableCors(raw)),
            };
        }

        Ok(config)
    }

    /// Replaces the port of the bind address
    pub fn with_port(mut self, port: u16) -> Self {
        self.bind_addr.set_port(port);
        self
    }
}

/// Builds the application router for `config`
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    let app = create_router().with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server and run until Ctrl-C
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(AppState::new(), &config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("captured interrupt signal, stopping");
}
