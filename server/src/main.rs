//! SSR host for the Blue Carbon Registry.
//!
//! Renders the Leptos app, serves the compiled `/pkg` bundle, and answers
//! health checks. There is no data API; all session state lives in the
//! browser.

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(host = %config.host, port = config.port, "bluecarbon listening");
    axum::serve(listener, app).await?;
    Ok(())
}
