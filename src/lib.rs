//! Mergington High School activities API
//!
//! An HTTP API for listing extracurricular activities and signing students
//! up for them. All state lives in memory and is reset on restart.

pub mod error;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init();
}

/// Start the server with a custom configuration
pub async fn start_with_config(
    config: ServerConfig,
    log_level: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(log_level);
    start_server(config).await
}
