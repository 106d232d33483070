//! Chat shell backend.
//!
//! # Startup
//!
//! ```text
//!   environment (+ .env)
//!        │
//!        ▼
//!   Settings::from_env ──── error ───▶ "Error: ..." on stderr, exit(1)
//!        │ ok
//!        ▼
//!   init logging ─▶ bind 0.0.0.0:PORT ─▶ HttpServer::run ─▶ graceful shutdown
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use chat_shell::config::Settings;
use chat_shell::http::HttpServer;
use chat_shell::lifecycle::Shutdown;
use chat_shell::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Settings first: nothing else starts without them.
    let settings = match Settings::from_env() {
        Ok(settings) => Arc::new(settings),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(settings.environment())?;

    tracing::info!(
        port = settings.port(),
        environment = %settings.environment(),
        "Configuration loaded"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port()));
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    shutdown.trigger_on_signal();

    let server = HttpServer::new(settings);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
