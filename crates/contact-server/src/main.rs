//! Contact Form Server binary
//!
//! Startup: logging, environment config, database, router, serve.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use contact_server::storage::Database;
use contact_server::{app, AppState};

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting contact server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config().context("Failed to load configuration")?;
    info!(
        "Config loaded: port={}, db={}, static={}",
        config.port,
        config.database_path,
        config.static_dir.display()
    );

    let db = Arc::new(
        Database::new(&config.database_path)
            .await
            .context("Failed to initialize database")?,
    );

    let state = AppState { db };
    let router = app(state, &config.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server listening on http://{}", addr);
    axum::serve(listener, router).await.context("Server error")?;

    Ok(())
}

#[derive(Debug, Clone)]
struct Config {
    database_path: String,
    port: u16,
    static_dir: PathBuf,
}

fn load_config() -> Result<Config> {
    // The database path is the one required piece of configuration; refusing
    // to start without it beats silently writing to a surprise location.
    let database_path = std::env::var("DATABASE_PATH")
        .context("DATABASE_PATH is not set; it must point to the SQLite database file")?;

    let port = match std::env::var("PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: {}", raw))?,
        Err(_) => 10000,
    };

    let static_dir = std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("public"));

    Ok(Config {
        database_path,
        port,
        static_dir,
    })
}
