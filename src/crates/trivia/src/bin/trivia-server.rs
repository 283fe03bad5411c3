//! Trivia server binary
//!
//! Standalone server exposing the trivia REST API: categories, questions,
//! search and quiz play.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trivia::api::create_router;
use trivia::config::ServerConfig;
use trivia::db::{seed_defaults, DatabaseConnection, SqliteStore};
use trivia::services::TriviaService;
use trivia::version::{PKG_NAME, VERSION};

#[derive(Debug, Parser)]
#[command(name = "trivia-server", version, about = "Trivia REST API server")]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Interface to bind, overrides configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// sqlx database URL, overrides configuration
    #[arg(long)]
    database_url: Option<String>,

    /// Insert the default categories and sample questions into an empty database
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    tracing::info!("Loading server configuration...");
    let mut config = ServerConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    config.apply_env_overrides()?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(url) = args.database_url {
        config.database.url = url;
    }
    config.validate()?;
    let addr = config.socket_addr()?;

    tracing::info!("Server name: {}", config.server.name);
    tracing::info!("Database URL: {}", config.database.url);

    // Initialize database connection
    let db = if config.database.url.contains(":memory:") {
        DatabaseConnection::in_memory().await
    } else {
        DatabaseConnection::with_max_connections(
            &config.database.url,
            config.database.max_connections,
        )
        .await
    }
    .with_context(|| format!("failed to connect to {}", config.database.url))?;

    tracing::info!("Running database migrations");
    db.run_migrations().await?;

    tracing::info!("Performing database health check");
    db.health_check().await?;

    if args.seed {
        if seed_defaults(&db).await? {
            tracing::info!("Seeded default categories and sample questions");
        } else {
            tracing::info!("Database already has categories, skipping seed");
        }
    }

    let service = TriviaService::new(Arc::new(SqliteStore::new(db.clone())));

    tracing::info!("Building API router");
    let app = create_router(service, &config.cors);

    tracing::info!("Starting {} {} on {}", PKG_NAME, VERSION, addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    tracing::info!("Trivia server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (Ctrl-C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}
