//! multiversed - Location API Server Daemon
//!
//! Serves the location dataset over HTTP.
//!
//! Usage:
//!   multiversed [OPTIONS] [config.toml]
//!
//! If no dataset path is configured, the bundled seed dataset is served.

mod config;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use multiverse_api::{create_router, AppState};
use multiverse_core::Dataset;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, Overrides};

#[derive(Parser)]
#[command(name = "multiversed")]
#[command(version, about = "Location API server daemon")]
struct Args {
    /// Server config file (TOML)
    #[arg(env = "MULTIVERSE_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "MULTIVERSE_HOST")]
    host: Option<String>,

    /// Port to bind
    #[arg(short, long, env = "MULTIVERSE_PORT")]
    port: Option<u16>,

    /// JSON dataset to serve instead of the bundled one
    #[arg(short, long, env = "MULTIVERSE_DATA")]
    data: Option<PathBuf>,

    /// Externally visible base URL used in page links
    #[arg(long, env = "MULTIVERSE_PUBLIC_URL")]
    public_url: Option<String>,

    /// Log output format
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "multiversed=info,multiverse_api=info,multiverse_core=info,tower_http=info".into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_format);

    tracing::info!("Starting multiversed (Location API Server Daemon)");

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            Config::load_from(path)?
        }
        None => Config::default(),
    }
    .apply(Overrides {
        host: args.host,
        port: args.port,
        public_url: args.public_url,
        data: args.data,
    });

    let dataset = load_dataset(&config)?;
    tracing::info!(count = dataset.len(), "Dataset ready");

    let public_url = config.public_url();
    let state = AppState::with_public_url(dataset, &public_url)
        .with_context(|| format!("Invalid public URL: {}", public_url))?;
    let app = create_router(state);

    let addr = config.socket_addr()?;
    tracing::info!(public_url = %public_url, "Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

/// Load the configured dataset, or the bundled one
fn load_dataset(config: &Config) -> anyhow::Result<Dataset> {
    match &config.data.path {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load dataset from {}", path.display())),
        None => {
            tracing::info!("No dataset path configured, using bundled dataset");
            Ok(Dataset::bundled()?)
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(?e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
