//! Start the Servis server.

use clap::Args;
use tracing::info;
use tracing_subscriber::EnvFilter;

use servis_core::config::{AppConfig, DatabaseProvider};
use servis_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Use the in-memory store instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if args.memory {
        config.database.provider = DatabaseProvider::Memory;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = ?config.database.provider,
        "Starting server from CLI"
    );
    servis_api::run_server(config).await
}
