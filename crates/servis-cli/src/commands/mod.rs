//! CLI command definitions and dispatch.

pub mod migrate;
pub mod payment;
pub mod serve;
pub mod token;

use clap::{Parser, Subcommand};

use servis_core::config::AppConfig;
use servis_core::error::AppError;

use crate::output::OutputFormat;

/// Servis: order payments service
#[derive(Debug, Parser)]
#[command(name = "servis", version, about, long_about = None)]
pub struct Cli {
    /// Single configuration file; skips the directory overlay
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding default.toml and the environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// Environment overlay to apply
    #[arg(long, env = "SERVIS_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Servis server
    Serve(serve::ServeArgs),
    /// Apply database migrations
    Migrate,
    /// Mint a development access token
    Token(token::TokenArgs),
    /// Call the payment endpoints of a running server
    Payment(payment::PaymentArgs),
}

impl Cli {
    /// Whether the command starts the server.
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self.load_config()?).await,
            Commands::Migrate => migrate::execute(self.load_config()?).await,
            Commands::Token(args) => token::execute(args, &self.load_config()?, self.format),
            Commands::Payment(args) => payment::execute(args, self.format).await,
        }
    }

    /// Load configuration from `--config` or the directory overlay.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::load_file(path),
            None => AppConfig::load_from(&self.config_dir, &self.env),
        }
    }
}
