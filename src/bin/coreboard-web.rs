//! CoreBoard Web Server Binary
//!
//! This binary starts the CoreBoard web server that provides a REST API
//! for generating core vocabulary boards.
//!
//! # Usage
//!
//! ```bash
//! # Start with default settings (port 3001, config from ~/.config/CoreBoard/)
//! coreboard-web
//!
//! # Specify port and configuration file
//! coreboard-web --port 8080 --config ./coreboard.toml
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use coreboard::config::Config;
use coreboard::web;

/// CoreBoard Web Server - REST API for core board generation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3001")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Configuration file.
    /// Defaults to the platform-specific config directory:
    /// - Linux: ~/.config/CoreBoard/config.toml
    /// - macOS: ~/Library/Application Support/CoreBoard/config.toml
    /// - Windows: %APPDATA%\CoreBoard\config.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    info!(
        "Word service: {} ({}), symbols: {}",
        config.llm.endpoint, config.llm.model, config.symbols.symbol_set
    );

    // Build socket address
    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;

    // Start the server
    web::run_server(config, addr).await
}
