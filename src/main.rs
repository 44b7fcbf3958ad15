//! CittaAI Server
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from `--config`, `~/.config/cittaai/config.toml` or
//! `./config.toml`, then environment overrides:
//! - `CITTAAI_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CITTAAI_PORT`: Port to listen on (default: 8000)
//! - `CITTAAI_DATA_DIR`: Data directory (default: ./data)
//! - `CITTAAI_STATIC_DIR`: Built dashboard directory (default: ./cittaai-ui/dist)
//! - `CITTAAI_LOG_LEVEL` / `RUST_LOG`: Log filter
//! - `CITTAAI_LOG_FORMAT`: `pretty` or `json`

use anyhow::Context;
use cittaai::config::{generate_default_config, Config, LoggingConfig};
use cittaai::{serve, AppState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cittaai")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "CittaAI beta dashboard API server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the API server and host the dashboard
    Serve {
        /// Config file (default: search standard locations)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,
        /// Override the bind port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, host, port } => {
            let mut config = match config {
                Some(path) => Config::load_with_env(&path)?,
                None => Config::load_default(),
            };
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            init_tracing(&config.logging);
            run_server(config).await
        }
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
            Ok(())
        }
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting CittaAI API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {:?}", config.store.data_dir);
    tracing::info!("Dashboard directory: {:?}", config.server.static_dir);

    let server = config.server.clone();
    let state = AppState::open(config)
        .await
        .context("Failed to open data store")?;

    serve(state, &server).await?;

    tracing::info!("CittaAI API server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.level.as_str().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
