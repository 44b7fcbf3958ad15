//! # CittaAI
//!
//! Beta rollout dashboard for the CittaAI risk scoring pilot: a small JSON
//! API plus the Leptos dashboard (`cittaai-ui`) it serves on the same origin.
//!
//! ## Modules
//!
//! - [`api`]: REST API server with Axum
//! - [`store`]: JSON file persistence for the roadmap and feedback log
//! - [`scoring`]: Heuristic account risk scoring
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cittaai::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::open(config.clone()).await?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod scoring;
pub mod store;

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, StoreConfig};

pub use scoring::{score, AccountSignals, Prediction, PriorityBand};

pub use store::{
    FeedbackLog, FeedbackRecord, Milestone, NewFeedback, Roadmap, RoadmapStore, Sentiment,
    Severity, StoreError,
};
