//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::config::Config;
use crate::store::{FeedbackLog, RoadmapStore, StoreResult};

/// Shared application state for all handlers
pub struct AppState {
    /// Roadmap document
    pub roadmap: RoadmapStore,
    /// Persistent feedback log
    pub feedback: FeedbackLog,
    /// Predictions served since start (not persisted)
    prediction_count: AtomicU64,
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Open the stores under the configured data directory
    pub async fn open(config: Config) -> StoreResult<Self> {
        let data_dir = config.store.data_dir.clone();
        let feedback = FeedbackLog::open(&data_dir, config.store.feedback_limit).await?;

        Ok(Self {
            roadmap: RoadmapStore::new(&data_dir),
            feedback,
            prediction_count: AtomicU64::new(0),
            config: Arc::new(config),
            start_time: Instant::now(),
        })
    }

    /// Count one served prediction, returning the new total
    pub fn record_prediction(&self) -> u64 {
        self.prediction_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn prediction_count(&self) -> u64 {
        self.prediction_count.load(Ordering::Relaxed)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
