//! CittaAI JSON File Store
//!
//! Persistence for the two documents the dashboard API serves:
//!
//! - **roadmap**: beta roadmap document, seeded with a default on first read
//! - **feedback**: append-only feedback log, newest first, capped in size
//! - **types**: Record types shared with the API layer
//! - **error**: Error types
//!
//! # Layout
//!
//! ```text
//! <data_dir>/
//!   roadmap.json        Roadmap (hand-editable, re-read on every request)
//!   feedback_log.json   [FeedbackRecord] newest first
//! ```
//!
//! Writes go to a sibling temp file which is then renamed over the target,
//! so readers never observe a half-written document.

pub mod error;
pub mod feedback;
pub mod roadmap;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use feedback::{FeedbackLog, FeedbackSummary};
pub use roadmap::RoadmapStore;
pub use types::{FeedbackRecord, Milestone, NewFeedback, Roadmap, Sentiment, Severity};

use serde::{de::DeserializeOwned, Serialize};
use std::path::Path;

/// Read a JSON document, returning `None` when the file does not exist
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<Option<T>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write a JSON document (pretty-printed) via temp file + rename
pub(crate) async fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
