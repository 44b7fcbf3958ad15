//! Feedback log
//!
//! Feedback records are kept newest first. The log is loaded once when the
//! store opens and guarded by an async `RwLock`; every append rewrites the
//! file. Only the newest `limit` records are retained.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::store::error::StoreResult;
use crate::store::types::{FeedbackRecord, NewFeedback, Sentiment, Severity};
use crate::store::{read_json, write_json};

const FEEDBACK_FILE: &str = "feedback_log.json";

/// Counts derived from the feedback log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedbackSummary {
    pub total: usize,
    pub negative: usize,
    pub high_severity: usize,
}

/// Persistent, size-capped feedback log
pub struct FeedbackLog {
    path: PathBuf,
    limit: usize,
    records: RwLock<Vec<FeedbackRecord>>,
}

impl FeedbackLog {
    /// Open the log under `data_dir`, loading any existing records
    pub async fn open(data_dir: impl AsRef<Path>, limit: usize) -> StoreResult<Self> {
        let path = data_dir.as_ref().join(FEEDBACK_FILE);
        let mut records: Vec<FeedbackRecord> = read_json(&path).await?.unwrap_or_default();
        records.truncate(limit);

        tracing::debug!(path = ?path, count = records.len(), "Opened feedback log");

        Ok(Self {
            path,
            limit,
            records: RwLock::new(records),
        })
    }

    /// All records, newest first
    pub async fn list(&self) -> Vec<FeedbackRecord> {
        self.records.read().await.clone()
    }

    /// Stamp and prepend a submission, then persist the capped log
    pub async fn append(&self, new: NewFeedback) -> StoreResult<FeedbackRecord> {
        let record = FeedbackRecord::from_new(new);

        let mut records = self.records.write().await;
        let next: Vec<FeedbackRecord> = std::iter::once(record.clone())
            .chain(records.iter().cloned())
            .take(self.limit)
            .collect();

        // Only publish the new list once it is on disk
        write_json(&self.path, &next).await?;
        *records = next;

        tracing::info!(
            id = %record.id,
            feature = %record.feature,
            sentiment = %record.sentiment,
            severity = %record.severity,
            "Recorded feedback"
        );

        Ok(record)
    }

    /// Totals used by the metrics endpoint
    pub async fn summary(&self) -> FeedbackSummary {
        let records = self.records.read().await;
        FeedbackSummary {
            total: records.len(),
            negative: records
                .iter()
                .filter(|r| r.sentiment == Sentiment::Negative)
                .count(),
            high_severity: records
                .iter()
                .filter(|r| r.severity == Severity::High)
                .count(),
        }
    }
}
