//! Roadmap document
//!
//! The roadmap is a hand-maintained JSON file. It is re-read on every
//! request so edits show up without a restart; when it does not exist yet a
//! seed document dated today (UTC) is written and returned.

use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::store::error::StoreResult;
use crate::store::types::Roadmap;
use crate::store::{read_json, write_json};

const ROADMAP_FILE: &str = "roadmap.json";

/// Roadmap file accessor
#[derive(Debug, Clone)]
pub struct RoadmapStore {
    path: PathBuf,
}

impl RoadmapStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(ROADMAP_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the roadmap, seeding the file on first use
    pub async fn load(&self) -> StoreResult<Roadmap> {
        if let Some(roadmap) = read_json(&self.path).await? {
            return Ok(roadmap);
        }

        let seed = Roadmap::seed(Utc::now().date_naive().to_string());
        write_json(&self.path, &seed).await?;
        tracing::info!(path = ?self.path, "Seeded default roadmap");
        Ok(seed)
    }
}
