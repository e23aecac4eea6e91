use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::{MatchDescriptor, RawEvent};

/// File-based store for per-match event data, one JSON file per match id
pub struct EventStore {
    events_dir: PathBuf,
}

impl EventStore {
    /// Create a store rooted at the given directory, creating it if needed
    pub fn new<P: AsRef<Path>>(events_dir: P) -> Result<Self> {
        let events_dir = events_dir.as_ref().to_path_buf();
        fs::create_dir_all(&events_dir).context("Failed to create events directory")?;
        Ok(Self { events_dir })
    }

    pub fn event_path(&self, match_id: i64) -> PathBuf {
        self.events_dir.join(format!("{}.json", match_id))
    }

    /// Check if a match's event file is already present
    pub fn exists(&self, match_id: i64) -> bool {
        self.event_path(match_id).exists()
    }

    /// Save a raw event file body exactly as downloaded
    pub fn save_raw(&self, match_id: i64, body: &[u8]) -> Result<()> {
        let file_path = self.event_path(match_id);
        fs::write(&file_path, body).context("Failed to write event file")?;
        info!("Saved event file: {}", file_path.display());
        Ok(())
    }

    /// Load a match's event stream, or `None` when the file is missing.
    ///
    /// The file is parsed as a JSON array; individual entries that fail
    /// to convert are dropped rather than failing the whole match.
    pub fn load_events(&self, match_id: i64) -> Result<Option<Vec<RawEvent>>> {
        let file_path = self.event_path(match_id);
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read event file {}", file_path.display()))?;
        let values: Vec<Value> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse event file {}", file_path.display()))?;

        let total = values.len();
        let events: Vec<RawEvent> = values
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();
        if events.len() < total {
            debug!(
                "Dropped {} unreadable events from match {}",
                total - events.len(),
                match_id
            );
        }

        Ok(Some(events))
    }
}

/// Load the match-list file: a JSON array of match descriptors
pub fn load_match_list(path: &Path) -> Result<Vec<MatchDescriptor>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read match list {}", path.display()))?;
    let matches = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse match list {}", path.display()))?;
    Ok(matches)
}
