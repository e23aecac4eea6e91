use anyhow::Result;
use log::{info, warn};
use std::path::Path;

use crate::config::settings::FetcherSettings;
use crate::domain::models::FetchProgress;
use crate::http::RateLimitedClient;
use crate::store::{self, EventStore};

/// Downloads per-match event files from the StatsBomb open-data
/// repository for every match in the match list.
pub struct FetchService {
    settings: FetcherSettings,
    store: EventStore,
    client: RateLimitedClient,
}

impl FetchService {
    pub fn new(settings: FetcherSettings, events_dir: &Path) -> Result<Self> {
        let store = EventStore::new(events_dir)?;
        let client = RateLimitedClient::new(&settings)?;

        Ok(Self {
            settings,
            store,
            client,
        })
    }

    pub async fn run(&mut self, matches_file: &Path) -> Result<()> {
        info!("=== Starting Event Fetch ===\n");

        let matches = store::load_match_list(matches_file)?;
        info!("  → Loaded {} matches from {}\n", matches.len(), matches_file.display());

        let mut progress = FetchProgress::new(matches.len());
        for descriptor in &matches {
            self.fetch_match(descriptor.match_id, &mut progress).await;
            self.log_progress(&progress);
        }

        info!("=== Fetch Complete ({}) ===", progress.summary());
        Ok(())
    }

    async fn fetch_match(&mut self, match_id: i64, progress: &mut FetchProgress) {
        if self.store.exists(match_id) {
            progress.increment_skipped();
            return;
        }

        match self.download_events(match_id).await {
            Ok(body) => match self.store.save_raw(match_id, &body) {
                Ok(()) => progress.increment_downloaded(),
                Err(e) => {
                    warn!("Failed to save events for match {}: {e:#}", match_id);
                    progress.increment_failed();
                }
            },
            Err(e) => {
                warn!("Failed to download events for match {}: {e:#}", match_id);
                progress.increment_failed();
            }
        }
    }

    async fn download_events(&mut self, match_id: i64) -> Result<Vec<u8>> {
        let url = self.build_event_url(match_id);
        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("server returned status {}", response.status());
        }

        Ok(response.bytes().await?.to_vec())
    }

    fn build_event_url(&self, match_id: i64) -> String {
        format!("{}/data/events/{}.json", self.settings.base_url, match_id)
    }

    fn log_progress(&self, progress: &FetchProgress) {
        let processed = progress.processed();
        if processed % 50 == 0 || processed == progress.total() {
            info!("  → {}/{} matches", processed, progress.total());
        }
    }
}
