use anyhow::Result;
use log::{debug, info, warn};
use std::path::Path;

use crate::analysis::{classify, extract_passes, normalize_batch, structural_score};
use crate::analysis::types::{PassFeatures, PassRecord, ScoredPass};
use crate::config::settings::AppConfig;
use crate::domain::models::MatchDescriptor;
use crate::export;
use crate::store::{self, EventStore};

/// Runs the full scoring pipeline over locally stored event files:
/// extract → derive features → classify → score → normalize → export.
pub struct AnalysisService {
    config: AppConfig,
    store: EventStore,
}

impl AnalysisService {
    pub fn new(config: AppConfig, events_dir: &Path) -> Result<Self> {
        Ok(Self {
            config,
            store: EventStore::new(events_dir)?,
        })
    }

    pub fn run(&self, matches_file: &Path, output: &Path) -> Result<()> {
        info!("=== Starting Pass Analysis ===\n");

        let matches = store::load_match_list(matches_file)?;
        info!("  → Loaded {} matches from {}\n", matches.len(), matches_file.display());

        let records = self.collect_passes(&matches)?;
        info!("  → Extracted {} completed passes\n", records.len());

        let mut batch = self.score_passes(records);
        normalize_batch(&mut batch, &self.config.analysis)?;

        self.print_preview(&batch);

        export::write_csv(output, &batch)?;
        info!("Results saved to {}", output.display());

        info!("=== Analysis Complete ===");
        Ok(())
    }

    /// Per-match extraction; a missing event file only costs a warning
    /// and that match's passes.
    fn collect_passes(&self, matches: &[MatchDescriptor]) -> Result<Vec<PassRecord>> {
        let mut all_passes = Vec::new();

        for descriptor in matches {
            match self.store.load_events(descriptor.match_id)? {
                Some(events) => {
                    let passes = extract_passes(&events, &self.config.analysis);
                    debug!(
                        "Match {}: {} events, {} completed passes",
                        descriptor.match_id,
                        events.len(),
                        passes.len()
                    );
                    all_passes.extend(passes);
                }
                None => warn!("Event file missing for match {}", descriptor.match_id),
            }
        }

        Ok(all_passes)
    }

    /// Pure per-pass stage, independent of batch composition; the batch
    /// reduction happens afterwards in `normalize_batch`.
    fn score_passes(&self, records: Vec<PassRecord>) -> Vec<ScoredPass> {
        records
            .into_iter()
            .map(|record| {
                let features = PassFeatures::from_record(&record);
                let pass_type = classify(&record, &features);
                let structural = structural_score(&record, pass_type, &features);
                ScoredPass::new(record, features, pass_type, structural)
            })
            .collect()
    }

    fn print_preview(&self, batch: &[ScoredPass]) {
        println!("\nPasses with time, type, importance, and next shot xG:");
        print!("{}", export::render_preview(batch, self.config.analysis.preview_rows));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn write_match(dir: &Path, match_id: i64, events: serde_json::Value) {
        let path = dir.join(format!("{}.json", match_id));
        fs::write(path, serde_json::to_vec(&events).unwrap()).unwrap();
    }

    fn write_match_list(dir: &Path, ids: &[i64]) -> std::path::PathBuf {
        let path = dir.join("matches.json");
        let list: Vec<_> = ids.iter().map(|id| json!({"match_id": id})).collect();
        fs::write(&path, serde_json::to_vec(&list).unwrap()).unwrap();
        path
    }

    fn sample_events() -> serde_json::Value {
        json!([
            {
                "type": {"name": "Pass"},
                "team": {"id": 1, "name": "Test FC"},
                "player": {"name": "Playmaker"},
                "possession": 7,
                "minute": 10,
                "second": 0,
                "location": [60.0, 40.0],
                "pass": {"end_location": [110.0, 40.0]}
            },
            {
                "type": {"name": "Shot"},
                "team": {"id": 1, "name": "Test FC"},
                "possession": 7,
                "minute": 10,
                "second": 10,
                "location": [110.0, 40.0],
                "shot": {"statsbomb_xg": 0.3}
            },
            {
                "type": {"name": "Pass"},
                "team": {"id": 2, "name": "Other FC"},
                "player": {"name": "Defender"},
                "possession": 8,
                "minute": 11,
                "second": 0,
                "location": [30.0, 10.0],
                "pass": {"end_location": [35.0, 15.0]}
            }
        ])
    }

    #[test]
    fn test_end_to_end_run_writes_scored_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let events_dir = temp_dir.path().join("events");
        fs::create_dir_all(&events_dir).unwrap();
        write_match(&events_dir, 1, sample_events());
        let matches_file = write_match_list(temp_dir.path(), &[1]);
        let output = temp_dir.path().join("out.csv");

        let service = AnalysisService::new(AppConfig::new(), &events_dir).unwrap();
        service.run(&matches_file, &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Through Ball"));
        assert!(lines[1].contains("0.3"));
        assert!(lines[2].contains("Lateral"));
    }

    #[test]
    fn test_missing_event_file_is_not_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let events_dir = temp_dir.path().join("events");
        fs::create_dir_all(&events_dir).unwrap();
        write_match(&events_dir, 1, sample_events());
        let matches_file = write_match_list(temp_dir.path(), &[1, 999]);
        let output = temp_dir.path().join("out.csv");

        let service = AnalysisService::new(AppConfig::new(), &events_dir).unwrap();
        service.run(&matches_file, &output).unwrap();

        assert!(output.exists());
    }

    #[test]
    fn test_empty_batch_fails_the_run() {
        let temp_dir = tempfile::tempdir().unwrap();
        let events_dir = temp_dir.path().join("events");
        fs::create_dir_all(&events_dir).unwrap();
        let matches_file = write_match_list(temp_dir.path(), &[999]);
        let output = temp_dir.path().join("out.csv");

        let service = AnalysisService::new(AppConfig::new(), &events_dir).unwrap();
        assert!(service.run(&matches_file, &output).is_err());
    }
}
