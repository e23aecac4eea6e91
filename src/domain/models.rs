use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One match entry from the StatsBomb open-data match list.
///
/// The upstream files carry dozens of keys per match; only the id is
/// needed to locate the corresponding event file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDescriptor {
    pub match_id: i64,
}

// --- Raw event structures ---

/// One event in a match's chronological stream, as emitted by the
/// StatsBomb open-data feed.
///
/// Every field is optional: the pipeline validates what it needs per
/// event and silently skips records that are missing required parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    pub team: Option<Team>,
    pub player: Option<Player>,
    pub possession: Option<i64>,
    // Kept as raw JSON values: upstream files occasionally carry
    // non-numeric time fields, which downstream treats as "time unknown".
    pub minute: Option<Value>,
    pub second: Option<Value>,
    pub location: Option<Vec<f64>>,
    pub pass: Option<PassData>,
    pub shot: Option<ShotData>,
}

impl RawEvent {
    pub fn type_name(&self) -> Option<&str> {
        self.event_type.as_ref().and_then(|t| t.name.as_deref())
    }

    pub fn team_id(&self) -> Option<i64> {
        self.team.as_ref().and_then(|t| t.id)
    }

    pub fn team_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.name.as_deref())
    }

    pub fn player_name(&self) -> Option<&str> {
        self.player.as_ref().and_then(|p| p.name.as_deref())
    }

    /// Elapsed match time in seconds, or `None` when either time field
    /// is non-numeric. Missing fields count as zero, matching the feed's
    /// convention for kick-off events.
    pub fn elapsed_seconds(&self) -> Option<i64> {
        let minute = numeric_or_zero(self.minute.as_ref())?;
        let second = numeric_or_zero(self.second.as_ref())?;
        Some(minute * 60 + second)
    }

    pub fn minute(&self) -> i64 {
        numeric_or_zero(self.minute.as_ref()).unwrap_or(0)
    }

    pub fn second(&self) -> i64 {
        numeric_or_zero(self.second.as_ref()).unwrap_or(0)
    }
}

fn numeric_or_zero(value: Option<&Value>) -> Option<i64> {
    let Some(value) = value else {
        return Some(0);
    };
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if let Some(f) = value.as_f64() {
        return Some(f as i64);
    }
    value.as_str()?.trim().parse().ok()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventType {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub name: Option<String>,
}

/// Pass-specific payload. The presence of `outcome` marks an
/// unsuccessful pass (incomplete, out, offside...); completed passes
/// carry no outcome at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassData {
    pub end_location: Option<Vec<f64>>,
    pub outcome: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotData {
    pub statsbomb_xg: Option<f64>,
}

/// Progress counters for a fetch run
#[derive(Debug, Clone)]
pub struct FetchProgress {
    total: usize,
    downloaded: usize,
    skipped: usize,
    failed: usize,
}

impl FetchProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            downloaded: 0,
            skipped: 0,
            failed: 0,
        }
    }

    pub fn increment_downloaded(&mut self) {
        self.downloaded += 1;
    }

    pub fn increment_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
    }

    pub fn processed(&self) -> usize {
        self.downloaded + self.skipped + self.failed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn summary(&self) -> String {
        format!(
            "{} downloaded, {} already present, {} failed",
            self.downloaded, self.skipped, self.failed
        )
    }
}
