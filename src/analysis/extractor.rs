use crate::analysis::types::PassRecord;
use crate::config::settings::AnalysisSettings;
use crate::domain::models::RawEvent;

/// Scan a match's chronological event stream and lift out every
/// completed pass, each with its look-ahead shot attribution.
///
/// Malformed events (missing type, coordinates, or pass payload) are
/// skipped; they never abort the batch.
pub fn extract_passes(events: &[RawEvent], settings: &AnalysisSettings) -> Vec<PassRecord> {
    let mut passes = Vec::new();

    for (i, event) in events.iter().enumerate() {
        let following = events.get(i + 1..).unwrap_or_default();
        if let Some(record) = build_pass_record(event, following, settings) {
            passes.push(record);
        }
    }

    passes
}

fn build_pass_record(
    event: &RawEvent,
    following: &[RawEvent],
    settings: &AnalysisSettings,
) -> Option<PassRecord> {
    if event.type_name() != Some("Pass") {
        return None;
    }

    let pass = event.pass.as_ref()?;
    // A recorded outcome means the pass did not reach a teammate
    if pass.outcome.is_some() {
        return None;
    }

    let (start_x, start_y) = coordinates(event.location.as_deref())?;
    let (end_x, end_y) = coordinates(pass.end_location.as_deref())?;

    let t0 = event.elapsed_seconds();
    let (next_shot_xg, leads_to_shot) = scan_for_shot(
        following,
        event.possession,
        event.team_id(),
        t0,
        settings,
    );

    Some(PassRecord {
        minute: event.minute(),
        second: event.second(),
        player: event.player_name().map(str::to_string),
        team: event.team_name().map(str::to_string),
        team_id: event.team_id(),
        possession: event.possession,
        start_x,
        start_y,
        end_x,
        end_y,
        next_shot_xg,
        leads_to_shot,
    })
}

fn coordinates(location: Option<&[f64]>) -> Option<(f64, f64)> {
    let location = location?;
    if location.len() < 2 {
        return None;
    }
    Some((location[0], location[1]))
}

/// Look ahead for a same-team shot inside the pass's possession.
///
/// The scan is bounded by `look_ahead` events and stops at a possession
/// boundary. A shot more than `time_ahead_seconds` after the pass ends
/// the scan without credit; otherwise the first qualifying shot's xG is
/// returned and scanning stops.
fn scan_for_shot(
    following: &[RawEvent],
    possession: Option<i64>,
    team_id: Option<i64>,
    t0: Option<i64>,
    settings: &AnalysisSettings,
) -> (f64, bool) {
    for event in following.iter().take(settings.look_ahead) {
        if event.possession != possession {
            break;
        }

        if event.type_name() == Some("Shot") && event.team_id() == team_id {
            if let (Some(t0), Some(t_shot)) = (t0, event.elapsed_seconds()) {
                if t_shot - t0 > settings.time_ahead_seconds {
                    break;
                }
            }

            let xg = event
                .shot
                .as_ref()
                .and_then(|s| s.statsbomb_xg)
                .unwrap_or(0.0);
            return (xg, true);
        }
    }

    (0.0, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn parse_events(values: Vec<Value>) -> Vec<RawEvent> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    fn pass_event(
        minute: i64,
        second: i64,
        start: (f64, f64),
        end: (f64, f64),
        possession: i64,
    ) -> Value {
        json!({
            "type": {"name": "Pass"},
            "team": {"id": 1, "name": "Test FC"},
            "player": {"name": "Test Player"},
            "possession": possession,
            "minute": minute,
            "second": second,
            "location": [start.0, start.1],
            "pass": {"end_location": [end.0, end.1]}
        })
    }

    fn shot_event(minute: i64, second: i64, team_id: i64, possession: i64, xg: f64) -> Value {
        json!({
            "type": {"name": "Shot"},
            "team": {"id": team_id, "name": "Test FC"},
            "possession": possession,
            "minute": minute,
            "second": second,
            "location": [110.0, 40.0],
            "shot": {"statsbomb_xg": xg}
        })
    }

    fn carry_event(possession: i64) -> Value {
        json!({
            "type": {"name": "Carry"},
            "team": {"id": 1},
            "possession": possession,
            "minute": 0,
            "second": 0
        })
    }

    #[test]
    fn test_completed_pass_followed_by_shot_is_credited() {
        let events = parse_events(vec![
            pass_event(10, 0, (60.0, 40.0), (110.0, 40.0), 7),
            carry_event(7),
            shot_event(10, 10, 1, 7, 0.3),
        ]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert_eq!(passes.len(), 1);
        assert!(passes[0].leads_to_shot);
        assert_eq!(passes[0].next_shot_xg, 0.3);
    }

    #[test]
    fn test_pass_with_outcome_is_excluded() {
        let mut incomplete = pass_event(5, 0, (40.0, 40.0), (60.0, 40.0), 2);
        incomplete["pass"]["outcome"] = json!({"id": 9, "name": "Incomplete"});
        let events = parse_events(vec![incomplete]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(passes.is_empty());
    }

    #[test]
    fn test_short_location_is_skipped() {
        let mut malformed = pass_event(5, 0, (40.0, 40.0), (60.0, 40.0), 2);
        malformed["location"] = json!([40.0]);
        let events = parse_events(vec![malformed]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(passes.is_empty());
    }

    #[test]
    fn test_scan_stops_at_possession_boundary() {
        let events = parse_events(vec![
            pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7),
            carry_event(8),
            shot_event(10, 5, 1, 8, 0.5),
        ]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(!passes[0].leads_to_shot);
        assert_eq!(passes[0].next_shot_xg, 0.0);
    }

    #[test]
    fn test_scan_never_exceeds_look_ahead_window() {
        let mut raw = vec![pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7)];
        for _ in 0..5 {
            raw.push(carry_event(7));
        }
        // Sixth following event, one beyond the window
        raw.push(shot_event(10, 5, 1, 7, 0.5));

        let passes = extract_passes(&parse_events(raw), &AnalysisSettings::default());
        assert!(!passes[0].leads_to_shot);
    }

    #[test]
    fn test_late_shot_is_not_credited() {
        let events = parse_events(vec![
            pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7),
            shot_event(10, 40, 1, 7, 0.5),
        ]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(!passes[0].leads_to_shot);
        assert_eq!(passes[0].next_shot_xg, 0.0);
    }

    #[test]
    fn test_opponent_shot_is_ignored() {
        let events = parse_events(vec![
            pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7),
            shot_event(10, 5, 2, 7, 0.5),
        ]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(!passes[0].leads_to_shot);
    }

    #[test]
    fn test_only_first_qualifying_shot_counts() {
        let events = parse_events(vec![
            pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7),
            shot_event(10, 5, 1, 7, 0.2),
            shot_event(10, 8, 1, 7, 0.9),
        ]);

        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert_eq!(passes[0].next_shot_xg, 0.2);
    }

    #[test]
    fn test_unknown_pass_time_still_credits_shot() {
        let mut pass = pass_event(10, 0, (60.0, 40.0), (80.0, 40.0), 7);
        pass["minute"] = json!("n/a");
        let events = parse_events(vec![pass, shot_event(10, 40, 1, 7, 0.4)]);

        // Without a parseable pass time the 30s bound cannot apply
        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(passes[0].leads_to_shot);
        assert_eq!(passes[0].next_shot_xg, 0.4);
        assert_eq!(passes[0].minute, 0);
    }

    #[test]
    fn test_non_pass_events_are_ignored() {
        let events = parse_events(vec![carry_event(1), shot_event(10, 0, 1, 1, 0.1)]);
        let passes = extract_passes(&events, &AnalysisSettings::default());
        assert!(passes.is_empty());
    }
}
