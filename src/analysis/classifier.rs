use crate::analysis::types::{PassFeatures, PassRecord, PassType};
use crate::analysis::{CENTER_Y, PITCH_LENGTH};

type Rule = fn(&PassRecord, &PassFeatures) -> bool;

/// Ordered rule chain, first match wins.
///
/// The order is load-bearing: the categories overlap geometrically
/// (a cross is usually also progressive, a cutback is also backward),
/// so each rule only sees passes rejected by every rule above it.
const RULES: &[(Rule, PassType)] = &[
    (is_cross, PassType::Cross),
    (is_cutback, PassType::Cutback),
    (is_through_ball, PassType::ThroughBall),
    (is_switch_of_play, PassType::SwitchOfPlay),
    (is_progressive, PassType::Progressive),
    (is_forward, PassType::Forward),
    (is_backward, PassType::Backward),
];

/// Assign exactly one tactical category to a pass.
pub fn classify(pass: &PassRecord, features: &PassFeatures) -> PassType {
    RULES
        .iter()
        .find(|(rule, _)| rule(pass, features))
        .map(|&(_, pass_type)| pass_type)
        .unwrap_or(PassType::Lateral)
}

/// Delivery from a wide starting position into the zone near the byline
fn is_cross(pass: &PassRecord, _features: &PassFeatures) -> bool {
    (pass.start_y < 18.0 || pass.start_y > 62.0) && pass.end_x > 102.0
}

/// Pulled backward from the byline area
fn is_cutback(pass: &PassRecord, features: &PassFeatures) -> bool {
    pass.start_x > 102.0 && features.dx < -5.0
}

/// Played forward into a central attacking channel
fn is_through_ball(pass: &PassRecord, features: &PassFeatures) -> bool {
    features.dx > 10.0 && pass.end_x > 102.0 && (pass.end_y - CENTER_Y).abs() < 20.0
}

/// Long diagonal changing sides of the pitch
fn is_switch_of_play(_pass: &PassRecord, features: &PassFeatures) -> bool {
    features.dy.abs() > 30.0 && features.length > 30.0
}

/// Covers at least a quarter of the remaining distance to the goal line
fn is_progressive(pass: &PassRecord, _features: &PassFeatures) -> bool {
    pass.end_x > pass.start_x + 0.25 * (PITCH_LENGTH - pass.start_x)
}

fn is_forward(_pass: &PassRecord, features: &PassFeatures) -> bool {
    features.dx > 5.0
}

fn is_backward(_pass: &PassRecord, features: &PassFeatures) -> bool {
    features.dx < -5.0
}
