use crate::analysis::types::{PassFeatures, PassRecord, PassType};
use crate::analysis::CENTER_Y;

/// Composite structural importance of a pass, independent of whether a
/// shot followed it. Additive terms, summed then floored at zero.
pub fn structural_score(pass: &PassRecord, pass_type: PassType, features: &PassFeatures) -> f64 {
    let base = pass_type.base_weight();
    let progression = progression_term(features.dx);
    let transition = transition_value(pass.start_x, pass.end_x);
    let final_third_bonus = if features.final_third { 0.35 } else { 0.0 };
    let box_entry_bonus = if features.box_entry { 0.45 } else { 0.0 };
    let centrality = centrality_bonus(pass.end_y) * 0.4;
    let special = special_boost(pass_type, pass, features);
    let striker = to_striker_bonus(pass.end_x, pass.end_y);
    let lateral_penalty = if pass_type == PassType::Lateral && pass.start_x < 60.0 {
        -0.15
    } else {
        0.0
    };

    let total = base
        + progression
        + transition
        + final_third_bonus
        + box_entry_bonus
        + centrality
        + special
        + striker
        + lateral_penalty;

    total.max(0.0)
}

/// Reward forward distance, penalize backward distance; both capped.
fn progression_term(dx: f64) -> f64 {
    if dx > 0.0 {
        (dx / 40.0).min(0.6)
    } else if dx < 0.0 {
        (dx / 60.0).max(-0.5)
    } else {
        0.0
    }
}

/// Pitch third index: defensive [0,40), middle [40,80), final [80,120]
fn zone(x: f64) -> i8 {
    if x < 40.0 {
        0
    } else if x < 80.0 {
        1
    } else {
        2
    }
}

/// Value of the zone change between start and end of the pass.
fn transition_value(start_x: f64, end_x: f64) -> f64 {
    let dz = zone(end_x) - zone(start_x);
    if dz >= 2 {
        1.0
    } else if dz == 1 {
        0.7
    } else if dz == 0 {
        if end_x > start_x + 5.0 { 0.2 } else { 0.05 }
    } else if dz == -1 {
        -0.2
    } else {
        -0.35
    }
}

/// Reward central targets more than touchline ones.
/// Centre lane [30,50], half-spaces [20,30) and (50,60], wide
/// channels [10,20) and (60,70], touchline beyond.
fn centrality_bonus(y: f64) -> f64 {
    if (30.0..=50.0).contains(&y) {
        1.0
    } else if (20.0..30.0).contains(&y) || (50.0 < y && y <= 60.0) {
        0.6
    } else if (10.0..20.0).contains(&y) || (60.0 < y && y <= 70.0) {
        0.3
    } else {
        0.1
    }
}

/// Extra credit for the most extreme instances of a category, beyond
/// its base weight.
fn special_boost(pass_type: PassType, pass: &PassRecord, features: &PassFeatures) -> f64 {
    match pass_type {
        PassType::ThroughBall => 0.4,
        PassType::Cutback => 0.35,
        PassType::Cross if pass.end_x > 102.0 => 0.25,
        PassType::SwitchOfPlay if features.length >= 30.0 && features.dy.abs() >= 25.0 => 0.25,
        _ => 0.0,
    }
}

/// Central delivery towards the striker zone. The shallower, narrower
/// tier is checked first and wins when both apply.
fn to_striker_bonus(end_x: f64, end_y: f64) -> f64 {
    if end_x >= 85.0 && (end_y - CENTER_Y).abs() <= 15.0 {
        return 0.5;
    }
    if end_x >= 95.0 && (end_y - CENTER_Y).abs() <= 20.0 {
        return 0.7;
    }
    0.0
}
