use serde::{Deserialize, Serialize};

use super::{BOX_Y_MAX, BOX_Y_MIN, CENTER_Y, PITCH_LENGTH};

/// One completed pass lifted out of a match's event stream.
///
/// Coordinates follow the StatsBomb pitch convention: x in [0,120]
/// running towards the attacking goal, y in [0,80] with 40 the centre.
#[derive(Debug, Clone)]
pub struct PassRecord {
    pub minute: i64,
    pub second: i64,
    pub player: Option<String>,
    pub team: Option<String>,
    pub team_id: Option<i64>,
    pub possession: Option<i64>,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    /// Quality of the first same-team shot found by the forward scan,
    /// 0 when no shot was credited.
    pub next_shot_xg: f64,
    pub leads_to_shot: bool,
}

impl PassRecord {
    pub fn elapsed_seconds(&self) -> i64 {
        self.minute * 60 + self.second
    }
}

/// Geometric features derived once per pass, before classification.
#[derive(Debug, Clone, Copy)]
pub struct PassFeatures {
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    pub progressive: bool,
    pub final_third: bool,
    pub box_entry: bool,
    pub cross: bool,
    pub through: bool,
    pub cutback: bool,
}

impl PassFeatures {
    pub fn from_record(pass: &PassRecord) -> Self {
        let dx = pass.end_x - pass.start_x;
        let dy = pass.end_y - pass.start_y;
        Self {
            dx,
            dy,
            length: dx.hypot(dy),
            progressive: pass.end_x > pass.start_x + 0.25 * (PITCH_LENGTH - pass.start_x),
            final_third: pass.end_x > 80.0,
            box_entry: pass.end_x > 102.0 && (BOX_Y_MIN..=BOX_Y_MAX).contains(&pass.end_y),
            cross: (pass.start_y < 18.0 || pass.start_y > 62.0) && pass.end_x > 102.0,
            through: dx > 10.0 && pass.end_x > 102.0 && (pass.end_y - CENTER_Y).abs() < 20.0,
            cutback: pass.start_x > 102.0 && dx < -5.0,
        }
    }
}

/// Tactical pass category. Exactly one per pass, assigned by the
/// classifier's ordered rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassType {
    #[serde(rename = "Cross")]
    Cross,
    #[serde(rename = "Cutback")]
    Cutback,
    #[serde(rename = "Through Ball")]
    ThroughBall,
    #[serde(rename = "Switch of Play")]
    SwitchOfPlay,
    #[serde(rename = "Progressive")]
    Progressive,
    #[serde(rename = "Forward")]
    Forward,
    #[serde(rename = "Backward")]
    Backward,
    #[serde(rename = "Lateral")]
    Lateral,
}

impl PassType {
    pub fn label(&self) -> &'static str {
        match self {
            PassType::Cross => "Cross",
            PassType::Cutback => "Cutback",
            PassType::ThroughBall => "Through Ball",
            PassType::SwitchOfPlay => "Switch of Play",
            PassType::Progressive => "Progressive",
            PassType::Forward => "Forward",
            PassType::Backward => "Backward",
            PassType::Lateral => "Lateral",
        }
    }

    /// Base structural weight of the category.
    pub fn base_weight(&self) -> f64 {
        match self {
            PassType::ThroughBall => 1.00,
            PassType::Cutback => 0.95,
            PassType::Cross => 0.85,
            PassType::SwitchOfPlay => 0.70,
            PassType::Progressive => 0.65,
            PassType::Forward => 0.55,
            PassType::Lateral => 0.20,
            PassType::Backward => 0.10,
        }
    }
}

/// Fully scored pass, one CSV row in the exported table.
///
/// Field order matches the exported column order. The importance
/// fields are rewritten by the batch normalizer; everything else is
/// fixed at construction.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPass {
    pub minute: i64,
    pub second: i64,
    pub player: Option<String>,
    pub team: Option<String>,
    pub team_id: Option<i64>,
    pub possession: Option<i64>,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub next_shot_xg: f64,
    pub leads_to_shot: u8,
    pub dx: f64,
    pub dy: f64,
    pub length: f64,
    pub progressive: u8,
    pub final_third: u8,
    pub box_entry: u8,
    pub cross: u8,
    pub through: u8,
    pub cutback: u8,
    pub pass_type: PassType,
    pub structural_score: f64,
    pub xg_norm: f64,
    pub importance_raw: f64,
    pub importance_norm: f64,
    pub time: i64,
}

impl ScoredPass {
    pub fn new(
        record: PassRecord,
        features: PassFeatures,
        pass_type: PassType,
        structural_score: f64,
    ) -> Self {
        let time = record.elapsed_seconds();
        Self {
            minute: record.minute,
            second: record.second,
            player: record.player,
            team: record.team,
            team_id: record.team_id,
            possession: record.possession,
            start_x: record.start_x,
            start_y: record.start_y,
            end_x: record.end_x,
            end_y: record.end_y,
            next_shot_xg: record.next_shot_xg,
            leads_to_shot: u8::from(record.leads_to_shot),
            dx: features.dx,
            dy: features.dy,
            length: features.length,
            progressive: u8::from(features.progressive),
            final_third: u8::from(features.final_third),
            box_entry: u8::from(features.box_entry),
            cross: u8::from(features.cross),
            through: u8::from(features.through),
            cutback: u8::from(features.cutback),
            pass_type,
            structural_score,
            xg_norm: 0.0,
            importance_raw: 0.0,
            importance_norm: 0.0,
            time,
        }
    }
}
