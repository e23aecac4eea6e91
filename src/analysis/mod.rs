pub mod classifier;
pub mod extractor;
pub mod normalize;
pub mod scoring;
pub mod types;

pub use classifier::classify;
pub use extractor::extract_passes;
pub use normalize::normalize_batch;
pub use scoring::structural_score;
pub use types::{PassFeatures, PassRecord, PassType, ScoredPass};

// StatsBomb pitch convention
pub const PITCH_LENGTH: f64 = 120.0;
pub const PITCH_WIDTH: f64 = 80.0;
pub const CENTER_Y: f64 = 40.0;

// Penalty-area width used by the box-entry predicate
pub const BOX_Y_MIN: f64 = 18.0;
pub const BOX_Y_MAX: f64 = 62.0;
