use anyhow::Result;

use crate::analysis::types::ScoredPass;
use crate::config::settings::AnalysisSettings;

// Guards the degenerate batch where min == max
const EPSILON: f64 = 1e-9;

/// Batch-reduction step of the pipeline: rescale structural scores over
/// the whole batch, blend in the shot-quality signal, and rescale the
/// blend to [0,1].
///
/// Every output value depends on the batch-wide min/max, so results are
/// only comparable within the batch they were computed for and must be
/// recomputed whenever batch membership changes.
pub fn normalize_batch(batch: &mut [ScoredPass], settings: &AnalysisSettings) -> Result<()> {
    if batch.is_empty() {
        anyhow::bail!("no passes extracted, nothing to normalize");
    }

    let (min, max) = min_max(batch.iter().map(|p| p.structural_score));
    for pass in batch.iter_mut() {
        let structural_norm = rescale(pass.structural_score, min, max);
        pass.xg_norm = (pass.next_shot_xg / settings.xg_cap).clamp(0.0, 1.0);
        pass.importance_raw =
            settings.structural_weight * structural_norm + settings.xg_weight * pass.xg_norm;
    }

    let (min, max) = min_max(batch.iter().map(|p| p.importance_raw));
    for pass in batch.iter_mut() {
        pass.importance_norm = rescale(pass.importance_raw, min, max);
    }

    Ok(())
}

fn rescale(value: f64, min: f64, max: f64) -> f64 {
    (value - min) / (max - min + EPSILON)
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
