use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::analysis::types::ScoredPass;

/// Write the full results table, one row per scored pass
pub fn write_csv(path: &Path, batch: &[ScoredPass]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    for pass in batch {
        writer.serialize(pass).context("Failed to write result row")?;
    }

    writer.flush().context("Failed to flush output file")?;
    Ok(())
}

/// Render the first `rows` passes as an aligned table for the terminal
pub fn render_preview(batch: &[ScoredPass], rows: usize) -> String {
    let header = format!(
        "{:>6}  {:<28}{:<24}{:<16}{:>15}  {:>12}",
        "time", "player", "team", "pass_type", "importance_norm", "next_shot_xg"
    );

    let mut out = String::new();
    out.push_str(&header.bold().to_string());
    out.push('\n');

    for pass in batch.iter().take(rows) {
        let line = format!(
            "{:>6}  {:<28}{:<24}{:<16}{:>15.6}  {:>12.3}",
            pass.time,
            pass.player.as_deref().unwrap_or("-"),
            pass.team.as_deref().unwrap_or("-"),
            pass.pass_type.label(),
            pass.importance_norm,
            pass.next_shot_xg
        );
        out.push_str(&line);
        out.push('\n');
    }

    out
}
