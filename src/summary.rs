//! JSON export of a finished game.

use anyhow::{Context, Result};
use std::path::Path;
use strictly_box_puzzle::GameSummary;
use tracing::{info, instrument};

/// Writes `summary` as pretty-printed JSON to `path`.
#[instrument(skip(summary), fields(path = %path.display(), score = summary.score()))]
pub fn write_summary(path: &Path, summary: &GameSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize game summary")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write summary to {}", path.display()))?;
    info!("Summary written");
    Ok(())
}
