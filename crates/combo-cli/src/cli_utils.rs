//! Common CLI utility functions shared across commands.

use std::path::Path;

use anyhow::{Context, Result};
use combo_core::{ScoreTable, default_sources, load_table};
use tracing::{info, warn};

/// Load the score table from the default sources under `data_dir`.
pub fn load_score_table(data_dir: &Path) -> Result<ScoreTable> {
    let sources = default_sources(data_dir);
    info!("Loading {} source files from {}", sources.len(), data_dir.display());

    let table = load_table(&sources)
        .with_context(|| format!("Failed to load score data from {}", data_dir.display()))?;
    if table.is_empty() {
        warn!("No score data found under {}", data_dir.display());
    }
    Ok(table)
}
