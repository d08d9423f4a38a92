//! Compiled-in data configuration.
//!
//! This module contains the fixed inputs of the loader:
//! - `DataSource` - a CSV file paired with the tier every row in it receives
//! - The default source list, in merge order
//! - Genre label cleanup constants

use std::path::{Path, PathBuf};

use crate::score::ScoreTier;

/// Default source files relative to the data directory, in merge order.
///
/// Later entries overwrite earlier ones for the same genre/game pair.
pub const DEFAULT_SOURCES: [(&str, ScoreTier); 3] = [
    ("raw/best.csv", ScoreTier::Masterpiece),
    ("raw/unique.csv", ScoreTier::Original),
    ("raw/not_bad.csv", ScoreTier::NotBad),
];

/// Genre label cleanup.
pub mod genre {
    /// Substring removed from every raw genre label ("game").
    pub const MARKER: &str = "게임";

    /// Spelling variants mapped to their canonical genre key.
    pub const TRANSLATIONS: [(&str, &str); 1] = [("어드벤쳐", "어드벤처")];

    /// Canonical spelling of `label`, or `label` itself when no translation exists.
    pub fn translate(label: &str) -> &str {
        TRANSLATIONS
            .iter()
            .find(|(variant, _)| *variant == label)
            .map(|(_, canonical)| *canonical)
            .unwrap_or(label)
    }
}

/// A CSV file whose rows all share one score tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub path: PathBuf,
    pub tier: ScoreTier,
}

impl DataSource {
    pub fn new(path: impl Into<PathBuf>, tier: ScoreTier) -> Self {
        Self {
            path: path.into(),
            tier,
        }
    }

    /// Resolve a relative path against `base`; absolute paths are kept.
    pub fn resolve(&self, base: &Path) -> Self {
        Self {
            path: base.join(&self.path),
            tier: self.tier,
        }
    }
}

/// The default source list resolved against `data_dir`
pub fn default_sources(data_dir: &Path) -> Vec<DataSource> {
    DEFAULT_SOURCES
        .iter()
        .map(|(path, tier)| DataSource::new(*path, *tier).resolve(data_dir))
        .collect()
}
