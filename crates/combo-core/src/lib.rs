//! # combo-core
//!
//! Core library for the game dev combo finder.
//!
//! This crate provides:
//! - The closed score tier enumeration and the genre/game score table
//! - CSV ingestion with genre and game label cleanup
//! - Checkbox selection state and result recomputation with change signals

pub mod config;
pub mod error;
pub mod loader;
pub mod score;
pub mod selection;

// Re-export from config module
pub use config::{DataSource, default_sources};

// Re-export from error module
pub use error::{BracketError, Error, Result};

// Re-export from loader module
pub use loader::{clean_genre, load_table, split_games, strip_annotations};

// Re-export from score module
pub use score::{ScoreTable, ScoreTier};

// Re-export from selection module
pub use selection::{
    CheckList, ListKind, ResultRow, SelectionChange, SelectionEvent, Selector, Signal,
    compute_results,
};
