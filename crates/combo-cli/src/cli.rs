//! CLI argument definitions for combo.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use combo_core::ScoreTier;

#[derive(Parser)]
#[command(name = "combo")]
#[command(about = "Game dev genre/game combination finder", version)]
pub struct Args {
    /// Directory the raw/*.csv source files are resolved against
    #[arg(long, value_name = "DIR", env = "COMBO_DATA_DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Label set used for score tiers and headings
    #[arg(long, value_enum, default_value = "en")]
    pub labels: LabelSet,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the results for one selection without opening the UI
    Query {
        /// Genre to select (repeatable)
        #[arg(long = "genre", value_name = "GENRE")]
        genres: Vec<String>,
        /// Game to select (repeatable)
        #[arg(long = "game", value_name = "GAME")]
        games: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every known genre and game
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Display language for tier labels and pane titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LabelSet {
    #[default]
    En,
    Ko,
}

impl LabelSet {
    pub fn tier(&self, tier: ScoreTier) -> &'static str {
        match self {
            Self::En => tier.label(),
            Self::Ko => tier.localized_label(),
        }
    }

    /// Titles of the genre, game and result panes
    pub fn pane_titles(&self) -> [&'static str; 3] {
        match self {
            Self::En => ["Genres", "Games", "Results"],
            Self::Ko => ["장르", "게임", "결과"],
        }
    }
}
