//! Query command: apply one selection and print the matching rows.

use std::io::IsTerminal;

use anyhow::Result;
use combo_core::{ListKind, ResultRow, ScoreTable, ScoreTier, Selector, clean_genre};
use owo_colors::OwoColorize;
use tracing::warn;

use crate::cli::LabelSet;

/// Run the query command
pub fn run(
    table: ScoreTable,
    genres: &[String],
    games: &[String],
    labels: LabelSet,
    json: bool,
) -> Result<()> {
    let rows = select(table, genres, games);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        eprintln!("No matching combinations");
    } else {
        print!("{}", format_rows(&rows, labels, std::io::stdout().is_terminal()));
    }
    Ok(())
}

/// Check the requested labels and return the resulting rows.
///
/// Genres go through the same cleanup as the CSV loader, so "액션 게임"
/// selects "액션".
pub fn select(table: ScoreTable, genres: &[String], games: &[String]) -> Vec<ResultRow> {
    let mut selector = Selector::new(table);

    for genre in genres {
        let key = clean_genre(genre);
        if !selector.check_label(ListKind::Genre, &key) {
            warn!("Unknown genre: {}", genre);
        }
    }
    for game in games {
        if !selector.check_label(ListKind::Game, game.trim()) {
            warn!("Unknown game: {}", game);
        }
    }

    selector.rows().to_vec()
}

/// One tab separated line per row: tier label, genre, game
pub fn format_rows(rows: &[ResultRow], labels: LabelSet, color: bool) -> String {
    let mut output = String::new();
    for row in rows {
        let label = labels.tier(row.tier);
        let label = if color {
            format_colored_tier(row.tier, label)
        } else {
            label.to_string()
        };
        output.push_str(&format!("{}\t{}\t{}\n", label, row.genre, row.game));
    }
    output
}

/// Format tier label with color
fn format_colored_tier(tier: ScoreTier, label: &str) -> String {
    match tier {
        ScoreTier::Masterpiece => label.yellow().bold().to_string(),
        ScoreTier::Original => label.cyan().bold().to_string(),
        ScoreTier::NotBad => label.bold().to_string(),
    }
}
