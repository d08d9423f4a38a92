//! List command: print the distinct genres and games.

use anyhow::Result;
use combo_core::ScoreTable;
use owo_colors::OwoColorize;
use serde_json::json;

/// Run the list command
pub fn run(table: &ScoreTable, json: bool) -> Result<()> {
    if json {
        let value = json!({
            "genres": table.genres(),
            "games": table.games(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let genres = table.genres();
    let games = table.games();
    println!("{} ({})", "Genres".bold(), genres.len());
    for genre in &genres {
        println!("  {}", genre);
    }
    println!("{} ({})", "Games".bold(), games.len());
    for game in &games {
        println!("  {}", game);
    }
    Ok(())
}
