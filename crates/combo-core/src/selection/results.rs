use serde::Serialize;

use crate::score::{ScoreTable, ScoreTier};

/// One matching combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    pub tier: ScoreTier,
    pub genre: String,
    pub game: String,
}

/// Every (genre, game) pair from the two selections that exists in `table`,
/// best tier first.
///
/// Pairs are generated genre-major in the given order; the sort is stable so
/// equal tiers keep that order.
pub fn compute_results<'a, G, M>(table: &ScoreTable, genres: G, games: M) -> Vec<ResultRow>
where
    G: IntoIterator<Item = &'a str>,
    M: IntoIterator<Item = &'a str>,
{
    let games: Vec<&str> = games.into_iter().collect();
    let mut rows = Vec::new();

    for genre in genres {
        for game in &games {
            if let Some(tier) = table.get(genre, game) {
                rows.push(ResultRow {
                    tier,
                    genre: genre.to_string(),
                    game: game.to_string(),
                });
            }
        }
    }

    rows.sort_by(|a, b| b.tier.cmp(&a.tier));
    rows
}
