use std::collections::{BTreeMap, BTreeSet};

use super::ScoreTier;

/// Lookup table of genre → game → tier.
///
/// Both levels are ordered maps so label lists come out sorted and stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    genres: BTreeMap<String, BTreeMap<String, ScoreTier>>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a single combination, overwriting any previous tier.
    pub fn insert(&mut self, genre: &str, game: &str, tier: ScoreTier) {
        self.genres
            .entry(genre.to_string())
            .or_default()
            .insert(game.to_string(), tier);
    }

    /// Insert every game of one source row with the same tier.
    pub fn insert_games<I, S>(&mut self, genre: &str, games: I, tier: ScoreTier)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for game in games {
            self.insert(genre, game.as_ref(), tier);
        }
    }

    pub fn get(&self, genre: &str, game: &str) -> Option<ScoreTier> {
        self.genres.get(genre)?.get(game).copied()
    }

    /// Distinct genres, sorted
    pub fn genres(&self) -> Vec<String> {
        self.genres.keys().cloned().collect()
    }

    /// Distinct games across all genres, sorted
    pub fn games(&self) -> Vec<String> {
        self.genres
            .values()
            .flat_map(|games| games.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Number of genre/game combinations
    pub fn len(&self) -> usize {
        self.genres.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
