//! Leaderboard: username → most recent recorded score.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Leaderboard {
    scores: BTreeMap<String, u32>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: BTreeMap<String, u32>) -> Self {
        Self { scores }
    }

    /// Record (or overwrite) a player's score.
    pub fn record(&mut self, username: impl Into<String>, score: u32) {
        self.scores.insert(username.into(), score);
    }

    pub fn scores(&self) -> &BTreeMap<String, u32> {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Entries by score descending; ties by username ascending.
    pub fn entries(&self) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self
            .scores
            .iter()
            .map(|(name, &score)| (name.as_str(), score))
            .collect();
        // BTreeMap iteration is already name-ascending and the sort is stable.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}
