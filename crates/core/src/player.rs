//! Player profile and end-of-run rating.

use serde::{Deserialize, Serialize};

use crate::achievements::Achievement;

/// A persisted player profile, keyed by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    username: String,
    total_score: u32,
    days_played: u32,
    #[serde(default)]
    games_played: u32,
    #[serde(default)]
    achievements: Vec<Achievement>,
}

impl Player {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            total_score: 0,
            days_played: 0,
            games_played: 0,
            achievements: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn days_played(&self) -> u32 {
        self.days_played
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    pub fn add_score(&mut self, points: u32) {
        self.total_score = self.total_score.saturating_add(points);
    }

    pub fn increment_days_played(&mut self) {
        self.days_played += 1;
    }

    pub fn increment_games_played(&mut self) {
        self.games_played += 1;
    }

    /// Returns `false` if it was already unlocked.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        if self.has_achievement(achievement) {
            return false;
        }
        self.achievements.push(achievement);
        true
    }

    pub fn rating(&self) -> u8 {
        rating(self.total_score, self.days_played)
    }
}

/// 1-5 star rating from the average score per day (integer division).
///
/// | Average | Stars |
/// |---------|-------|
/// | > 500 | 5 |
/// | > 300 | 4 |
/// | > 150 | 3 |
/// | otherwise | 2 |
///
/// No days played rates 1.
pub fn rating(total_score: u32, days_played: u32) -> u8 {
    if days_played == 0 {
        return 1;
    }
    match total_score / days_played {
        avg if avg > 500 => 5,
        avg if avg > 300 => 4,
        avg if avg > 150 => 3,
        _ => 2,
    }
}
