//! Achievements unlocked at the end of a day.

use serde::{Deserialize, Serialize};

use crate::player::Player;
use crate::report::DayReport;

/// Total score a player must exceed for [`Achievement::HighRoller`].
pub const HIGH_ROLLER_THRESHOLD: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstShift,
    PerfectDay,
    HighRoller,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [
        Achievement::FirstShift,
        Achievement::PerfectDay,
        Achievement::HighRoller,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Achievement::FirstShift => "First Shift",
            Achievement::PerfectDay => "Perfect Day",
            Achievement::HighRoller => "High Roller",
        }
    }

    /// Whether the condition holds after `day` (independent of prior unlocks).
    pub fn is_met(&self, player: &Player, day: &DayReport) -> bool {
        match self {
            Achievement::FirstShift => player.days_played() >= 1,
            Achievement::PerfectDay => {
                !day.aborted && day.orders_made > 0 && day.orders_missed == 0
            }
            Achievement::HighRoller => player.total_score() > HIGH_ROLLER_THRESHOLD,
        }
    }
}

/// Unlock every achievement whose condition now holds; returns the new ones.
pub fn check_achievements(player: &mut Player, day: &DayReport) -> Vec<Achievement> {
    let mut unlocked = Vec::new();
    for achievement in Achievement::ALL {
        if achievement.is_met(player, day) && player.unlock(achievement) {
            unlocked.push(achievement);
        }
    }
    unlocked
}
