//! Shared types module - data structures, constants and configuration
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, making them usable
//! from the pure game logic, the terminal renderer and the storage layer alike.
//!
//! # Screen Dimensions
//!
//! Every screen is drawn into a fixed bordered frame:
//!
//! - **Width**: 100 columns including the two border columns
//! - **Height**: 30 rows including the two border rows
//!
//! Content wider than `FRAME_WIDTH - 4` is word-wrapped before it is centered.
//!
//! # Shop Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DAYS_PER_GAME` | 7 | Days in one run |
//! | `CUSTOMERS_PER_DAY` | 5 | Customers generated at the start of each day |
//! | `VIP_PROBABILITY` | 0.2 | Chance that a generated customer is a VIP |
//! | `FAST_ORDER_SECS` | 5.0 | Orders answered strictly faster than this earn the fast bonus |
//! | `FAST_ORDER_POINTS` | 150 | Score for a correct fast order |
//! | `ORDER_POINTS` | 100 | Score for a correct order at or above the time limit |
//!
//! # Pacing
//!
//! Cutscenes and reaction shots block for a fixed duration (milliseconds):
//!
//! | Screen | Delay |
//! |--------|-------|
//! | Intro | 2000 |
//! | Customer arrival | 1000 |
//! | Happy / unhappy reaction | 1000 |
//! | Day transition | 1500 |
//! | Ending | 2000 |
//!
//! # Examples
//!
//! ```
//! use tui_barista_types::{Frame, GameConfig, MenuChoice};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.days_per_game, 7);
//! assert_eq!(config.customers_per_day, 5);
//!
//! // Menu selections are 1-based.
//! assert_eq!(MenuChoice::from_index(1), Some(MenuChoice::NewGame));
//! assert_eq!(MenuChoice::from_index(9), None);
//!
//! let frame = Frame::new(["DAY 1", "", "The sun rises..."]);
//! assert_eq!(frame.lines().len(), 3);
//! assert_eq!(frame.prompt(), None);
//! ```

use std::path::PathBuf;
use std::time::Duration;

/// Frame width in columns, border included (100)
pub const FRAME_WIDTH: usize = 100;

/// Frame height in rows, border included (30)
pub const FRAME_HEIGHT: usize = 30;

/// Cue printed after a prompt, where the player types
pub const INPUT_CUE: &str = "> ";

/// Days in one run (7)
pub const DAYS_PER_GAME: u32 = 7;

/// Customers generated per day (5)
pub const CUSTOMERS_PER_DAY: usize = 5;

/// Probability that a generated customer is a VIP (20%)
pub const VIP_PROBABILITY: f64 = 0.2;

/// Orders answered strictly faster than this many seconds earn `FAST_ORDER_POINTS`
pub const FAST_ORDER_SECS: f64 = 5.0;

/// Score for a correct order answered in under `FAST_ORDER_SECS`
pub const FAST_ORDER_POINTS: u32 = 150;

/// Score for a correct order answered at or after `FAST_ORDER_SECS`
pub const ORDER_POINTS: u32 = 100;

/// Multiplier applied to a VIP's correct order before truncation
pub const VIP_MULTIPLIER: f64 = 1.5;

/// Free-text sentinel that abandons the current run (case-insensitive)
pub const EXIT_COMMAND: &str = "exit";

/// Directory holding player and leaderboard files
pub const DEFAULT_DATA_DIR: &str = ".";

/// Customer names drawn uniformly at random
pub const CUSTOMER_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Diana", "Edward", "Fiona", "George", "Zoe",
];

/// Drinks on the menu, drawn uniformly at random
pub const DRINK_MENU: [&str; 5] = [
    "Milk Tea",
    "Taro Milk Tea",
    "Matcha Milk Tea",
    "Strawberry Boba",
    "Brown Sugar Boba",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_defaults() {
        assert_eq!(DAYS_PER_GAME, 7);
        assert_eq!(CUSTOMERS_PER_DAY, 5);
        assert_eq!(FAST_ORDER_POINTS, 150);
        assert_eq!(ORDER_POINTS, 100);
        assert_eq!(FRAME_WIDTH, 100);
        assert_eq!(FRAME_HEIGHT, 30);
    }

    #[test]
    fn menu_choice_round_trips_through_index() {
        for choice in MenuChoice::ALL {
            assert_eq!(MenuChoice::from_index(choice.index()), Some(choice));
        }
        assert_eq!(MenuChoice::from_index(0), None);
    }

    #[test]
    fn empty_prompt_is_treated_as_absent() {
        let frame = Frame::new(["hello"]).with_prompt("");
        assert_eq!(frame.prompt(), None);

        let frame = Frame::new(["hello"]).with_prompt("Press Enter...");
        assert_eq!(frame.prompt(), Some("Press Enter..."));
    }
}

/// Top-level menu entries
///
/// The main menu is numbered 1-8 in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    NewGame,
    Profile,
    Statistics,
    Tutorial,
    Leaderboard,
    Achievements,
    Credits,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::NewGame,
        MenuChoice::Profile,
        MenuChoice::Statistics,
        MenuChoice::Tutorial,
        MenuChoice::Leaderboard,
        MenuChoice::Achievements,
        MenuChoice::Credits,
        MenuChoice::Exit,
    ];

    /// Look up an entry by its 1-based menu number
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_barista_types::MenuChoice;
    ///
    /// assert_eq!(MenuChoice::from_index(2), Some(MenuChoice::Profile));
    /// assert_eq!(MenuChoice::from_index(8), Some(MenuChoice::Exit));
    /// assert_eq!(MenuChoice::from_index(0), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        let i = usize::from(index).checked_sub(1)?;
        Self::ALL.get(i).copied()
    }

    /// 1-based menu number
    pub fn index(&self) -> u8 {
        match self {
            MenuChoice::NewGame => 1,
            MenuChoice::Profile => 2,
            MenuChoice::Statistics => 3,
            MenuChoice::Tutorial => 4,
            MenuChoice::Leaderboard => 5,
            MenuChoice::Achievements => 6,
            MenuChoice::Credits => 7,
            MenuChoice::Exit => 8,
        }
    }

    /// Label shown in the main menu
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::NewGame => "Start New Game",
            MenuChoice::Profile => "Login / Register",
            MenuChoice::Statistics => "View Statistics",
            MenuChoice::Tutorial => "Tutorial",
            MenuChoice::Leaderboard => "Leaderboard",
            MenuChoice::Achievements => "Achievements",
            MenuChoice::Credits => "Credits",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Profile sub-menu entries (1 = Login, 2 = Register)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileChoice {
    Login,
    Register,
}

impl ProfileChoice {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(ProfileChoice::Login),
            2 => Some(ProfileChoice::Register),
            _ => None,
        }
    }
}

/// One rendering request: content lines plus an optional prompt.
///
/// Frames are transient. They are built per screen and consumed by a display
/// sink; nothing about them is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    lines: Vec<String>,
    prompt: Option<String>,
}

impl Frame {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompt: None,
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The prompt, if present and non-empty.
    pub fn prompt(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

/// Fixed presentational delays between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub intro: Duration,
    pub arrival: Duration,
    pub reaction: Duration,
    pub day_transition: Duration,
    pub ending: Duration,
}

impl Pacing {
    /// No delays at all (tests, headless runs).
    pub const fn instant() -> Self {
        Self {
            intro: Duration::ZERO,
            arrival: Duration::ZERO,
            reaction: Duration::ZERO,
            day_transition: Duration::ZERO,
            ending: Duration::ZERO,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            intro: Duration::from_millis(2000),
            arrival: Duration::from_millis(1000),
            reaction: Duration::from_millis(1000),
            day_transition: Duration::from_millis(1500),
            ending: Duration::from_millis(2000),
        }
    }
}

/// Game tunables.
///
/// `Default` is built from the constants above; there are no flags or
/// environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub days_per_game: u32,
    pub customers_per_day: usize,
    pub vip_probability: f64,
    pub frame_width: usize,
    pub frame_height: usize,
    pub data_dir: PathBuf,
    pub pacing: Pacing,
}

impl GameConfig {
    /// Default config without presentational delays.
    pub fn instant() -> Self {
        Self {
            pacing: Pacing::instant(),
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            days_per_game: DAYS_PER_GAME,
            customers_per_day: CUSTOMERS_PER_DAY,
            vip_probability: VIP_PROBABILITY,
            frame_width: FRAME_WIDTH,
            frame_height: FRAME_HEIGHT,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            pacing: Pacing::default(),
        }
    }
}
