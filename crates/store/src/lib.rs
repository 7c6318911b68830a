//! Persistence for players and the leaderboard.
//!
//! - [`JsonStore`]: pretty-printed JSON files in a data directory, replaced
//!   atomically on every write
//! - [`MemoryStore`]: shared in-memory maps for tests and headless runs
//!
//! Both implement [`core::PlayerStore`] and [`core::LeaderboardStore`].

pub mod json;
pub mod memory;

pub use tui_barista_core as core;

pub use json::{JsonStore, LEADERBOARD_FILE, PLAYERS_FILE};
pub use memory::MemoryStore;
