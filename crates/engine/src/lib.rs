//! Shop engine - screens, the day loop and the menu controller
//!
//! This crate drives a play session through the collaborator traits defined
//! in `tui-barista-core`. It never touches the terminal or the filesystem
//! directly; the binary hands it a [`Context`] with real implementations and
//! tests hand it the doubles in [`testing`].
//!
//! # Module Structure
//!
//! - [`context`]: the collaborator bundle and the wall clock
//! - [`screens`]: fixed frame content for every screen
//! - [`game_loop`]: one run of days, customers and orders
//! - [`app`]: the main menu, profiles and info screens
//! - [`testing`]: scripted input, recording display, manual clock
//!
//! # Example
//!
//! ```
//! use tui_barista_engine::core::{Leaderboard, Player};
//! use tui_barista_engine::testing::{
//!     scripted_context, ManualClock, RecordingDisplay, ScriptedInput, ScriptedRandom,
//! };
//! use tui_barista_engine::types::GameConfig;
//! use tui_barista_engine::GameLoop;
//! # use std::collections::BTreeMap;
//! # use tui_barista_engine::core::{LeaderboardStore, PlayerStore, StoreError};
//! # #[derive(Clone)]
//! # struct Nowhere;
//! # impl PlayerStore for Nowhere {
//! #     fn load_player(&self, _: &str) -> Result<Option<Player>, StoreError> { Ok(None) }
//! #     fn save_player(&mut self, _: &Player) -> Result<(), StoreError> { Ok(()) }
//! # }
//! # impl LeaderboardStore for Nowhere {
//! #     fn load_leaderboard(&self) -> Result<BTreeMap<String, u32>, StoreError> {
//! #         Ok(BTreeMap::new())
//! #     }
//! #     fn save_leaderboard(&mut self, _: &BTreeMap<String, u32>) -> Result<(), StoreError> {
//! #         Ok(())
//! #     }
//! # }
//!
//! let clock = ManualClock::new();
//! // Open the shop, then leave at the first customer.
//! let input = ScriptedInput::with_clock(clock.clone()).line("").line("exit");
//! let mut ctx = scripted_context(
//!     GameConfig::instant(),
//!     input,
//!     RecordingDisplay::new(),
//!     clock,
//!     ScriptedRandom::default(),
//!     Nowhere,
//! );
//!
//! let mut player = Player::new("ada");
//! let mut board = Leaderboard::new();
//! let summary = GameLoop::new(&mut ctx, &mut player, &mut board).run().unwrap();
//! assert!(summary.aborted);
//! assert_eq!(player.games_played(), 1);
//! assert_eq!(board.scores()["ada"], 0);
//! ```

pub mod app;
pub mod context;
pub mod game_loop;
pub mod screens;
pub mod testing;

pub use tui_barista_core as core;
pub use tui_barista_input as input;
pub use tui_barista_types as types;

pub use app::App;
pub use context::{Context, SystemClock};
pub use game_loop::{GameLoop, GamePhase, RunSummary, ServeOutcome};
