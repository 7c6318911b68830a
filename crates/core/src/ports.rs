//! Collaborator traits.
//!
//! The game loop never touches stdin, stdout, the wall clock, the filesystem or
//! a global RNG directly. Every capability is handed in through one of these
//! traits so the loop can be driven by scripted doubles in tests.

use std::collections::BTreeMap;
use std::io;
use std::time::Duration;

use crate::error::StoreError;
use crate::player::Player;
use crate::types::Frame;

/// Blocking line-oriented input.
pub trait InputSource {
    /// Next line of raw user text, without the line terminator.
    ///
    /// An exhausted stream is reported as `io::ErrorKind::UnexpectedEof`.
    fn read_line(&mut self) -> io::Result<String>;
}

/// Fire-and-forget screen output.
pub trait DisplaySink {
    fn present(&mut self, frame: &Frame);
}

/// Monotonic time plus blocking presentational delays.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;

    /// Block for `duration`. Not cancellable.
    fn sleep(&mut self, duration: Duration);
}

pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `[0, n)`. Returns 0 when `n == 0`.
    fn int_below(&mut self, n: usize) -> usize;
}

/// Player records keyed by username, last write wins.
pub trait PlayerStore {
    fn load_player(&self, username: &str) -> Result<Option<Player>, StoreError>;
    fn save_player(&mut self, player: &Player) -> Result<(), StoreError>;
}

/// Whole-value leaderboard persistence.
pub trait LeaderboardStore {
    fn load_leaderboard(&self) -> Result<BTreeMap<String, u32>, StoreError>;
    fn save_leaderboard(&mut self, scores: &BTreeMap<String, u32>) -> Result<(), StoreError>;
}
