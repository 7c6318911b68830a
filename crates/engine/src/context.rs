//! The bundle of collaborators every screen and the game loop talk through.

use std::io;
use std::time::{Duration, Instant};

use crate::core::{Clock, DisplaySink, InputSource, LeaderboardStore, PlayerStore, RandomSource};
use crate::types::{Frame, GameConfig};

/// Explicit handles for everything outside the pure core.
///
/// There are no ambient singletons: input, output, time, randomness and
/// persistence all arrive here.
pub struct Context {
    pub config: GameConfig,
    pub input: Box<dyn InputSource>,
    pub display: Box<dyn DisplaySink>,
    pub clock: Box<dyn Clock>,
    pub rng: Box<dyn RandomSource>,
    pub players: Box<dyn PlayerStore>,
    pub leaderboard: Box<dyn LeaderboardStore>,
}

impl Context {
    pub fn present(&mut self, frame: &Frame) {
        self.display.present(frame);
    }

    pub fn read_line(&mut self) -> io::Result<String> {
        self.input.read_line()
    }

    /// Present `frame` and block for the next line.
    pub fn ask(&mut self, frame: &Frame) -> io::Result<String> {
        self.present(frame);
        self.read_line()
    }

    /// Present `frame` and block for `duration`.
    pub fn show_for(&mut self, frame: &Frame, duration: Duration) {
        self.present(frame);
        if !duration.is_zero() {
            self.clock.sleep(duration);
        }
    }
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic_and_sleeps() {
        let mut clock = SystemClock::new();
        let a = clock.now();
        clock.sleep(Duration::from_millis(20));
        let b = clock.now();
        assert!(b >= a + Duration::from_millis(20));
    }
}
