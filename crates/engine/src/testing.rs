//! Deterministic collaborator doubles for driving the shop without a terminal.
//!
//! All doubles are cheap handles over shared state: keep a clone, move the
//! other into a [`Context`](crate::Context), and inspect it after the run.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crate::context::Context;
use crate::core::{Clock, DisplaySink, InputSource, LeaderboardStore, PlayerStore, RandomSource};
use crate::types::{Frame, GameConfig};

/// Assemble a [`Context`] from test doubles. `store` backs both players and
/// the leaderboard, so it must be a shared handle.
pub fn scripted_context<S>(
    config: GameConfig,
    input: ScriptedInput,
    display: RecordingDisplay,
    clock: ManualClock,
    rng: impl RandomSource + 'static,
    store: S,
) -> Context
where
    S: PlayerStore + LeaderboardStore + Clone + 'static,
{
    Context {
        config,
        input: Box::new(input),
        display: Box::new(display),
        clock: Box::new(clock),
        rng: Box::new(rng),
        players: Box::new(store.clone()),
        leaderboard: Box::new(store),
    }
}

/// Virtual time. Sleeping advances it instantly.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
    slept: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Total time spent in `sleep`.
    pub fn slept(&self) -> Duration {
        self.slept.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep(&mut self, duration: Duration) {
        self.slept.set(self.slept.get() + duration);
        self.advance(duration);
    }
}

/// Pre-scripted input lines, each with a simulated think time.
///
/// When built with [`ScriptedInput::with_clock`], reading a line advances the
/// clock by that line's think time before returning it. Running out of lines
/// reports `UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: Rc<RefCell<VecDeque<(Duration, String)>>>,
    clock: Option<ManualClock>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: ManualClock) -> Self {
        Self {
            lines: Rc::default(),
            clock: Some(clock),
        }
    }

    /// Queue a line typed instantly.
    pub fn line(self, text: impl Into<String>) -> Self {
        self.after(Duration::ZERO, text)
    }

    /// Queue a line typed after `think` time.
    pub fn after(self, think: Duration, text: impl Into<String>) -> Self {
        self.lines.borrow_mut().push_back((think, text.into()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.lines.borrow().len()
    }
}

impl InputSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<String> {
        let Some((think, text)) = self.lines.borrow_mut().pop_front() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ));
        };
        if let Some(clock) = &self.clock {
            clock.advance(think);
        }
        Ok(text)
    }
}

/// Records every presented frame.
#[derive(Debug, Clone, Default)]
pub struct RecordingDisplay {
    frames: Rc<RefCell<Vec<Frame>>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.frames.borrow().clone()
    }

    /// Number of presented frames with a line exactly equal to `line`.
    pub fn count_line(&self, line: &str) -> usize {
        self.frames
            .borrow()
            .iter()
            .filter(|f| f.lines().iter().any(|l| l == line))
            .count()
    }

    pub fn last(&self) -> Option<Frame> {
        self.frames.borrow().last().cloned()
    }
}

impl DisplaySink for RecordingDisplay {
    fn present(&mut self, frame: &Frame) {
        self.frames.borrow_mut().push(frame.clone());
    }
}

/// Random source replaying fixed values.
///
/// Exhausted uniforms read as 0.99 (never a VIP at the default probability);
/// exhausted integers read as 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    uniforms: VecDeque<f64>,
    ints: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(
        uniforms: impl IntoIterator<Item = f64>,
        ints: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            uniforms: uniforms.into_iter().collect(),
            ints: ints.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        self.uniforms.pop_front().unwrap_or(0.99)
    }

    fn int_below(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.ints.pop_front().unwrap_or(0) % n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_input_advances_clock() {
        let clock = ManualClock::new();
        let mut input = ScriptedInput::with_clock(clock.clone())
            .after(Duration::from_secs(3), "tea")
            .line("milk");

        assert_eq!(input.read_line().unwrap(), "tea");
        assert_eq!(clock.now(), Duration::from_secs(3));
        assert_eq!(input.read_line().unwrap(), "milk");
        assert_eq!(clock.now(), Duration::from_secs(3));
        assert_eq!(input.remaining(), 0);
        assert_eq!(
            input.read_line().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn sleeping_advances_manual_clock() {
        let mut clock = ManualClock::new();
        clock.sleep(Duration::from_millis(1500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
        assert_eq!(clock.slept(), Duration::from_millis(1500));
    }

    #[test]
    fn scripted_random_replays_then_falls_back() {
        let mut rng = ScriptedRandom::new([0.1], [3, 9]);
        assert_eq!(rng.uniform(), 0.1);
        assert_eq!(rng.uniform(), 0.99);
        assert_eq!(rng.int_below(5), 3);
        assert_eq!(rng.int_below(5), 4);
        assert_eq!(rng.int_below(5), 0);
    }
}
