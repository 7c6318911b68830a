//! In-memory store.
//!
//! Clones share the same underlying maps, so a test can hand one clone to the
//! game and inspect another afterwards. Writes can be made to fail on demand.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

use crate::core::{LeaderboardStore, Player, PlayerStore, StoreError};

#[derive(Debug, Default)]
struct Inner {
    players: BTreeMap<String, Player>,
    leaderboard: BTreeMap<String, u32>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.inner.borrow_mut().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.borrow_mut().fail_writes = fail;
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
        self.inner.borrow().writes
    }

    pub fn player(&self, username: &str) -> Option<Player> {
        self.inner.borrow().players.get(username).cloned()
    }

    pub fn leaderboard(&self) -> BTreeMap<String, u32> {
        self.inner.borrow().leaderboard.clone()
    }

    fn check(fail: bool) -> Result<(), StoreError> {
        if fail {
            let e = io::Error::new(io::ErrorKind::Other, "simulated storage failure");
            return Err(e.into());
        }
        Ok(())
    }
}

impl PlayerStore for MemoryStore {
    fn load_player(&self, username: &str) -> Result<Option<Player>, StoreError> {
        let inner = self.inner.borrow();
        Self::check(inner.fail_reads)?;
        Ok(inner.players.get(username).cloned())
    }

    fn save_player(&mut self, player: &Player) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        Self::check(inner.fail_writes)?;
        inner
            .players
            .insert(player.username().to_string(), player.clone());
        inner.writes += 1;
        Ok(())
    }
}

impl LeaderboardStore for MemoryStore {
    fn load_leaderboard(&self) -> Result<BTreeMap<String, u32>, StoreError> {
        let inner = self.inner.borrow();
        Self::check(inner.fail_reads)?;
        Ok(inner.leaderboard.clone())
    }

    fn save_leaderboard(&mut self, scores: &BTreeMap<String, u32>) -> Result<(), StoreError> {
        let mut inner = self.inner.borrow_mut();
        Self::check(inner.fail_writes)?;
        inner.leaderboard = scores.clone();
        inner.writes += 1;
        Ok(())
    }
}
