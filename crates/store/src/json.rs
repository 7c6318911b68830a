//! JSON files on disk.
//!
//! Players live in one file as a `username → Player` map, the leaderboard in
//! another as a `username → score` map. Every write goes to a temporary sibling
//! that is fsynced and renamed over the target, so a crash mid-write leaves the
//! previous file intact.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::debug;
use serde::de::DeserializeOwned;

use crate::core::{LeaderboardStore, Player, PlayerStore, StoreError};

pub const PLAYERS_FILE: &str = "barista_players.json";
pub const LEADERBOARD_FILE: &str = "barista_leaderboard.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn players_path(&self) -> PathBuf {
        self.dir.join(PLAYERS_FILE)
    }

    pub fn leaderboard_path(&self) -> PathBuf {
        self.dir.join(LEADERBOARD_FILE)
    }

    fn load_players(&self) -> Result<BTreeMap<String, Player>, StoreError> {
        Ok(read_json(&self.players_path())?.unwrap_or_default())
    }
}

impl PlayerStore for JsonStore {
    fn load_player(&self, username: &str) -> Result<Option<Player>, StoreError> {
        let path = self.players_path();
        let mut players = self.load_players()?;
        let player = players.remove(username);
        if let Some(p) = &player {
            if p.username() != username {
                return Err(StoreError::Corrupt {
                    path,
                    reason: format!("record under {username:?} belongs to {:?}", p.username()),
                });
            }
        }
        Ok(player)
    }

    fn save_player(&mut self, player: &Player) -> Result<(), StoreError> {
        // Read-modify-write; a corrupt file fails here and is left untouched.
        let mut players = self.load_players()?;
        players.insert(player.username().to_string(), player.clone());
        let content = serde_json::to_string_pretty(&players)?;
        write_atomic(&self.players_path(), &content)?;
        debug!("saved player {:?}", player.username());
        Ok(())
    }
}

impl LeaderboardStore for JsonStore {
    fn load_leaderboard(&self) -> Result<BTreeMap<String, u32>, StoreError> {
        Ok(read_json(&self.leaderboard_path())?.unwrap_or_default())
    }

    fn save_leaderboard(&mut self, scores: &BTreeMap<String, u32>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(scores)?;
        write_atomic(&self.leaderboard_path(), &content)?;
        debug!("saved leaderboard ({} entries)", scores.len());
        Ok(())
    }
}

/// Read and parse `path`; a missing file is `Ok(None)`.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(serde_json::from_str(&content)?))
}

/// Replace `path` with `content` via a temporary sibling and a rename.
fn write_atomic(path: &Path, content: &str) -> Result<(), StoreError> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let base = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("data.json");
    let mut counter = 0u32;
    let tmp_path = loop {
        let candidate = dir.join(format!(".{}.tmp-{}-{}", base, std::process::id(), counter));
        match OpenOptions::new().write(true).create_new(true).open(&candidate) {
            Ok(mut tmp) => {
                fill_or_discard(&mut tmp, &candidate, content)?;
                let _ = tmp.sync_all();
                break candidate;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                counter = counter.saturating_add(1);
            }
            Err(e) => return Err(e.into()),
        }
    };

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }

    // Persist the rename (best-effort).
    if let Ok(dir_file) = File::open(dir) {
        let _ = dir_file.sync_all();
    }
    Ok(())
}

/// Write `content` to the freshly created temp file at `tmp_path`, removing
/// the file if the write fails.
fn fill_or_discard<W: Write>(tmp: &mut W, tmp_path: &Path, content: &str) -> io::Result<()> {
    let written = tmp
        .write_all(content.as_bytes())
        .and_then(|()| tmp.flush());
    if written.is_err() {
        let _ = fs::remove_file(tmp_path);
    }
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(
                io::ErrorKind::Other,
                "no space left on device",
            ))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn failed_temp_write_removes_the_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let tmp_path = tmp.path().join(".barista_players.json.tmp-1-0");
        fs::write(&tmp_path, "").unwrap();

        assert!(fill_or_discard(&mut FullDisk, &tmp_path, "{}").is_err());
        assert!(!tmp_path.exists());
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn successful_write_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());
        store.save_player(&Player::new("mina")).unwrap();

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![PLAYERS_FILE.to_string()]);
    }

    #[test]
    fn missing_files_read_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonStore::new(tmp.path());
        assert_eq!(store.load_player("nobody").unwrap(), None);
        assert!(store.load_leaderboard().unwrap().is_empty());
    }

    #[test]
    fn player_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());

        let mut p = Player::new("mina");
        p.add_score(450);
        p.increment_days_played();
        store.save_player(&p).unwrap();

        assert_eq!(store.load_player("mina").unwrap(), Some(p));
        assert_eq!(store.load_player("other").unwrap(), None);
    }

    #[test]
    fn saving_one_player_keeps_the_others() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());

        let a = Player::new("a");
        let mut b = Player::new("b");
        store.save_player(&a).unwrap();
        store.save_player(&b).unwrap();
        b.add_score(100);
        store.save_player(&b).unwrap();

        assert_eq!(store.load_player("a").unwrap(), Some(a));
        assert_eq!(store.load_player("b").unwrap(), Some(b));
    }

    #[test]
    fn leaderboard_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());

        let mut scores = BTreeMap::new();
        scores.insert("alice".to_string(), 900);
        scores.insert("bob".to_string(), 300);
        store.save_leaderboard(&scores).unwrap();
        assert_eq!(store.load_leaderboard().unwrap(), scores);
    }

    #[test]
    fn corrupt_player_file_is_not_overwritten() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());
        fs::write(store.players_path(), "{not json").unwrap();

        assert!(matches!(
            store.load_player("mina"),
            Err(StoreError::Serde(_))
        ));
        assert!(store.save_player(&Player::new("mina")).is_err());
        let content = fs::read_to_string(store.players_path()).unwrap();
        assert_eq!(content, "{not json");
    }

    #[test]
    fn no_temp_files_left_behind() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path());
        store.save_player(&Player::new("mina")).unwrap();
        store.save_leaderboard(&BTreeMap::new()).unwrap();

        let names: Vec<String> = fs::read_dir(tmp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names.len(), 2, "{names:?}");
        assert!(names.iter().all(|n| !n.contains(".tmp-")));
    }

    #[test]
    fn creates_missing_data_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = JsonStore::new(tmp.path().join("nested").join("data"));
        store.save_player(&Player::new("mina")).unwrap();
        assert!(store.players_path().exists());
    }
}
