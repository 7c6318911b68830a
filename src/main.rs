//! Terminal barista runner (default binary).
//!
//! The screen is a fixed 100×30 box redrawn on every step; the player types
//! whole lines. Logs go to `barista.log` next to the save files because stdout
//! is the game screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use log::{error, info};

use tui_barista::core::SimpleRng;
use tui_barista::engine::{App, Context, SystemClock};
use tui_barista::input::LineInput;
use tui_barista::store::JsonStore;
use tui_barista::term::{FrameView, TerminalRenderer};
use tui_barista::types::GameConfig;

const LOG_FILE: &str = "barista.log";

fn main() -> Result<()> {
    let config = GameConfig::default();
    init_logging(&config.data_dir);

    let view = FrameView::from_config(&config);
    let mut term = TerminalRenderer::new(view);
    term.enter()?;

    let result = run(config, term);

    // Always try to restore terminal state.
    let _ = TerminalRenderer::new(view).exit();
    if let Err(e) = &result {
        error!("session ended with error: {e:#}");
    }
    result
}

fn run(config: GameConfig, term: TerminalRenderer) -> Result<()> {
    let seed = seed_from_time();
    info!(
        "starting session (seed {seed}, data dir {})",
        config.data_dir.display()
    );

    let store = JsonStore::new(config.data_dir.clone());
    let ctx = Context {
        input: Box::new(LineInput::stdin()),
        display: Box::new(term),
        clock: Box::new(SystemClock::new()),
        rng: Box::new(SimpleRng::new(seed)),
        players: Box::new(store.clone()),
        leaderboard: Box::new(store),
        config,
    };

    App::new(ctx).run()
}

fn seed_from_time() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Send records to the log file; `RUST_LOG` overrides the default `info`.
/// If the file cannot be opened logging stays off rather than drawing over
/// the game screen.
fn init_logging(data_dir: &Path) {
    let path = data_dir.join(LOG_FILE);
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f) => f,
        Err(_) => return,
    };

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.target(env_logger::Target::Pipe(Box::new(file)));
    let _ = builder.try_init();
}
