//! TUI Barista (workspace facade crate).
//!
//! This package exposes `tui_barista::{types,core,term,input,engine,store}` as one public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_barista_core as core;
pub use tui_barista_engine as engine;
pub use tui_barista_input as input;
pub use tui_barista_store as store;
pub use tui_barista_term as term;
pub use tui_barista_types as types;
