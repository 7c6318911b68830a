//! Terminal input module (engine-facing).
//!
//! The shop is played by typing whole lines, so input is a plain buffered line
//! reader rather than key events. This module provides the reader
//! ([`LineInput`], an [`core::InputSource`]) and the mapping from raw lines to
//! menu selections and the exit sentinel.

pub mod line;
pub mod map;

pub use tui_barista_core as core;
pub use tui_barista_types as types;

pub use line::LineInput;
pub use map::{is_exit_command, parse_menu_choice, parse_profile_choice, parse_selection};
