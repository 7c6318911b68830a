//! Mapping raw input lines to menu selections and commands.

use crate::types::{MenuChoice, ProfileChoice, EXIT_COMMAND};

/// Parse a 1-based numeric selection in `min..=max`.
///
/// Surrounding whitespace is ignored; anything else (non-numeric, out of
/// range) yields `None` so the caller can re-prompt.
pub fn parse_selection(line: &str, min: u8, max: u8) -> Option<u8> {
    let n: u8 = line.trim().parse().ok()?;
    (min..=max).contains(&n).then_some(n)
}

pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    parse_selection(line, 1, MenuChoice::ALL.len() as u8).and_then(MenuChoice::from_index)
}

pub fn parse_profile_choice(line: &str) -> Option<ProfileChoice> {
    parse_selection(line, 1, 2).and_then(ProfileChoice::from_index)
}

/// Whether the player typed the exit sentinel (case-insensitive).
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}
