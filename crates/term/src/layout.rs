//! Text layout: greedy word wrap and horizontal centering.
//!
//! Widths are measured in `char`s. Nothing here truncates: a word longer than
//! the wrap width gets a line of its own, and a line wider than the frame
//! interior gets zero padding and overflows the border.

/// Display width of `s` in columns.
#[inline]
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Greedily pack whitespace-separated words into lines of at most `max_width`.
///
/// Words are joined by single spaces. A word longer than `max_width` is placed
/// alone on its own line. Blank input yields no lines.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = text_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left and right padding that centers `line` in `inner_width` columns.
///
/// Odd leftovers go to the right. Both are 0 when the line does not fit.
pub fn center_pad(line: &str, inner_width: usize) -> (usize, usize) {
    let len = text_width(line);
    if len > inner_width {
        return (0, 0);
    }
    let left = (inner_width - len) / 2;
    (left, inner_width - len - left)
}
