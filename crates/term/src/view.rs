//! FrameView: lays a [`Frame`] out as rows of text inside a bordered box.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::layout::{center_pad, text_width, wrap};
use crate::types::{Frame, GameConfig, FRAME_HEIGHT, FRAME_WIDTH, INPUT_CUE};

const TOP_LEFT: char = '╔';
const TOP_RIGHT: char = '╗';
const BOTTOM_LEFT: char = '╚';
const BOTTOM_RIGHT: char = '╝';
const HORIZONTAL: char = '═';
const VERTICAL: char = '║';

/// Fixed-size frame layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameView {
    /// Total width in columns, border included.
    width: usize,
    /// Nominal height in rows, border included.
    height: usize,
}

impl Default for FrameView {
    fn default() -> Self {
        Self {
            width: FRAME_WIDTH,
            height: FRAME_HEIGHT,
        }
    }
}

impl FrameView {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.frame_width, config.frame_height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn inner_width(&self) -> usize {
        self.width.saturating_sub(2)
    }

    fn wrap_width(&self) -> usize {
        self.width.saturating_sub(4)
    }

    /// Replace every line wider than `width - 4` with its wrapped segments.
    pub fn layout_lines(&self, lines: &[String]) -> Vec<String> {
        let max = self.wrap_width();
        let mut out = Vec::with_capacity(lines.len());
        for line in lines {
            if text_width(line) > max {
                let wrapped = wrap(line, max);
                if wrapped.is_empty() {
                    // All whitespace: keep its row.
                    out.push(String::new());
                } else {
                    out.extend(wrapped);
                }
            } else {
                out.push(line.clone());
            }
        }
        out
    }

    /// Render a frame into rows.
    ///
    /// Rows are: top border, top padding, centered content, bottom padding,
    /// bottom border, then the prompt and the input cue when a prompt is set.
    /// Content taller than `height - 2` gets no padding and the box grows.
    pub fn render(&self, frame: &Frame) -> Vec<String> {
        let content = self.layout_lines(frame.lines());
        let content_area = self.height.saturating_sub(2);
        let vertical_pad = content_area.saturating_sub(content.len());
        let pad_top = vertical_pad / 2;
        let pad_bottom = vertical_pad - pad_top;

        let mut rows = Vec::with_capacity(content.len() + vertical_pad + 4);
        rows.push(self.border_row(TOP_LEFT, TOP_RIGHT));
        rows.extend((0..pad_top).map(|_| self.blank_row()));
        rows.extend(content.iter().map(|line| self.content_row(line)));
        rows.extend((0..pad_bottom).map(|_| self.blank_row()));
        rows.push(self.border_row(BOTTOM_LEFT, BOTTOM_RIGHT));

        if let Some(prompt) = frame.prompt() {
            rows.push(prompt.to_string());
            rows.push(INPUT_CUE.to_string());
        }
        rows
    }

    fn border_row(&self, left: char, right: char) -> String {
        let mut row = String::with_capacity(self.width * 3);
        row.push(left);
        row.extend(std::iter::repeat(HORIZONTAL).take(self.inner_width()));
        row.push(right);
        row
    }

    fn blank_row(&self) -> String {
        self.content_row("")
    }

    fn content_row(&self, line: &str) -> String {
        let (left, right) = center_pad(line, self.inner_width());
        let mut row = String::with_capacity(self.width * 3);
        row.push(VERTICAL);
        row.extend(std::iter::repeat(' ').take(left));
        row.push_str(line);
        row.extend(std::iter::repeat(' ').take(right));
        row.push(VERTICAL);
        row
    }
}
