//! Terminal rendering module.
//!
//! Screens are fixed-width bordered boxes of centered text. The pipeline has a
//! pure half and an I/O half:
//!
//! - [`layout`]: word wrap and centering arithmetic
//! - [`view`]: turns a [`types::Frame`] into rows of text (pure, testable)
//! - [`renderer`]: writes those rows to a terminal through crossterm and
//!   implements [`core::DisplaySink`]
//!
//! ```
//! use tui_barista_term::{FrameView, wrap};
//! use tui_barista_types::Frame;
//!
//! assert_eq!(wrap("a b c d", 3), vec!["a b", "c d"]);
//!
//! let rows = FrameView::new(12, 5).render(&Frame::new(["hello"]));
//! assert_eq!(rows[0], "╔══════════╗");
//! assert_eq!(rows[2], "║  hello   ║");
//! ```

pub mod layout;
pub mod renderer;
pub mod view;

pub use tui_barista_core as core;
pub use tui_barista_types as types;

pub use layout::{center_pad, text_width, wrap};
pub use renderer::{encode_rows_into, TerminalRenderer};
pub use view::FrameView;
