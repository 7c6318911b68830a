//! TerminalRenderer: flushes rendered frames to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print the rows. The
//! terminal stays in cooked mode so the player can type whole lines; the
//! cursor is left after the input cue when the frame has a prompt.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{cursor, style::Print, terminal, QueueableCommand};
use log::warn;

use crate::core::DisplaySink;
use crate::types::Frame;
use crate::view::FrameView;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    view: FrameView,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new(view: FrameView) -> Self {
        Self::with_writer(io::stdout(), view)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, view: FrameView) -> Self {
        Self {
            out,
            view,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()
    }

    /// Render and write one frame.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        let rows = self.view.render(frame);
        self.buf.clear();
        encode_rows_into(&rows, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> DisplaySink for TerminalRenderer<W> {
    fn present(&mut self, frame: &Frame) {
        if let Err(e) = self.draw(frame) {
            warn!("failed to draw frame: {e:#}");
        }
    }
}

/// Encode a full-screen redraw of `rows` into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Identical rows always encode to identical bytes.
pub fn encode_rows_into(rows: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for (i, row) in rows.iter().enumerate() {
        out.queue(Print(row))?;
        if i + 1 < rows.len() {
            out.queue(Print("\r\n"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        Frame::new(["ORDER: Milk Tea", "RECIPE: Tea, Milk"])
            .with_prompt("Type ingredients (comma separated):")
    }

    #[test]
    fn drawing_twice_is_byte_identical() {
        let frame = sample_frame();
        let mut a = TerminalRenderer::with_writer(Vec::new(), FrameView::new(40, 10));
        let mut b = TerminalRenderer::with_writer(Vec::new(), FrameView::new(40, 10));
        a.draw(&frame).unwrap();
        b.draw(&frame).unwrap();
        b.draw(&frame).unwrap();

        let once = a.writer().clone();
        let twice = b.writer().clone();
        assert_eq!(twice.len(), once.len() * 2);
        assert_eq!(&twice[..once.len()], &once[..]);
        assert_eq!(&twice[once.len()..], &once[..]);
    }

    #[test]
    fn output_ends_with_input_cue() {
        let mut r = TerminalRenderer::with_writer(Vec::new(), FrameView::new(40, 10));
        r.present(&sample_frame());
        let text = String::from_utf8_lossy(r.writer()).into_owned();
        assert!(text.contains("ORDER: Milk Tea"));
        assert!(text.contains("Type ingredients (comma separated):\r\n> "));
        assert!(text.ends_with("> "));
    }

    #[test]
    fn rows_are_separated_by_crlf() {
        let mut out = Vec::new();
        encode_rows_into(&["a".to_string(), "b".to_string()], &mut out).unwrap();
        let text = String::from_utf8_lossy(&out).into_owned();
        assert!(text.ends_with("a\r\nb"));
    }
}
