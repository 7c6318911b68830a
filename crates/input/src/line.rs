//! Line reader over any buffered stream.

use std::io::{self, BufRead};

use crate::core::InputSource;

/// Reads one line per call, stripping the trailing `\n` / `\r\n`.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD`, so a garbled
/// line reaches the caller as ordinary bad input. Only end of input and
/// read failures are errors.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl LineInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self) -> io::Result<String> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_reads_lines_without_terminators() {
        let mut input = LineInput::new(Cursor::new("tea, milk\r\n\nexit\n"));
        assert_eq!(input.read_line().unwrap(), "tea, milk");
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "exit");
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut input = LineInput::new(Cursor::new("3"));
        assert_eq!(input.read_line().unwrap(), "3");
    }

    #[test]
    fn test_invalid_utf8_line_is_not_fatal() {
        let mut input = LineInput::new(Cursor::new(&b"\xff\n8\n"[..]));
        assert_eq!(input.read_line().unwrap(), "\u{fffd}");
        assert_eq!(input.read_line().unwrap(), "8");
        assert_eq!(
            input.read_line().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut input = LineInput::new(Cursor::new(""));
        let err = input.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
