//! Line-oriented input and output seams.
//!
//! Any `BufRead` is a [`LineSource`] and any `Write` is a [`LineSink`], so the
//! loop runs equally over stdin/stdout and in-memory buffers.

use std::io::{BufRead, Write};

/// Source of text lines.
pub trait LineSource {
    /// Next line with its terminator intact, or `None` at end-of-stream.
    fn next_line(&mut self) -> std::io::Result<Option<String>>;
}

/// Sink of text lines.
pub trait LineSink {
    /// Write `line` followed by a newline.
    fn write_line(&mut self, line: &str) -> std::io::Result<()>;
}

impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> std::io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Invalid UTF-8 is replaced rather than aborting the session.
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<W: Write> LineSink for W {
    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        self.write_all(line.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()
    }
}

/// Remove a single trailing line terminator (`\r\n`, `\n` or `\r`).
pub fn strip_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
