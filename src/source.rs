//! Line source with a single line of lookahead.
//!
//! The header preprocessor and the main loop read from the same
//! [`LineSource`], so a line that was peeked at but not claimed by a header
//! action is the next line the main loop sees.

use std::io::{self, BufRead};

pub struct LineSource<R> {
    reader: R,
    peeked: Option<String>,
    line_no: usize,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            peeked: None,
            line_no: 0,
        }
    }

    fn fill(&mut self) -> io::Result<()> {
        if self.peeked.is_none() {
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? > 0 {
                self.peeked = Some(buf);
            }
        }
        Ok(())
    }

    /// The next unread line, terminator included, without consuming it.
    pub fn peek(&mut self) -> io::Result<Option<&str>> {
        self.fill()?;
        Ok(self.peeked.as_deref())
    }

    /// Consume and return the next line, terminator included.
    pub fn next_line(&mut self) -> io::Result<Option<String>> {
        self.fill()?;
        let line = self.peeked.take();
        if line.is_some() {
            self.line_no += 1;
        }
        Ok(line)
    }

    /// 1-based number of the most recently consumed line (0 before any).
    pub fn line_no(&self) -> usize {
        self.line_no
    }
}
