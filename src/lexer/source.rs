//! Line-buffered character source feeding the scanner.
//!
//! Characters are handed out one at a time from a buffer holding the current
//! physical line. The buffer is refilled from the reader whenever it has been
//! consumed. A line longer than the buffer capacity is delivered across
//! several refills; only the first one counts as a new line.

use std::io::{self, BufRead, ErrorKind};

use tracing::{debug, warn};

/// Default number of characters a single refill may hold, newline included.
pub const DEFAULT_BUFFER_CAPACITY: usize = 255;

pub struct CharacterSource<R: BufRead> {
    reader: R,
    /// Current physical line (or segment of one).
    text: Vec<u8>,
    /// Read position within `text`.
    cursor: usize,
    capacity: usize,
    exhausted: bool,
    /// Number of physical lines read so far.
    line: usize,
    /// Whether the last segment read finished its physical line.
    at_line_start: bool,
    /// Set on every refill, cleared by `take_refilled`.
    refilled: bool,
    read_error: Option<io::Error>,
}

impl<R: BufRead> CharacterSource<R> {
    pub fn new(reader: R, capacity: usize) -> Self {
        CharacterSource {
            reader,
            text: Vec::with_capacity(capacity.max(1)),
            cursor: 0,
            capacity: capacity.max(1),
            exhausted: false,
            line: 0,
            at_line_start: true,
            refilled: false,
            read_error: None,
        }
    }

    /// Returns the next character, or `None` once the reader is exhausted.
    pub fn next_char(&mut self) -> Option<u8> {
        if self.cursor >= self.text.len() {
            if self.exhausted || !self.refill() {
                return None;
            }
        }

        let c = self.text[self.cursor];
        self.cursor += 1;
        Some(c)
    }

    /// Steps back over the character last returned by `next_char`.
    ///
    /// Only one character of push-back is supported between reads.
    pub fn push_back(&mut self) {
        if !self.exhausted && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Yields the segment read by the most recent refill, once.
    pub fn take_refilled(&mut self) -> Option<(usize, &[u8])> {
        if !self.refilled {
            return None;
        }
        self.refilled = false;
        Some((self.line, self.text.as_slice()))
    }

    /// Hands out the read error that ended the input early, if any.
    pub fn take_read_error(&mut self) -> Option<io::Error> {
        self.read_error.take()
    }

    fn refill(&mut self) -> bool {
        match self.read_segment() {
            Ok(0) => {
                self.exhausted = true;
                false
            }
            Ok(len) => {
                if self.at_line_start {
                    self.line += 1;
                }
                self.at_line_start = self.text.last() == Some(&b'\n');
                self.cursor = 0;
                self.refilled = true;
                debug!(line = self.line, len, "refilled line buffer");
                true
            }
            Err(err) => {
                warn!(line = self.line, error = %err, "source read failed, treating as end of input");
                self.read_error = Some(err);
                self.text.clear();
                self.cursor = 0;
                self.exhausted = true;
                false
            }
        }
    }

    /// Reads up to `capacity` bytes, stopping after the first newline.
    fn read_segment(&mut self) -> io::Result<usize> {
        self.text.clear();

        while self.text.len() < self.capacity {
            let available = match self.reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            };
            if available.is_empty() {
                break;
            }

            let room = self.capacity - self.text.len();
            let window = &available[..available.len().min(room)];
            let (take, line_done) = match window.iter().position(|&b| b == b'\n') {
                Some(index) => (index + 1, true),
                None => (window.len(), false),
            };

            self.text.extend_from_slice(&window[..take]);
            self.reader.consume(take);

            if line_done {
                break;
            }
        }

        Ok(self.text.len())
    }
}
