//! Listing output for the scanner.
//!
//! The listing is a side channel: echoed source lines and traced tokens are
//! written here, never mixed into the token stream. [`WriterListing`] writes
//! the classic TINY listing layout:
//!
//! ```text
//!    1: read x;
//!     1: reserved word: read
//!     1: ID, name= x
//!     1: ;
//! ```

use std::io::{self, Write};

use crate::lexer::tokens::Token;

/// Receives the scanner's observational output.
pub trait Listing {
    /// Called with each freshly read source line, newline included when present.
    fn echo_line(&mut self, line: usize, text: &str) -> io::Result<()>;

    /// Called with each finalized token.
    fn trace_token(&mut self, token: &Token) -> io::Result<()>;
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullListing;

impl Listing for NullListing {
    fn echo_line(&mut self, _line: usize, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn trace_token(&mut self, _token: &Token) -> io::Result<()> {
        Ok(())
    }
}

/// Writes the listing to any [`Write`] sink.
#[derive(Debug)]
pub struct WriterListing<W: Write> {
    out: W,
}

impl<W: Write> WriterListing<W> {
    pub fn new(out: W) -> Self {
        WriterListing { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a free-form line, used by drivers for banners.
    pub fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }
}

impl<W: Write> Listing for WriterListing<W> {
    fn echo_line(&mut self, line: usize, text: &str) -> io::Result<()> {
        write!(self.out, "{:4}: {}", line, text)?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn trace_token(&mut self, token: &Token) -> io::Result<()> {
        writeln!(self.out, "\t{}: {}", token.line, token)
    }
}
