use std::io::{self, BufRead};

use tracing::{trace, warn};

use crate::{
    config::ScanConfig,
    listing::{Listing, NullListing},
    MK_TOKEN,
};

use super::{
    dfa::{classify, transition, State},
    source::CharacterSource,
    tokens::{reserved_lookup, Token, TokenKind},
};

/// Scanner for TINY source text.
///
/// Each call to [`Scanner::next_token`] runs the automaton from its start
/// state until it accepts, and returns exactly one token. Scanning never
/// fails: characters that cannot start a token come back as
/// [`TokenKind::Error`] tokens and the next call carries on after them.
pub struct Scanner<R: BufRead, L: Listing = NullListing> {
    source: CharacterSource<R>,
    listing: L,
    config: ScanConfig,
    finished: bool,
}

impl<R: BufRead> Scanner<R, NullListing> {
    pub fn new(reader: R, config: ScanConfig) -> Self {
        Scanner::with_listing(reader, config, NullListing)
    }
}

impl<R: BufRead, L: Listing> Scanner<R, L> {
    pub fn with_listing(reader: R, config: ScanConfig, listing: L) -> Self {
        Scanner {
            source: CharacterSource::new(reader, config.buffer_capacity),
            listing,
            config,
            finished: false,
        }
    }

    /// Number of physical source lines read so far.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn listing(&self) -> &L {
        &self.listing
    }

    pub fn into_listing(self) -> L {
        self.listing
    }

    /// The read error that cut the input short, if one occurred.
    pub fn take_read_error(&mut self) -> Option<io::Error> {
        self.source.take_read_error()
    }

    /// Scans and returns the next token.
    ///
    /// Once the input is exhausted every call returns an `EndFile` token.
    pub fn next_token(&mut self) -> Token {
        let mut lexeme = String::new();
        let mut saved = 0;
        let mut state = State::Start;
        let mut start_line = self.source.line();

        let kind = loop {
            let c = self.read_char();
            let step = transition(state, classify(c));

            if c.is_none() || (state == State::Start && step.state != State::Start) {
                start_line = self.source.line();
            }

            if step.push_back {
                self.source.push_back();
            }

            if step.save && saved < self.config.max_token_len.max(1) {
                if let Some(c) = c {
                    lexeme.push(c as char);
                    saved += 1;
                }
            }

            state = step.state;
            if let State::Done(kind) = state {
                break kind;
            }
        };

        let kind = match kind {
            TokenKind::Id => reserved_lookup(&lexeme),
            kind => kind,
        };

        let token = MK_TOKEN!(kind, lexeme, start_line);
        self.emit(&token);
        token
    }

    fn read_char(&mut self) -> Option<u8> {
        let c = self.source.next_char();

        if self.config.echo_source {
            if let Some((line, text)) = self.source.take_refilled() {
                let text = String::from_utf8_lossy(text);
                if let Err(err) = self.listing.echo_line(line, &text) {
                    warn!(line, error = %err, "failed to echo source line");
                }
            }
        }

        c
    }

    fn emit(&mut self, token: &Token) {
        trace!(
            kind = %token.kind,
            lexeme = %token.lexeme,
            line = token.line,
            "scanned token"
        );

        if self.config.trace_scan {
            if let Err(err) = self.listing.trace_token(token) {
                warn!(line = token.line, error = %err, "failed to trace token");
            }
        }
    }
}

/// Yields tokens up to and including the first `EndFile`.
impl<R: BufRead, L: Listing> Iterator for Scanner<R, L> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scans a whole string with the default configuration.
///
/// The returned tokens always end with a single `EndFile` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source.as_bytes(), ScanConfig::default()).collect()
}
