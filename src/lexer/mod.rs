//! Lexical analysis module for the TINY scanner.
//!
//! This module turns TINY source text into a stream of tokens. It handles:
//!
//! - Line-buffered character input with one character of push-back
//! - The token-recognition state machine
//! - Reserved word resolution for identifiers
//! - `{ ... )` comments and whitespace skipping

pub mod dfa;
pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod property_tests;
