//! Property-based tests for the scanner.
//!
//! 1. **Scanner never panics** and always ends with exactly one `EndFile`
//! 2. **Digit runs** scan to a single `Num` with the run as lexeme
//! 3. **Letter runs** scan to `Id` or the matching reserved word
//! 4. **Lexemes are bounded** by the configured maximum
//! 5. **Line numbers never decrease** across the token stream
//! 6. **Line counter** equals the number of physical lines

use proptest::prelude::*;

use super::{
    lexer::{tokenize, Scanner},
    tokens::{TokenKind, MAX_TOKEN_LEN, RESERVED_LOOKUP},
};
use crate::config::ScanConfig;

const RESERVED_WORDS: &[&str] = &[
    "if", "then", "else", "end", "repeat", "until", "read", "write",
];

fn source_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..300)
}

fn tiny_like_source() -> impl Strategy<Value = String> {
    "[a-z0-9 :=<+*/();{}\n-]{0,200}"
}

proptest! {
    #[test]
    fn scanner_terminates_with_single_endfile(bytes in source_bytes()) {
        let tokens: Vec<_> = Scanner::new(bytes.as_slice(), ScanConfig::default()).collect();
        prop_assert!(!tokens.is_empty());
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndFile));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    #[test]
    fn digit_run_is_one_number(run in "[0-9]{1,40}") {
        let tokens = tokenize(&run);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(tokens[0].kind, TokenKind::Num);
        prop_assert_eq!(&tokens[0].lexeme, &run);
    }

    #[test]
    fn letter_run_is_identifier_or_keyword(run in "[a-zA-Z]{1,40}") {
        let tokens = tokenize(&run);
        prop_assert_eq!(tokens.len(), 2);
        prop_assert_eq!(&tokens[0].lexeme, &run);

        let expected = RESERVED_LOOKUP.get(run.as_str()).copied().unwrap_or(TokenKind::Id);
        prop_assert_eq!(tokens[0].kind, expected);
    }

    #[test]
    fn reserved_word_in_context(index in 0..RESERVED_WORDS.len(), pad in "[ \n]{1,3}") {
        let word = RESERVED_WORDS[index];
        let tokens = tokenize(&format!("{pad}{word}{pad};"));
        prop_assert!(tokens[0].kind.is_reserved());
        prop_assert_eq!(tokens[0].lexeme.as_str(), word);
        prop_assert_eq!(tokens[1].kind, TokenKind::Semi);
    }

    #[test]
    fn lexemes_are_bounded(bytes in source_bytes()) {
        for token in Scanner::new(bytes.as_slice(), ScanConfig::default()) {
            prop_assert!(token.lexeme.chars().count() <= MAX_TOKEN_LEN);
        }
    }

    #[test]
    fn lines_never_decrease(source in tiny_like_source()) {
        let tokens = tokenize(&source);
        for window in tokens.windows(2) {
            prop_assert!(window[0].line <= window[1].line);
        }
    }

    #[test]
    fn line_counter_matches_physical_lines(source in tiny_like_source(), capacity in 1usize..16) {
        let config = ScanConfig { buffer_capacity: capacity, ..ScanConfig::default() };
        let mut scanner = Scanner::new(source.as_bytes(), config);
        while !scanner.next_token().is_eof() {}

        let expected = source.split_inclusive('\n').count();
        prop_assert_eq!(scanner.line(), expected);
    }

    #[test]
    fn buffer_capacity_does_not_change_tokens(source in tiny_like_source(), capacity in 1usize..16) {
        let config = ScanConfig { buffer_capacity: capacity, ..ScanConfig::default() };
        let small: Vec<_> = Scanner::new(source.as_bytes(), config).collect();
        prop_assert_eq!(small, tokenize(&source));
    }
}
