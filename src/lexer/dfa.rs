//! State machine driving token recognition.
//!
//! The automaton is expressed as a pure function from the current state and
//! the class of the character just read to a [`Step`]. The scanner owns the
//! side effects (saving characters, pushing back) and only follows the
//! instructions a step carries.

use super::tokens::TokenKind;

/// Opens a comment. Everything up to [`COMMENT_CLOSE`] is discarded.
pub const COMMENT_OPEN: u8 = b'{';

/// Closes a comment. Deliberately not the mirror of [`COMMENT_OPEN`].
pub const COMMENT_CLOSE: u8 = b')';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    InAssign,
    InComment,
    InNumber,
    InIdentifier,
    Done(TokenKind),
}

/// Classification of a single input character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Letter,
    Whitespace,
    Colon,
    CommentOpen,
    Symbol(TokenKind),
    Other,
    Eof,
}

/// Classifies a character. `None` stands for end of input.
pub fn classify(c: Option<u8>) -> CharClass {
    let Some(c) = c else {
        return CharClass::Eof;
    };

    match c {
        b'0'..=b'9' => CharClass::Digit,
        b'a'..=b'z' | b'A'..=b'Z' => CharClass::Letter,
        b' ' | b'\t' | b'\n' => CharClass::Whitespace,
        b':' => CharClass::Colon,
        COMMENT_OPEN => CharClass::CommentOpen,
        _ => match TokenKind::from_symbol(c) {
            Some(kind) => CharClass::Symbol(kind),
            None => CharClass::Other,
        },
    }
}

/// Outcome of feeding one character to the automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub state: State,
    /// Append the character to the lexeme.
    pub save: bool,
    /// Return the character to the source so the next token starts with it.
    pub push_back: bool,
}

impl Step {
    fn save(state: State) -> Self {
        Step {
            state,
            save: true,
            push_back: false,
        }
    }

    fn skip(state: State) -> Self {
        Step {
            state,
            save: false,
            push_back: false,
        }
    }

    fn push_back(state: State) -> Self {
        Step {
            state,
            save: false,
            push_back: true,
        }
    }
}

/// The transition function of the scanner automaton.
///
/// `Done` never receives input in a correct scan; it is treated as a
/// terminal sink that reports an error without consuming anything useful.
pub fn transition(state: State, class: CharClass) -> Step {
    match state {
        State::Start => match class {
            CharClass::Digit => Step::save(State::InNumber),
            CharClass::Letter => Step::save(State::InIdentifier),
            CharClass::Colon => Step::save(State::InAssign),
            CharClass::Whitespace => Step::skip(State::Start),
            CharClass::CommentOpen => Step::skip(State::InComment),
            CharClass::Eof => Step::skip(State::Done(TokenKind::EndFile)),
            CharClass::Symbol(kind) => Step::save(State::Done(kind)),
            CharClass::Other => Step::save(State::Done(TokenKind::Error)),
        },
        State::InComment => match class {
            CharClass::Eof => Step::skip(State::Done(TokenKind::EndFile)),
            c if c == classify(Some(COMMENT_CLOSE)) => Step::skip(State::Start),
            _ => Step::skip(State::InComment),
        },
        State::InAssign => match class {
            CharClass::Symbol(TokenKind::Eq) => Step::save(State::Done(TokenKind::Assign)),
            _ => Step::push_back(State::Done(TokenKind::Error)),
        },
        State::InNumber => match class {
            CharClass::Digit => Step::save(State::InNumber),
            _ => Step::push_back(State::Done(TokenKind::Num)),
        },
        State::InIdentifier => match class {
            CharClass::Letter => Step::save(State::InIdentifier),
            _ => Step::push_back(State::Done(TokenKind::Id)),
        },
        State::Done(_) => Step::skip(State::Done(TokenKind::Error)),
    }
}
