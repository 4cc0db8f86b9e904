use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::{Token, TokenKind};

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    /// Classifies an `ERROR` token. Returns `None` for every other kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Error {
            return None;
        }

        let error_impl = if token.lexeme == ":" {
            ErrorImpl::MalformedAssignment
        } else {
            ErrorImpl::UnrecognisedCharacter {
                character: token.lexeme.clone(),
            }
        };

        Some(Error::new(error_impl, token.line))
    }

    pub fn get_line(&self) -> usize {
        self.line
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedAssignment => "MalformedAssignment",
            ErrorImpl::SourceRead { .. } => "SourceRead",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "Unrecognised character: `{}`",
                character
            )),
            ErrorImpl::MalformedAssignment => {
                ErrorTip::Suggestion(String::from("Expected `=` after `:`, did you mean `:=`?"))
            }
            ErrorImpl::SourceRead { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("malformed assignment: `:` not followed by `=`")]
    MalformedAssignment,
    #[error("error reading source: {message}")]
    SourceRead { message: String },
}
