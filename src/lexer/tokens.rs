use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Longest lexeme the scanner keeps, counted in characters; extra characters
/// are consumed but dropped. Each input byte becomes one `char`, so a lexeme
/// holding non-ASCII bytes can be longer than this in UTF-8 bytes.
pub const MAX_TOKEN_LEN: usize = 40;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("end", TokenKind::End);
        map.insert("repeat", TokenKind::Repeat);
        map.insert("until", TokenKind::Until);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map
    };
}

/// Resolves an identifier lexeme against the reserved words.
///
/// Matching is exact and case-sensitive, so `If` stays an identifier.
pub fn reserved_lookup(lexeme: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(lexeme)
        .copied()
        .unwrap_or(TokenKind::Id)
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EndFile,
    Error,

    // Multi-character
    Id,
    Num,

    // Reserved
    If,
    Then,
    Else,
    End,
    Repeat,
    Until,
    Read,
    Write,

    Assign, // :=
    Eq,     // =
    Lt,     // <
    Plus,
    Minus,
    Times,
    Over, // /
    LParen,
    RParen,
    Semi,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::End
                | TokenKind::Repeat
                | TokenKind::Until
                | TokenKind::Read
                | TokenKind::Write
        )
    }

    /// Maps a single-character operator or punctuation symbol to its kind.
    pub fn from_symbol(c: u8) -> Option<TokenKind> {
        match c {
            b'=' => Some(TokenKind::Eq),
            b'<' => Some(TokenKind::Lt),
            b'+' => Some(TokenKind::Plus),
            b'-' => Some(TokenKind::Minus),
            b'*' => Some(TokenKind::Times),
            b'/' => Some(TokenKind::Over),
            b'(' => Some(TokenKind::LParen),
            b')' => Some(TokenKind::RParen),
            b';' => Some(TokenKind::Semi),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EndFile => "ENDFILE",
            TokenKind::Error => "ERROR",
            TokenKind::Id => "ID",
            TokenKind::Num => "NUM",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::End => "END",
            TokenKind::Repeat => "REPEAT",
            TokenKind::Until => "UNTIL",
            TokenKind::Read => "READ",
            TokenKind::Write => "WRITE",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eq => "EQ",
            TokenKind::Lt => "LT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Over => "OVER",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semi => "SEMI",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

/// Renders the token the way the scanner trace prints it.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::If
            | TokenKind::Then
            | TokenKind::Else
            | TokenKind::End
            | TokenKind::Repeat
            | TokenKind::Until
            | TokenKind::Read
            | TokenKind::Write => write!(f, "reserved word: {}", self.lexeme),
            TokenKind::Assign => write!(f, ":="),
            TokenKind::Lt => write!(f, "<"),
            TokenKind::Eq => write!(f, "="),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Semi => write!(f, ";"),
            TokenKind::Plus => write!(f, "+"),
            TokenKind::Minus => write!(f, "-"),
            TokenKind::Times => write!(f, "*"),
            TokenKind::Over => write!(f, "/"),
            TokenKind::EndFile => write!(f, "EOF"),
            TokenKind::Num => write!(f, "NUM, val= {}", self.lexeme),
            TokenKind::Id => write!(f, "ID, name= {}", self.lexeme),
            TokenKind::Error => write!(f, "ERROR: {}", self.lexeme),
        }
    }
}

impl Token {
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndFile
    }
}
