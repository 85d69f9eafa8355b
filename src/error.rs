use crate::token::{Position, Token};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character `{ch}` at {position}")]
    UnexpectedCharacter { ch: char, position: Position },
    /// `position` points at the opening quote.
    #[error("unterminated string starting at {position}")]
    UnterminatedString { position: Position },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("expected identifier, found `{}` at {}", .found.text, .found.position)]
    ExpectedIdentifier { found: Token },
    #[error("expected `=`, found `{}` at {}", .found.text, .found.position)]
    ExpectedEquals { found: Token },
    #[error("expected value, found `{}` at {}", .found.text, .found.position)]
    ExpectedValue { found: Token },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEndOfInput { expected: &'static str },
    /// `found` is the bracket or brace that opened one level too many.
    #[error("nesting deeper than {limit} levels at {}", .found.position)]
    NestingTooDeep { limit: usize, found: Token },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
