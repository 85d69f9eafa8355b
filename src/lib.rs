//! Lexer and parser for Brik, a small key/value configuration language.
//!
//! ```text
//! # comments run to the end of the line
//! title = "Tetris"
//! board = { width = 10 height = 20 }
//! pieces = [[0, 1], [1 1]]
//! ```
//!
//! Source text goes through [`lexer::tokenize`] and then [`parser::Parser`],
//! producing a [`Document`]. [`parse_str`] runs both stages.

pub mod ast;
pub mod error;
pub mod formatter;
pub mod json;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Document, Key, Pair, Scalar, ScalarKind, Value};
pub use error::{Error, LexError, ParseError, Result};
pub use formatter::Formatter;
pub use lexer::{tokenize, Lexer};
pub use parser::Parser;
pub use token::{Position, Token, TokenKind};

pub fn parse_str(source: &str) -> Result<Document> {
    let tokens = tokenize(source)?;
    let doc = Parser::new(tokens).parse()?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_str_errors() {
        let test = |input: &str, is_lex: bool| match parse_str(input) {
            Err(Error::Lex(_)) => assert!(is_lex),
            Err(Error::Parse(_)) => assert!(!is_lex),
            Ok(doc) => unreachable!("{:?}", doc),
        };
        test("a = @", true);
        test(r#"a = "open"#, true);
        test("a = ", false);
        test("a = [1, {}]", false);
    }

    #[test]
    fn test_error_message() {
        let e = parse_str("a = 1\nb 2").unwrap_err();
        assert_eq!(
            e.to_string(),
            "parse error: expected `=`, found `2` at line 2, column 3"
        );
        let e = parse_str("x = @").unwrap_err();
        assert_eq!(
            e.to_string(),
            "lex error: unexpected character `@` at line 1, column 5"
        );
    }
}
