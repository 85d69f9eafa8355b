#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    StringLiteral,
    Number,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Equals,
}

impl TokenKind {
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::StringLiteral => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Equals => "EQUALS",
        }
    }

    /// Kinds that can stand alone as a scalar value.
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::Number
        )
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Location of a character in the source. `line` and `column` are 1-based,
/// `offset` is a byte index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(0, 1, 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

// (IDENTIFIER, "width")
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, \"{}\")", self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_token() {
        let test = |kind: TokenKind, text: &str, expected: &str| {
            let t = Token::new(kind, text, Position::default());
            assert_eq!(t.to_string(), String::from(expected));
        };
        test(TokenKind::Identifier, "width", r#"(IDENTIFIER, "width")"#);
        test(TokenKind::StringLiteral, "a b", r#"(STRING, "a b")"#);
        test(TokenKind::Number, "1.5", r#"(NUMBER, "1.5")"#);
        test(TokenKind::Equals, "=", r#"(EQUALS, "=")"#);
    }

    #[test]
    fn test_is_scalar() {
        assert!(TokenKind::Identifier.is_scalar());
        assert!(TokenKind::StringLiteral.is_scalar());
        assert!(TokenKind::Number.is_scalar());
        assert!(!TokenKind::LBrace.is_scalar());
        assert!(!TokenKind::Comma.is_scalar());
    }

    #[test]
    fn test_display_position() {
        assert_eq!(Position::new(7, 2, 3).to_string(), "line 2, column 3");
    }
}
