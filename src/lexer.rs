use crate::error::LexError;
use crate::token::{Position, Token, TokenKind};

pub struct Lexer<'a> {
    source: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }
    fn get_cur_char(&self) -> Option<char> {
        self.chars.get(self.pos).map(|&(_, ch)| ch)
    }
    fn position(&self) -> Position {
        let offset = self
            .chars
            .get(self.pos)
            .map_or(self.source.len(), |&(offset, _)| offset);
        Position::new(offset, self.line, self.column)
    }
    // advance one character, no-op at end of input
    fn succ(&mut self) {
        if let Some(ch) = self.get_cur_char() {
            self.pos += 1;
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
    fn skip_while<F>(&mut self, pred: F)
    where
        F: Fn(char) -> bool,
    {
        while self.get_cur_char().map_or(false, &pred) {
            self.succ();
        }
    }
    fn skip_comment(&mut self) {
        self.skip_while(|ch| ch != '\n');
        self.succ(); // line terminator
    }
    fn scan_while<F>(&mut self, kind: TokenKind, pred: F) -> Token
    where
        F: Fn(char) -> bool,
    {
        let start = self.position();
        self.succ();
        self.skip_while(pred);
        let end = self.position().offset;
        Token::new(kind, &self.source[start.offset..end], start)
    }
    fn scan_string(&mut self) -> Result<Token, LexError> {
        let start = self.position();
        self.succ(); // left quote
        let body = self.position().offset;
        self.skip_while(|ch| ch != '"');
        if self.get_cur_char().is_none() {
            return Err(LexError::UnterminatedString { position: start });
        }
        let end = self.position().offset;
        self.succ(); // right quote
        Ok(Token::new(
            TokenKind::StringLiteral,
            &self.source[body..end],
            start,
        ))
    }
    fn scan_punct(&mut self, kind: TokenKind, ch: char) -> Token {
        let t = Token::new(kind, ch.to_string(), self.position());
        self.succ();
        t
    }
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = vec![];
        while let Some(ch) = self.get_cur_char() {
            let token = match ch {
                // C `isspace` set, vertical tab included
                ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C' => {
                    self.succ();
                    continue;
                }
                '#' => {
                    self.skip_comment();
                    continue;
                }
                '"' => self.scan_string()?,
                _ if ch.is_ascii_alphabetic() || ch == '_' => {
                    self.scan_while(TokenKind::Identifier, |c| {
                        c.is_ascii_alphanumeric() || c == '_'
                    })
                }
                _ if ch.is_ascii_digit() => {
                    self.scan_while(TokenKind::Number, |c| c.is_ascii_digit() || c == '.')
                }
                '{' => self.scan_punct(TokenKind::LBrace, ch),
                '}' => self.scan_punct(TokenKind::RBrace, ch),
                '[' => self.scan_punct(TokenKind::LBracket, ch),
                ']' => self.scan_punct(TokenKind::RBracket, ch),
                '=' => self.scan_punct(TokenKind::Equals, ch),
                ',' => self.scan_punct(TokenKind::Comma, ch),
                other => {
                    return Err(LexError::UnexpectedCharacter {
                        ch: other,
                        position: self.position(),
                    })
                }
            };
            tokens.push(token);
        }
        tracing::debug!(count = tokens.len(), "tokenized source");
        Ok(tokens)
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
