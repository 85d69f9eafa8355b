use crate::ast::{insert_pair, Document, Key, Pair, Scalar, ScalarKind, Value};
use crate::error::ParseError;
use crate::token::{Token, TokenKind};

type Result<T> = std::result::Result<T, ParseError>;

/// Maximum number of nested blocks and lists. Each level is a stack frame.
pub const MAX_DEPTH: usize = 256;

pub struct Parser {
    pos: usize,
    depth: usize,
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            pos: 0,
            depth: 0,
            tokens,
        }
    }
    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
    fn peek(&self, expected: &'static str) -> Result<&Token> {
        self.tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEndOfInput { expected })
    }
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.tokens.get(self.pos).map_or(false, |t| t.kind == kind)
    }
    fn consume(&mut self, expected: &'static str) -> Result<Token> {
        let token = self.peek(expected)?.clone();
        self.pos += 1;
        Ok(token)
    }
    fn open(&mut self, expected: &'static str) -> Result<()> {
        let token = self.consume(expected)?;
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_DEPTH,
                found: token,
            });
        }
        self.depth += 1;
        Ok(())
    }
    fn close(&mut self, expected: &'static str) -> Result<()> {
        self.consume(expected)?;
        self.depth -= 1;
        Ok(())
    }
    fn parse_key(&mut self) -> Result<Key> {
        let token = self.consume("identifier")?;
        if token.kind != TokenKind::Identifier {
            return Err(ParseError::ExpectedIdentifier { found: token });
        }
        Ok(Key(token.text))
    }
    fn parse_assignment(&mut self) -> Result<Pair> {
        let key = self.parse_key()?;
        let eq = self.consume("`=`")?;
        if eq.kind != TokenKind::Equals {
            return Err(ParseError::ExpectedEquals { found: eq });
        }
        let value = self.parse_value()?;
        Ok(Pair::new(key, value))
    }
    fn parse_scalar(&mut self) -> Result<Value> {
        let token = self.consume("value")?;
        let kind = match token.kind {
            TokenKind::Identifier => ScalarKind::Identifier,
            TokenKind::StringLiteral => ScalarKind::String,
            TokenKind::Number => ScalarKind::Number,
            _ => return Err(ParseError::ExpectedValue { found: token }),
        };
        Ok(Value::Scalar(Scalar::new(token.text, kind)))
    }
    fn parse_value(&mut self) -> Result<Value> {
        let kind = self.peek("value")?.kind;
        match kind {
            TokenKind::LBrace => self.parse_block(),
            TokenKind::LBracket => self.parse_list(),
            _ => self.parse_scalar(),
        }
    }
    fn parse_block(&mut self) -> Result<Value> {
        self.open("`{`")?;
        let mut pairs = vec![];
        while self.peek("`}`")?.kind != TokenKind::RBrace {
            let pair = self.parse_assignment()?;
            if insert_pair(&mut pairs, pair).is_some() {
                tracing::debug!("duplicate key in block, keeping last value");
            }
        }
        self.close("`}`")?;
        Ok(Value::Block(pairs))
    }
    // commas between items are optional: `[a b]` reads as `[a, b]`
    fn parse_list(&mut self) -> Result<Value> {
        self.open("`[`")?;
        let mut values = vec![];
        while self.peek("`]`")?.kind != TokenKind::RBracket {
            let kind = self.peek("value")?.kind;
            let value = match kind {
                TokenKind::LBracket => self.parse_list()?,
                _ => self.parse_scalar()?,
            };
            values.push(value);
            if self.peek_is(TokenKind::Comma) {
                self.pos += 1;
            }
        }
        self.close("`]`")?;
        Ok(Value::List(values))
    }
    pub fn parse(mut self) -> Result<Document> {
        let mut doc = Document::new();
        while !self.at_end() {
            let Pair { key, value } = self.parse_assignment()?;
            if doc.insert(key, value).is_some() {
                tracing::debug!("duplicate top-level key, keeping last value");
            }
        }
        tracing::debug!(entries = doc.len(), "parsed document");
        Ok(doc)
    }
}
