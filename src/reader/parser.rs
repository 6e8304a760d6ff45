use serde_json::{Map, Number, Value};

use crate::reader::lexer::{Token, TokenKind};
use crate::reader::ParseError;

/// Deepest list/mapping nesting accepted, same limit as serde_json.
pub const MAX_DEPTH: usize = 128;

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses exactly one value followed by end of input.
    pub fn parse(&mut self) -> Result<Value, ParseError> {
        let value = self.value()?;
        let token = self.peek();
        if token.kind != TokenKind::Eof {
            return Err(self.error_at(token, "trailing input after value"));
        }
        Ok(value)
    }

    fn value(&mut self) -> Result<Value, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::LBracket | TokenKind::LBrace => self.nested(token),
            TokenKind::String(s) => Ok(Value::String(s)),
            TokenKind::Int(i) => Ok(Value::Number(i.into())),
            TokenKind::Float(f) => Ok(Number::from_f64(f).map_or(Value::Null, Value::Number)),
            TokenKind::Bool(b) => Ok(Value::Bool(b)),
            TokenKind::Null => Ok(Value::Null),
            TokenKind::Eof => Err(self.error_at(&token, "unexpected end of input")),
            _ => Err(self.error_at(&token, "expected a value")),
        }
    }

    fn nested(&mut self, open: Token) -> Result<Value, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_at(&open, "nesting too deep"));
        }

        self.depth += 1;
        let value = if open.kind == TokenKind::LBracket {
            self.list()
        } else {
            self.mapping()
        };
        self.depth -= 1;

        value
    }

    fn list(&mut self) -> Result<Value, ParseError> {
        let mut items = Vec::new();

        loop {
            if self.check(&TokenKind::RBracket) {
                self.advance();
                break;
            }

            items.push(self.value()?);

            // A comma may close out the list as well as separate items.
            if self.check(&TokenKind::Comma) {
                self.advance();
            } else if !self.check(&TokenKind::RBracket) {
                let token = self.peek();
                return Err(self.error_at(token, "expected ',' or ']'"));
            }
        }

        Ok(Value::Array(items))
    }

    fn mapping(&mut self) -> Result<Value, ParseError> {
        let mut map = Map::new();

        loop {
            if self.check(&TokenKind::RBrace) {
                self.advance();
                break;
            }

            let token = self.advance();
            let key = match token.kind {
                TokenKind::String(key) => key,
                _ => return Err(self.error_at(&token, "expected a string key")),
            };

            if !self.check(&TokenKind::Colon) {
                let token = self.peek();
                return Err(self.error_at(token, "expected ':' after key"));
            }
            self.advance();

            let value = self.value()?;
            map.insert(key, value);

            if self.check(&TokenKind::Comma) {
                self.advance();
            } else if !self.check(&TokenKind::RBrace) {
                let token = self.peek();
                return Err(self.error_at(token, "expected ',' or '}'"));
            }
        }

        Ok(Value::Object(map))
    }

    fn peek(&self) -> &Token {
        // The lexer always ends the stream with Eof and it is never consumed
        // past, so this index stays in bounds.
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if token.kind != TokenKind::Eof {
            self.current += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    fn error_at(&self, token: &Token, message: &str) -> ParseError {
        ParseError::new(message, token.line, token.column)
    }
}
