//! Tokenizer for dump text.

use crate::reader::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    Null,

    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Colon,

    Eof,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize, column: usize) -> Self {
        Self { kind, line, column }
    }
}

pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let (line, column) = (self.line, self.column);

        let Some((pos, c)) = self.advance() else {
            return Ok(Token::new(TokenKind::Eof, line, column));
        };

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '\'' | '"' => self.string(c, line, column)?,
            c if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.number(pos, line, column)?
            }
            c if c.is_alphabetic() => self.word(pos, line, column)?,
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    line,
                    column,
                ))
            }
        };

        Ok(Token::new(kind, line, column))
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((_, c)) = result {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        result
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_pos(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(pos, _)| *pos)
            .unwrap_or(self.source.len())
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    fn string(&mut self, quote: char, line: usize, column: usize) -> Result<TokenKind, ParseError> {
        let mut value = String::new();

        loop {
            match self.advance() {
                None => return Err(ParseError::new("unterminated string", line, column)),
                Some((_, c)) if c == quote => break,
                Some((_, '\\')) => match self.advance() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, 'r')) => value.push('\r'),
                    Some((_, c)) => value.push(c),
                    None => return Err(ParseError::new("unterminated string", line, column)),
                },
                Some((_, c)) => value.push(c),
            }
        }

        Ok(TokenKind::String(value))
    }

    fn number(&mut self, start: usize, line: usize, column: usize) -> Result<TokenKind, ParseError> {
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '+') {
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.peek_pos()];
        let unsigned = text.trim_start_matches(['-', '+']);

        if unsigned == "inf" {
            let value = if text.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Ok(TokenKind::Float(value));
        }

        if !text.contains(['.', 'e', 'E']) {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(TokenKind::Int(value));
            }
        }

        text.parse::<f64>()
            .map(TokenKind::Float)
            .map_err(|_| ParseError::new(format!("invalid number '{}'", text), line, column))
    }

    fn word(&mut self, start: usize, line: usize, column: usize) -> Result<TokenKind, ParseError> {
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance();
            } else {
                break;
            }
        }

        match &self.source[start..self.peek_pos()] {
            "true" | "True" => Ok(TokenKind::Bool(true)),
            "false" | "False" => Ok(TokenKind::Bool(false)),
            "null" | "None" => Ok(TokenKind::Null),
            "nan" => Ok(TokenKind::Float(f64::NAN)),
            "inf" => Ok(TokenKind::Float(f64::INFINITY)),
            other => Err(ParseError::new(
                format!("unexpected word '{}'", other),
                line,
                column,
            )),
        }
    }
}
