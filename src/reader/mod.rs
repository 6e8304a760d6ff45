//! Permissive reader for dump output.
//!
//! Accepts the legacy format (single quoted strings, trailing commas,
//! lowercase or capitalised booleans, `nan`/`inf`) and therefore plain JSON
//! as well. Values come back as `serde_json::Value`; non-finite floats become
//! `null`.

pub mod lexer;
pub mod parser;

use thiserror::Error;

use lexer::Lexer;
use parser::Parser;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at {line}:{column}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

pub fn parse(source: &str) -> Result<serde_json::Value, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse()
}
