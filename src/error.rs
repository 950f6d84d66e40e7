use thiserror::Error;

use crate::{lexer::LexError, parser::ParseError};

/// Any failure while turning pseudocode into a syntax tree.
///
/// Both kinds are fatal: no partial tree or output is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Source line the error was reported on.
    pub fn line(&self) -> usize {
        match self {
            Error::Lex(LexError::UnexpectedCharacter { line, .. })
            | Error::Lex(LexError::UnterminatedString { line }) => *line,
            Error::Parse(e) => e.line(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
