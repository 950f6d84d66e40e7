use thiserror::Error;

use crate::ast::{Token, TokenKind};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LexError {
    #[error("Unexpected character {character:?} on line {line}")]
    UnexpectedCharacter { character: char, line: usize },
    #[error("Unterminated string literal on line {line}")]
    UnterminatedString { line: usize },
}

pub struct Lexer {
    input: Vec<char>,
    /// Original line number of every line kept after blank-line elision
    lines: Vec<usize>,
    position: usize,
    row: usize,
    /// Leading spaces of the line after the last newline crossed
    indent: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        let mut lines = Vec::new();
        let mut kept = Vec::new();

        // Whitespace-only lines would otherwise reset the indentation level
        for (index, line) in source.lines().enumerate() {
            if !line.trim().is_empty() {
                lines.push(index + 1);
                kept.push(line);
            }
        }

        let mut lexer = Lexer {
            input: kept.join("\n").chars().collect(),
            lines,
            position: 0,
            row: 0,
            indent: 0,
        };
        lexer.indent = lexer.count_indentation();
        lexer
    }

    /// Indentation level of the line following the most recent NEWLINE token
    /// (or of the first line, before any NEWLINE was produced).
    pub fn indent_level(&self) -> usize {
        self.indent / INDENT_WIDTH
    }

    /// Source line the lexer is currently on.
    pub fn line(&self) -> usize {
        self.lines
            .get(self.row)
            .or(self.lines.last())
            .copied()
            .unwrap_or(1)
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn count_indentation(&self) -> usize {
        self.input[self.position..]
            .iter()
            .take_while(|&&ch| ch == ' ')
            .count()
    }

    fn skip_whitespace(&mut self) {
        while self.current_char() == Some(' ') {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, quote: char, line: usize) -> Result<String, LexError> {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                c if c == quote => {
                    self.advance();
                    return Ok(result);
                }
                '\n' => break,
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { line })
    }

    fn read_number(&mut self) -> TokenKind {
        let mut number = String::new();
        let mut is_float = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.' && !is_float {
                is_float = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if is_float {
            TokenKind::Float(number)
        } else {
            TokenKind::Integer(number)
        }
    }

    fn read_operator(&mut self, first: char) -> TokenKind {
        self.advance();

        if self.current_char() == Some('=') && matches!(first, '+' | '-' | '<' | '>' | '=') {
            self.advance();
            return match first {
                '+' => TokenKind::PlusAssign,
                '-' => TokenKind::MinusAssign,
                '<' => TokenKind::LtEq,
                '>' => TokenKind::GtEq,
                _ => TokenKind::EqEq,
            };
        }

        match first {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            _ => TokenKind::Assign,
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        let line = self.line();

        let Some(ch) = self.current_char() else {
            return Ok(Token::new(TokenKind::Eof, line));
        };

        let kind = match ch {
            '\n' => {
                self.advance();
                self.row += 1;
                self.indent = self.count_indentation();
                TokenKind::Newline
            }
            c if c.is_ascii_digit() => self.read_number(),
            '.' if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) => self.read_number(),
            '"' | '\'' => TokenKind::String(self.read_string(ch, line)?),
            c if c.is_alphabetic() => {
                let ident = self.read_identifier();

                match ident.as_str() {
                    "def" => TokenKind::Def,
                    "if" => TokenKind::If,
                    "elif" => TokenKind::Elif,
                    "else" => TokenKind::Else,
                    "while" => TokenKind::While,
                    "for" => TokenKind::For,
                    "in" => TokenKind::In,
                    "return" => TokenKind::Return,
                    _ => TokenKind::Identifier(ident),
                }
            }
            '+' | '-' | '*' | '/' | '%' | '<' | '>' | '=' => self.read_operator(ch),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            ':' => self.single(TokenKind::Colon),
            ',' => self.single(TokenKind::Comma),
            character => return Err(LexError::UnexpectedCharacter { character, line }),
        };

        Ok(Token::new(kind, line))
    }
}

#[test]
fn test_keywords() {
    let mut lexer = Lexer::new("def if elif else while for in return");
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Def);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::If);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Elif);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Else);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::While);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::For);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::In);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Return);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

#[test]
fn test_indent_after_newline() {
    let mut lexer = Lexer::new("def f():\n        a=4");
    assert_eq!(lexer.indent_level(), 0);
    while lexer.next_token().unwrap().kind != TokenKind::Newline {}
    assert_eq!(lexer.indent_level(), 2);
    assert_eq!(
        lexer.next_token().unwrap().kind,
        TokenKind::Identifier("a".to_string())
    );
}
