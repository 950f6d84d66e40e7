use crate::{
    ast::{
        AssignOp, BinOp, Block, Call, ElifClause, Expr, FunctionDef, Slice, Statement, Token,
        TokenKind, Variable,
    },
    error::{Error, Result},
    lexer::Lexer,
};
use std::mem;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Expected {expected}, found {found} on line {line}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
    },
    #[error(
        "Expected a statement (if, while, for, return, assignment or call), found {found} on line {line}"
    )]
    UnexpectedStatement { found: String, line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { line, .. } | ParseError::UnexpectedStatement { line, .. } => {
                *line
            }
        }
    }
}

/// One-token-lookahead recursive descent parser.
///
/// Block structure comes from indentation only: `indent` is refreshed from the
/// lexer whenever a NEWLINE is consumed, and a block keeps collecting statements
/// while `indent` stays deeper than the line that opened it.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
    indent: usize,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self> {
        let indent = lexer.indent_level();
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
            indent,
        })
    }

    /// Indentation level of the line the parser is on.
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(&self.current_token.kind) == mem::discriminant(kind)
    }

    fn unexpected(&self, expected: &str) -> Error {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.current_token.kind.to_string(),
            line: self.current_token.line,
        }
        .into()
    }

    fn expect(&mut self, expected: TokenKind) -> Result<()> {
        if !self.check(&expected) {
            return Err(self.unexpected(expected.label()));
        }

        if expected == TokenKind::Newline {
            let indent = self.lexer.indent_level();
            self.advance()?;
            self.indent = indent;
        } else {
            self.advance()?;
        }
        Ok(())
    }

    fn expect_identifier(&mut self) -> Result<String> {
        match &self.current_token.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.advance()?;
                Ok(name)
            }
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// A line ends with NEWLINE, or with the end of input on the last line.
    fn end_line(&mut self) -> Result<()> {
        if self.check(&TokenKind::Eof) {
            return Ok(());
        }
        self.expect(TokenKind::Newline)
    }

    /// Parse a complete program: one function definition and nothing after it.
    pub fn parse_program(&mut self) -> Result<FunctionDef> {
        let function = self.parse_function()?;

        while self.check(&TokenKind::Newline) {
            self.expect(TokenKind::Newline)?;
        }

        if !self.check(&TokenKind::Eof) {
            return Err(self.unexpected(TokenKind::Eof.label()));
        }
        Ok(function)
    }

    pub fn parse_function(&mut self) -> Result<FunctionDef> {
        let level = self.indent;
        self.expect(TokenKind::Def)?;
        let name = self.expect_identifier()?;
        self.expect(TokenKind::LParen)?;

        let mut params = vec![];
        // A comma must be followed by another parameter
        if self.check(&TokenKind::Identifier(String::new())) {
            loop {
                params.push(self.expect_identifier()?);

                if self.check(&TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        let body = self.parse_suite(level)?;

        Ok(FunctionDef { name, params, body })
    }

    /// `:` NEWLINE, then the block opened by a header at `level`.
    fn parse_suite(&mut self, level: usize) -> Result<Block> {
        self.expect(TokenKind::Colon)?;
        self.end_line()?;
        self.parse_block(level)
    }

    /// Collect statements indented deeper than `level`.
    pub fn parse_block(&mut self, level: usize) -> Result<Block> {
        let mut statements = vec![];

        while !self.check(&TokenKind::Eof) && self.indent > level {
            if self.check(&TokenKind::Newline) {
                self.expect(TokenKind::Newline)?;
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(statements)
    }

    pub fn parse_statement(&mut self) -> Result<Statement> {
        match &self.current_token.kind {
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Return => {
                let statement = self.parse_return()?;
                self.end_line()?;
                Ok(statement)
            }
            TokenKind::Identifier(_) => {
                let statement = self.parse_call_or_assignment()?;
                self.end_line()?;
                Ok(statement)
            }
            found => Err(ParseError::UnexpectedStatement {
                found: found.to_string(),
                line: self.current_token.line,
            }
            .into()),
        }
    }

    pub fn parse_if(&mut self) -> Result<Statement> {
        let level = self.indent;
        self.expect(TokenKind::If)?;
        let condition = self.parse_expression()?;
        let body = self.parse_suite(level)?;

        // elif/else belong to this if only when they line up with it
        let mut elifs = vec![];
        while self.check(&TokenKind::Elif) && self.indent == level {
            self.advance()?;
            let condition = self.parse_expression()?;
            let body = self.parse_suite(level)?;
            elifs.push(ElifClause { condition, body });
        }

        let else_body = if self.check(&TokenKind::Else) && self.indent == level {
            self.advance()?;
            Some(self.parse_suite(level)?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            body,
            elifs,
            else_body,
        })
    }

    pub fn parse_while(&mut self) -> Result<Statement> {
        let level = self.indent;
        self.expect(TokenKind::While)?;
        let condition = self.parse_expression()?;
        let body = self.parse_suite(level)?;
        Ok(Statement::While { condition, body })
    }

    pub fn parse_for(&mut self) -> Result<Statement> {
        let level = self.indent;
        self.expect(TokenKind::For)?;
        let variable = self.expect_identifier()?;
        self.expect(TokenKind::In)?;

        // Either a (sliced) variable or a call such as range(...)
        let name = self.expect_identifier()?;
        let iterable = if self.check(&TokenKind::LParen) {
            Expr::Call(Call::new(name, self.parse_arguments()?))
        } else {
            Expr::Variable(Variable::sliced(name, self.parse_subscript()?))
        };

        let body = self.parse_suite(level)?;
        Ok(Statement::For {
            variable,
            iterable,
            body,
        })
    }

    pub fn parse_return(&mut self) -> Result<Statement> {
        self.expect(TokenKind::Return)?;
        Ok(Statement::Return(self.parse_expression()?))
    }

    /// `name(args)` as a statement, or `target[slice] op value`.
    pub fn parse_call_or_assignment(&mut self) -> Result<Statement> {
        let name = self.expect_identifier()?;

        if self.check(&TokenKind::LParen) {
            return Ok(Statement::Call(Call::new(name, self.parse_arguments()?)));
        }

        let target = Variable::sliced(name, self.parse_subscript()?);

        let op = match self.current_token.kind {
            TokenKind::Assign => AssignOp::Assign,
            TokenKind::PlusAssign => AssignOp::AddAssign,
            TokenKind::MinusAssign => AssignOp::SubtractAssign,
            _ => return Err(self.unexpected("assignment operator")),
        };
        self.advance()?;

        let value = self.parse_expression()?;
        Ok(Statement::Assignment { target, op, value })
    }

    fn parse_arguments(&mut self) -> Result<Vec<Expr>> {
        self.expect(TokenKind::LParen)?;

        let mut args = vec![];
        if !self.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);

                if self.check(&TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    /// Optional `[start:stop:step]` with every slot optional.
    fn parse_subscript(&mut self) -> Result<Option<Slice>> {
        if !self.check(&TokenKind::LBracket) {
            return Ok(None);
        }
        self.advance()?;

        let mut slots: [Option<Expr>; 3] = [None, None, None];
        let mut index = 0;
        loop {
            if !self.check(&TokenKind::Colon) && !self.check(&TokenKind::RBracket) {
                slots[index] = Some(self.parse_expression()?);
            }

            if index < 2 && self.check(&TokenKind::Colon) {
                self.advance()?;
                index += 1;
            } else {
                break;
            }
        }

        self.expect(TokenKind::RBracket)?;

        let [start, stop, step] = slots;
        Ok(Slice::new(start, stop, step))
    }

    /// Flat, left-associative chain of factors. No operator binds tighter
    /// than another.
    pub fn parse_expression(&mut self) -> Result<Expr> {
        let mut left = self.parse_factor()?;

        loop {
            let op = match self.current_token.kind {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Subtract,
                TokenKind::Star => BinOp::Multiply,
                TokenKind::Slash => BinOp::Divide,
                TokenKind::Percent => BinOp::Modulo,
                TokenKind::Gt => BinOp::GreaterThan,
                TokenKind::Lt => BinOp::LessThan,
                TokenKind::GtEq => BinOp::GreaterEqual,
                TokenKind::LtEq => BinOp::LessEqual,
                TokenKind::EqEq => BinOp::Equal,
                TokenKind::In => BinOp::In,
                _ => break,
            };

            self.advance()?;
            let right = self.parse_factor()?;
            left = Expr::binary(left, op, right);
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expr> {
        match mem::replace(&mut self.current_token.kind, TokenKind::Eof) {
            TokenKind::Integer(text) | TokenKind::Float(text) => {
                self.advance()?;
                Ok(Expr::Number(text))
            }
            TokenKind::String(text) => {
                self.advance()?;
                Ok(Expr::String(text))
            }
            TokenKind::LParen => {
                self.advance()?;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::RParen)?;
                Ok(expr)
            }
            TokenKind::Identifier(name) => {
                self.advance()?;
                if self.check(&TokenKind::LParen) {
                    Ok(Expr::Call(Call::new(name, self.parse_arguments()?)))
                } else {
                    Ok(Expr::Variable(Variable::sliced(name, self.parse_subscript()?)))
                }
            }
            // Negative numeric literal
            TokenKind::Minus => {
                self.advance()?;
                match mem::replace(&mut self.current_token.kind, TokenKind::Eof) {
                    TokenKind::Integer(text) | TokenKind::Float(text) => {
                        self.advance()?;
                        Ok(Expr::Number(format!("-{}", text)))
                    }
                    other => {
                        self.current_token.kind = other;
                        Err(self.unexpected("number"))
                    }
                }
            }
            TokenKind::LBracket => {
                self.advance()?;
                self.parse_list_literal()
            }
            TokenKind::LBrace => {
                self.advance()?;
                self.parse_dict_literal()
            }
            other => {
                self.current_token.kind = other;
                Err(self.unexpected("expression"))
            }
        }
    }

    fn parse_list_literal(&mut self) -> Result<Expr> {
        let mut elements = vec![];
        if !self.check(&TokenKind::RBracket) {
            loop {
                elements.push(self.parse_expression()?);

                if self.check(&TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(TokenKind::RBracket)?;
        Ok(Expr::List(elements))
    }

    fn parse_dict_literal(&mut self) -> Result<Expr> {
        let mut pairs = vec![];
        if !self.check(&TokenKind::RBrace) {
            loop {
                let key = self.parse_expression()?;
                self.expect(TokenKind::Colon)?;
                let value = self.parse_expression()?;
                pairs.push((key, value));

                if self.check(&TokenKind::Comma) {
                    self.advance()?;
                } else {
                    break;
                }
            }
        }

        self.expect(TokenKind::RBrace)?;
        Ok(Expr::Dict(pairs))
    }
}
