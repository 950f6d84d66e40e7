pub mod ast;
pub mod cli;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;

pub use ast::{AssignOp, BinOp, Expr, FunctionDef, Slice, Statement, Token, TokenKind};
pub use error::{Error, Result};
pub use lexer::{LexError, Lexer};
pub use output::{LatexPrinter, to_latex, to_latex_bare};
pub use parser::{ParseError, Parser};

/// Parse pseudocode holding one function definition into its syntax tree.
pub fn parse(source: &str) -> Result<FunctionDef> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer)?;
    parser.parse_program()
}

/// Convert pseudocode into a LaTeX `algorithm` environment.
///
/// Nothing is produced if lexing or parsing fails.
pub fn convert(source: &str) -> Result<String> {
    let function = parse(source)?;
    Ok(to_latex(&function))
}
