//! Run pseudotex conversions from CLI options

use super::{CliError, function_to_json};
use crate::{Lexer, Parser, output::LatexPrinter};

/// Options for the convert and check commands
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Pseudocode source
    pub source: Option<String>,
    /// Only validate syntax, don't render
    pub syntax_only: bool,
    /// Emit the syntax tree as JSON instead of LaTeX
    pub emit_ast: bool,
    /// Pretty-print the JSON syntax tree
    pub pretty: bool,
    /// Leave out the surrounding `algorithm` environment
    pub bare: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Rendered LaTeX
    Latex(String),
    /// Syntax tree as JSON
    Ast(serde_json::Value),
}

/// Execute a pseudotex check or conversion
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let source = options.source.as_ref().ok_or(CliError::NoInput)?;

    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer)?;
    let function = parser.parse_program()?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    if options.emit_ast {
        return Ok(CheckResult::Ast(function_to_json(&function)));
    }

    let printer = LatexPrinter::new(!options.bare);
    Ok(CheckResult::Latex(printer.print(&function)))
}
