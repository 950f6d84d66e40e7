//! LaTeX output for parsed pseudocode.
//!
//! Renders a [`FunctionDef`] as an `algorithmic` listing, optionally wrapped in
//! an `algorithm` float captioned with the function name.
//!
//! # Layout
//!
//! Every line is flush-left. Nesting is carried by the control words
//! (`\If` ... `\EndIf`) alone. Compound statements open with an empty line and
//! `\If` leaves empty lines where its `elif` and `else` parts would go; this
//! spacing is part of the output format and is reproduced exactly.
//!
//! # Examples
//!
//! ```
//! use pseudotex::output::to_latex;
//! use pseudotex::parse;
//!
//! let function = parse("def f():\n    a=4").unwrap();
//! assert_eq!(
//!     to_latex(&function),
//!     "\\begin{algorithm}\n\\caption{f}\n\\begin{algorithmic}\n\\Function{f}{}\n\
//!      \\State $a \\gets 4$\n\\EndFunction\n\\end{algorithmic}\n\\end{algorithm}"
//! );
//! ```

use crate::ast::{AssignOp, Block, Call, Expr, FunctionDef, Slice, Statement, Variable};

pub struct LatexPrinter {
    wrap: bool,
}

impl LatexPrinter {
    /// `wrap` puts the function inside an `algorithm` environment.
    pub fn new(wrap: bool) -> Self {
        LatexPrinter { wrap }
    }

    pub fn print(&self, function: &FunctionDef) -> String {
        if self.wrap {
            self.print_algorithm(function)
        } else {
            self.print_function(function)
        }
    }

    pub fn print_algorithm(&self, function: &FunctionDef) -> String {
        format!(
            "\\begin{{algorithm}}\n\\caption{{{}}}\n\\begin{{algorithmic}}\n{}\n\\end{{algorithmic}}\n\\end{{algorithm}}",
            function.name,
            self.print_function(function)
        )
    }

    pub fn print_function(&self, function: &FunctionDef) -> String {
        format!(
            "\\Function{{{}}}{{{}}}\n{}\n\\EndFunction",
            function.name,
            function.params.join(","),
            self.print_block(&function.body)
        )
    }

    fn print_block(&self, block: &Block) -> String {
        let lines: Vec<String> = block.iter().map(|s| self.print_statement(s)).collect();
        lines.join("\n")
    }

    pub fn print_statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Assignment { target, op, value } => {
                self.print_assignment(target, *op, value)
            }
            Statement::Call(call) => format!("\\State {}", self.print_call(call)),
            Statement::Return(value) => format!("\\State \\Return {}", self.print_expression(value)),
            Statement::If {
                condition,
                body,
                elifs,
                else_body,
            } => {
                let mut result = format!(
                    "\n\\If{{${}$}}\n{}\n",
                    self.print_expression(condition),
                    self.print_block(body)
                );
                for clause in elifs {
                    result.push_str(&format!(
                        "\\ElsIf{{${}$}}\n{}\n",
                        self.print_expression(&clause.condition),
                        self.print_block(&clause.body)
                    ));
                }
                result.push('\n');
                if let Some(else_body) = else_body {
                    result.push_str("\\Else\n");
                    result.push_str(&self.print_block(else_body));
                }
                result.push_str("\n\\EndIf");
                result
            }
            Statement::While { condition, body } => format!(
                "\n\\While{{${}$}}\n{}\n\\EndWhile",
                self.print_expression(condition),
                self.print_block(body)
            ),
            Statement::For {
                variable,
                iterable,
                body,
            } => {
                let range = match iterable {
                    Expr::Call(call) => call.as_range(),
                    _ => None,
                };
                let header = match range {
                    Some((start, end)) => format!(
                        "\\For{{${} = {}, \\dots, {}$}}",
                        variable,
                        start.map_or_else(|| "0".to_string(), |s| self.print_expression(s)),
                        self.print_expression(end)
                    ),
                    None => format!(
                        "\\For{{${}$ in ${}$}}",
                        variable,
                        self.print_expression(iterable)
                    ),
                };
                format!("\n{}\n{}\n\\EndFor", header, self.print_block(body))
            }
        }
    }

    fn print_assignment(&self, target: &Variable, op: AssignOp, value: &Expr) -> String {
        let target_latex = self.print_variable(target);
        let value_latex = match op.binary_op() {
            None => self.print_expression(value),
            Some(bin_op) => format!(
                "{} {} {}",
                target_latex,
                bin_op.latex(),
                self.print_operand(value)
            ),
        };
        format!("\\State ${} \\gets {}$", target_latex, value_latex)
    }

    pub fn print_expression(&self, expr: &Expr) -> String {
        match expr {
            Expr::Number(text) => text.clone(),
            Expr::String(text) => format!("\\texttt{{\"{}\"}}", text),
            Expr::Variable(variable) => self.print_variable(variable),
            Expr::BinaryOp { op, left, right } => format!(
                "{} {} {}",
                self.print_operand(left),
                op.latex(),
                self.print_operand(right)
            ),
            Expr::List(elements) => {
                let items: Vec<String> = elements.iter().map(|e| self.print_expression(e)).collect();
                format!("[{}]", items.join(","))
            }
            Expr::Dict(pairs) => {
                let items: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}:{}", self.print_expression(k), self.print_expression(v)))
                    .collect();
                format!("\\{{{}\\}}", items.join(","))
            }
            Expr::Call(call) => self.print_call(call),
        }
    }

    fn print_call(&self, call: &Call) -> String {
        let args: Vec<String> = call.args.iter().map(|a| self.print_expression(a)).collect();
        format!("\\Call{{{}}}{{{}}}", call.name, args.join(","))
    }

    /// Nested binary operations are always parenthesised; the tree carries no
    /// precedence to decide otherwise.
    fn print_operand(&self, expr: &Expr) -> String {
        match expr {
            Expr::BinaryOp { .. } => format!("({})", self.print_expression(expr)),
            _ => self.print_expression(expr),
        }
    }

    fn print_variable(&self, variable: &Variable) -> String {
        match &variable.slice {
            Some(slice) => format!("{}{}", variable.name, self.print_slice(slice)),
            None => variable.name.clone(),
        }
    }

    fn print_slice(&self, slice: &Slice) -> String {
        let slot = |e: Option<&Expr>| e.map(|e| self.print_expression(e));

        match (slot(slice.start()), slot(slice.stop()), slot(slice.step())) {
            // A lone step keeps its colons: `[::2]`
            (Some(only), None, None) | (None, Some(only), None) => format!("[{}]", only),
            (Some(start), Some(stop), None) => format!("[{}:{}]", start, stop),
            (start, stop, step) => format!(
                "[{}:{}:{}]",
                start.unwrap_or_default(),
                stop.unwrap_or_default(),
                step.unwrap_or_default()
            ),
        }
    }
}

// Convenience functions

/// Renders a function as a complete `algorithm` environment.
pub fn to_latex(function: &FunctionDef) -> String {
    LatexPrinter::new(true).print(function)
}

/// Renders only the `\Function ... \EndFunction` listing.
pub fn to_latex_bare(function: &FunctionDef) -> String {
    LatexPrinter::new(false).print(function)
}
