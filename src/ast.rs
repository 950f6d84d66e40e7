//! # Pseudocode Abstract Syntax Tree
//!
//! This module defines the syntax tree for the indentation-delimited pseudocode
//! accepted by `pseudotex`, a small Python-like language that is converted into
//! LaTeX `algorithmic` environments.
//!
//! ## Architecture Overview
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, variables, slices, calls)
//! - **[operators]** - Binary and assignment operators
//! - **[statements]** - Statements and blocks
//! - **[function]** - Function definitions, the root of every tree
//!
//! ## Quick Start
//!
//! ```text
//! def sum(numbers):
//!     total = 0
//!     for x in numbers:
//!         total += x
//!     return total
//! ```
//!
//! ## Core Concepts
//!
//! ### Off-side Rule
//!
//! There are no block delimiters. A block holds every following statement whose
//! line is indented deeper than the line that opened it; four spaces make one
//! indentation level.
//!
//! ### Flat Expressions
//!
//! Binary operators have no precedence. `1 + 2 * 3` groups as `(1 + 2) * 3`;
//! use parentheses to group differently.
//!
//! ### Slices
//!
//! A variable may carry a `[start:stop:step]` subscript where any slot may be
//! left out. A subscript with no slot at all is dropped.
pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod function;

pub use tokens::{Token, TokenKind};
pub use expressions::{Call, Expr, Slice, Variable};
pub use operators::{AssignOp, BinOp};
pub use statements::{Block, ElifClause, Statement};
pub use function::FunctionDef;
