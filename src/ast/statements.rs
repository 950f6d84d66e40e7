use crate::ast::{AssignOp, Call, Expr, Variable};

/// Ordered statements of one indented block.
pub type Block = Vec<Statement>;

/// Statement inside a function body.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Assignment, plain or compound
    ///
    /// # Example
    /// ```text
    /// total = 0
    /// numbers[2] += 1
    /// ```
    Assignment {
        target: Variable,
        op: AssignOp,
        value: Expr,
    },

    /// Call used as a statement
    ///
    /// # Example
    /// ```text
    /// swap(a, i, j)
    /// ```
    Call(Call),

    /// # Example
    /// ```text
    /// return total / n
    /// ```
    Return(Expr),

    /// Conditional with optional `elif` clauses and `else` block
    ///
    /// # Example
    /// ```text
    /// if x > 0:
    ///     sign = 1
    /// elif x < 0:
    ///     sign = -1
    /// else:
    ///     sign = 0
    /// ```
    If {
        condition: Expr,
        body: Block,
        elifs: Vec<ElifClause>,
        else_body: Option<Block>,
    },

    /// # Example
    /// ```text
    /// while i < n:
    ///     i += 1
    /// ```
    While { condition: Expr, body: Block },

    /// Loop over a variable or a call result. A `range` call is rendered as
    /// a counting loop.
    ///
    /// # Example
    /// ```text
    /// for i in range(1, n):
    ///     total += i
    /// ```
    For {
        variable: String,
        iterable: Expr,
        body: Block,
    },
}

/// One `elif` branch of an `if` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ElifClause {
    pub condition: Expr,
    pub body: Block,
}
