/// Binary operators.
///
/// The expression grammar is flat: all of these share one precedence level and
/// chain strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Modulo (`%`)
    Modulo,

    // Comparison
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Equal (`==`)
    Equal,

    /// Membership (`in`)
    In,
}

impl BinOp {
    /// Operator as written in the source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
            BinOp::GreaterThan => ">",
            BinOp::LessThan => "<",
            BinOp::GreaterEqual => ">=",
            BinOp::LessEqual => "<=",
            BinOp::Equal => "==",
            BinOp::In => "in",
        }
    }

    /// Operator as emitted inside LaTeX math mode.
    ///
    /// `%` starts a comment in LaTeX, so modulo becomes `\bmod`.
    pub fn latex(self) -> &'static str {
        match self {
            BinOp::Modulo => "\\bmod",
            op => op.symbol(),
        }
    }
}

/// Assignment operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubtractAssign,
}

impl AssignOp {
    /// The binary operator a compound assignment expands to, if any.
    pub fn binary_op(self) -> Option<BinOp> {
        match self {
            AssignOp::Assign => None,
            AssignOp::AddAssign => Some(BinOp::Add),
            AssignOp::SubtractAssign => Some(BinOp::Subtract),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubtractAssign => "-=",
        }
    }
}
