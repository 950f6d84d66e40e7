use crate::ast::BinOp;

/// Expression node.
///
/// Expressions appear as assignment values, conditions, loop sources, call
/// arguments and return values.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal, integer or float, kept as written
    ///
    /// # Example
    /// ```text
    /// 42
    /// -7
    /// 0.5
    /// ```
    Number(String),

    /// String literal
    ///
    /// # Example
    /// ```text
    /// "hello"
    /// ```
    String(String),

    /// Variable reference, optionally sliced
    ///
    /// # Examples
    /// ```text
    /// numbers
    /// numbers[4]
    /// numbers[1:9:2]
    /// ```
    Variable(Variable),

    /// Binary operation (arithmetic, comparison, membership)
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// List literal
    ///
    /// # Example
    /// ```text
    /// [1, 2, x]
    /// ```
    List(Vec<Expr>),

    /// Dict literal, pairs kept in source order
    ///
    /// # Example
    /// ```text
    /// {"a": 1, key: value}
    /// ```
    Dict(Vec<(Expr, Expr)>),

    /// Call of a function defined outside the converted algorithm
    ///
    /// # Example
    /// ```text
    /// len(numbers)
    /// range(0, n)
    /// ```
    Call(Call),
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable::new(name))
    }

    pub fn number(text: impl Into<String>) -> Self {
        Expr::Number(text.into())
    }

    pub fn binary(left: Expr, op: BinOp, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A named variable with an optional slice subscript.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub slice: Option<Slice>,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable {
            name: name.into(),
            slice: None,
        }
    }

    pub fn sliced(name: impl Into<String>, slice: Option<Slice>) -> Self {
        Variable {
            name: name.into(),
            slice,
        }
    }
}

/// `start:stop:step` subscript. At least one slot is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    start: Option<Box<Expr>>,
    stop: Option<Box<Expr>>,
    step: Option<Box<Expr>>,
}

impl Slice {
    /// Returns `None` when every slot is absent, so an empty subscript
    /// degenerates to "no slice" on the variable.
    pub fn new(start: Option<Expr>, stop: Option<Expr>, step: Option<Expr>) -> Option<Self> {
        if start.is_none() && stop.is_none() && step.is_none() {
            return None;
        }
        Some(Slice {
            start: start.map(Box::new),
            stop: stop.map(Box::new),
            step: step.map(Box::new),
        })
    }

    /// Plain index, `[i]`.
    pub fn index(index: Expr) -> Self {
        Slice {
            start: Some(Box::new(index)),
            stop: None,
            step: None,
        }
    }

    pub fn start(&self) -> Option<&Expr> {
        self.start.as_deref()
    }

    pub fn stop(&self) -> Option<&Expr> {
        self.stop.as_deref()
    }

    pub fn step(&self) -> Option<&Expr> {
        self.step.as_deref()
    }
}

/// Function name and ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<Expr>,
}

impl Call {
    pub fn new(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Call {
            name: name.into(),
            args,
        }
    }

    /// `range(end)` or `range(start, end)`, as `(start, end)`.
    pub fn as_range(&self) -> Option<(Option<&Expr>, &Expr)> {
        if self.name != "range" {
            return None;
        }
        match self.args.as_slice() {
            [end] => Some((None, end)),
            [start, end] => Some((Some(start), end)),
            _ => None,
        }
    }
}
