use std::fmt;

/// A token together with the source line it starts on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based line number in the original source
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, line: usize) -> Self {
        Token { kind, line }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    Def,
    If,
    Elif,
    Else,
    While,
    For,
    In,
    Return,

    // Literals
    /// Integer literal, kept as written
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 007
    /// ```
    Integer(String),

    /// Float literal, kept as written
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// .5
    /// 2.
    /// ```
    Float(String),

    /// String literal contents between matching quotes, no escape processing
    ///
    /// # Examples
    /// ```text
    /// "hello"
    /// 'item #1'
    /// ```
    String(String),

    /// Variable, parameter or function name
    ///
    /// Starts with a letter, followed by letters, digits or underscores.
    Identifier(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Gt,
    Lt,
    GtEq,
    LtEq,
    EqEq,
    /// `=`
    Assign,
    /// `+=`
    PlusAssign,
    /// `-=`
    MinusAssign,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Colon,
    Comma,

    /// End of a source line
    Newline,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Name of the token kind, without any literal payload.
    ///
    /// Used when reporting what the parser expected.
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Def => "'def'",
            TokenKind::If => "'if'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::While => "'while'",
            TokenKind::For => "'for'",
            TokenKind::In => "'in'",
            TokenKind::Return => "'return'",
            TokenKind::Integer(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::String(_) => "string",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Percent => "'%'",
            TokenKind::Gt => "'>'",
            TokenKind::Lt => "'<'",
            TokenKind::GtEq => "'>='",
            TokenKind::LtEq => "'<='",
            TokenKind::EqEq => "'=='",
            TokenKind::Assign => "'='",
            TokenKind::PlusAssign => "'+='",
            TokenKind::MinusAssign => "'-='",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Colon => "':'",
            TokenKind::Comma => "','",
            TokenKind::Newline => "NEWLINE",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Integer(text) | TokenKind::Float(text) => {
                write!(f, "{} '{}'", self.label(), text)
            }
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::String(text) => write!(f, "string \"{}\"", text),
            _ => f.write_str(self.label()),
        }
    }
}
