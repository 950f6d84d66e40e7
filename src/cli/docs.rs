//! Documentation content for pseudotex CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Statements,
    Expressions,
    Slices,
    Output,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" | "indentation" => Some(Self::Syntax),
            "statements" | "statement" => Some(Self::Statements),
            "expressions" | "expression" | "operators" | "ops" => Some(Self::Expressions),
            "slices" | "slice" => Some(Self::Slices),
            "output" | "latex" => Some(Self::Output),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"PSEUDOTEX DOCUMENTATION

pseudotex converts a small, indentation-delimited Python-like pseudocode into a
LaTeX algorithm environment built from the algorithmic(x) control words.

DOCUMENTATION CATEGORIES

  syntax            Function definitions, lines, and indentation
  statements        Assignments, calls, return, if/elif/else, while, for
  expressions       Literals, operators, calls, lists and dicts
  slices            Subscripts and how each shape is rendered
  output            Layout of the generated LaTeX

QUICK REFERENCE

  def name(a, b):       Function, one per input
  x = e   x += e        Assignment
  f(a, b)               Call statement
  if c: / elif c: / else:
  while c:
  for i in range(n):    Counting loop
  return e

Run 'pseudotex doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Statements) => Ok(STATEMENTS_DOC),
        Some(DocCategory::Expressions) => Ok(EXPRESSIONS_DOC),
        Some(DocCategory::Slices) => Ok(SLICES_DOC),
        Some(DocCategory::Output) => Ok(OUTPUT_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Functions and Indentation

FUNCTION DEFINITION
  def name(param1, param2):
      body

    Every input holds exactly one function. Its name becomes the caption of
    the generated algorithm.

INDENTATION
    Blocks have no delimiters. A block holds every following line that is
    indented deeper than the line that opened it. Four spaces make one level;
    leftover spaces are ignored (6 spaces is level 1).

    Example:
      def f():
          if x > 0:
              y = 1
          z = 2

    Here `y = 1` belongs to the if, `z = 2` to the function.

    Constraints:
      - Indent with spaces only, tabs are rejected
      - Blank lines are ignored and never close a block
      - One statement per line

ERRORS
    Unknown characters are lexical errors, structural mistakes are parse
    errors. Both report the source line and stop the conversion.
"#;

const STATEMENTS_DOC: &str = r#"STATEMENTS

ASSIGNMENT
  x = e        x += e        x -= e        x[i] = e

CALL
  swap(a, i, j)

RETURN
  return e

IF
  if c:
      ...
  elif c2:
      ...
  else:
      ...

    elif and else attach to the if at the same indentation.

WHILE
  while c:
      ...

FOR
  for x in items:
  for x in items[1:]:
  for i in range(n):          i = 0, ..., n
  for i in range(a, b):       i = a, ..., b
"#;

const EXPRESSIONS_DOC: &str = r#"EXPRESSIONS

LITERALS
  42   -7   3.14   .5   "text"   'text'   [1, 2]   {"k": v}

OPERATORS
  +  -  *  /  %  >  <  >=  <=  ==  in

    All operators share one precedence level and group left to right:
      1 + 2 * 3    is read as    (1 + 2) * 3
    Use parentheses to group differently.

CALLS
  name(a, b)
"#;

const SLICES_DOC: &str = r#"SLICES

  numbers[4]         ->  numbers[4]
  numbers[1:5]       ->  numbers[1:5]
  numbers[:5]        ->  numbers[5]
  numbers[::2]       ->  numbers[::2]
  numbers[1::2]      ->  numbers[1::2]
  numbers[4:9:2]     ->  numbers[4:9:2]
  numbers[:]         ->  numbers

    A single start or stop renders as a plain index, start and stop as a
    range, anything else with all three fields.
"#;

const OUTPUT_DOC: &str = r#"OUTPUT - Generated LaTeX

    \begin{algorithm}
    \caption{name}
    \begin{algorithmic}
    \Function{name}{params}
    ...
    \EndFunction
    \end{algorithmic}
    \end{algorithm}

    Requires the algorithm and algpseudocode packages. Lines are flush-left;
    if, while and for blocks are preceded by an empty line.

    Use --bare to emit only the \Function ... \EndFunction listing and --ast
    to inspect the parsed syntax tree as JSON.
"#;
