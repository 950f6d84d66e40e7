use crate::ast::Block;

/// Function definition, the root of every converted algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// Function name, also used as the algorithm caption
    pub name: String,

    /// Parameter names in declaration order
    pub params: Vec<String>,

    /// Function body
    pub body: Block,
}
