//! Syntax tree -> JSON conversion utilities

use serde_json::{Value, json};

use crate::ast::{Expr, FunctionDef, Slice, Statement, Variable};

/// Convert a function definition to serde_json::Value
pub fn function_to_json(function: &FunctionDef) -> Value {
    json!({
        "type": "function",
        "name": function.name,
        "params": function.params,
        "body": block_to_json(&function.body),
    })
}

fn block_to_json(block: &[Statement]) -> Value {
    Value::Array(block.iter().map(statement_to_json).collect())
}

/// Convert a statement to serde_json::Value
pub fn statement_to_json(statement: &Statement) -> Value {
    match statement {
        Statement::Assignment { target, op, value } => json!({
            "type": "assignment",
            "target": variable_to_json(target),
            "op": op.symbol(),
            "value": expression_to_json(value),
        }),
        Statement::Call(call) => json!({
            "type": "call",
            "name": call.name,
            "args": call.args.iter().map(expression_to_json).collect::<Vec<_>>(),
        }),
        Statement::Return(value) => json!({
            "type": "return",
            "value": expression_to_json(value),
        }),
        Statement::If {
            condition,
            body,
            elifs,
            else_body,
        } => json!({
            "type": "if",
            "condition": expression_to_json(condition),
            "body": block_to_json(body),
            "elifs": elifs
                .iter()
                .map(|clause| json!({
                    "condition": expression_to_json(&clause.condition),
                    "body": block_to_json(&clause.body),
                }))
                .collect::<Vec<_>>(),
            "else": else_body.as_ref().map(|b| block_to_json(b)),
        }),
        Statement::While { condition, body } => json!({
            "type": "while",
            "condition": expression_to_json(condition),
            "body": block_to_json(body),
        }),
        Statement::For {
            variable,
            iterable,
            body,
        } => json!({
            "type": "for",
            "variable": variable,
            "iterable": expression_to_json(iterable),
            "body": block_to_json(body),
        }),
    }
}

/// Convert an expression to serde_json::Value
pub fn expression_to_json(expr: &Expr) -> Value {
    match expr {
        Expr::Number(text) => json!({ "type": "number", "value": text }),
        Expr::String(text) => json!({ "type": "string", "value": text }),
        Expr::Variable(variable) => variable_to_json(variable),
        Expr::BinaryOp { op, left, right } => json!({
            "type": "binary",
            "op": op.symbol(),
            "left": expression_to_json(left),
            "right": expression_to_json(right),
        }),
        Expr::List(elements) => json!({
            "type": "list",
            "elements": elements.iter().map(expression_to_json).collect::<Vec<_>>(),
        }),
        Expr::Dict(pairs) => json!({
            "type": "dict",
            "pairs": pairs
                .iter()
                .map(|(k, v)| json!([expression_to_json(k), expression_to_json(v)]))
                .collect::<Vec<_>>(),
        }),
        Expr::Call(call) => json!({
            "type": "call",
            "name": call.name,
            "args": call.args.iter().map(expression_to_json).collect::<Vec<_>>(),
        }),
    }
}

fn variable_to_json(variable: &Variable) -> Value {
    json!({
        "type": "variable",
        "name": variable.name,
        "slice": variable.slice.as_ref().map(slice_to_json),
    })
}

fn slice_to_json(slice: &Slice) -> Value {
    json!({
        "start": slice.start().map(expression_to_json),
        "stop": slice.stop().map(expression_to_json),
        "step": slice.step().map(expression_to_json),
    })
}
