//! Operator evaluation on values.
//!
//! Both operands are already evaluated; `&` and `|` do not short-circuit.

use hulk_diagnostic::{errors, HulkError};
use hulk_ir::{BinaryOp, UnaryOp};

use crate::{EvalResult, Value};

pub fn evaluate_unary(op: UnaryOp, operand: Value, offset: u32) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::Neg, other) => Err(operand_error(op.as_symbol(), "a number", &other, offset)),
        (UnaryOp::Not, other) => Err(operand_error(op.as_symbol(), "a boolean", &other, offset)),
    }
}

pub fn evaluate_binary(left: Value, op: BinaryOp, right: Value, offset: u32) -> EvalResult {
    let arithmetic = |f: fn(f64, f64) -> f64| {
        numbers(op, &left, &right, offset).map(|(l, r)| Value::Number(f(l, r)))
    };
    let comparison = |f: fn(&f64, &f64) -> bool| {
        numbers(op, &left, &right, offset).map(|(l, r)| Value::Bool(f(&l, &r)))
    };
    let logical = |f: fn(bool, bool) -> bool| {
        booleans(op, &left, &right, offset).map(|(l, r)| Value::Bool(f(l, r)))
    };

    match op {
        BinaryOp::Add => arithmetic(|l, r| l + r),
        BinaryOp::Sub => arithmetic(|l, r| l - r),
        BinaryOp::Mul => arithmetic(|l, r| l * r),
        BinaryOp::Div => arithmetic(|l, r| l / r),
        BinaryOp::Mod => arithmetic(|l, r| l % r),
        BinaryOp::Pow => arithmetic(f64::powf),
        BinaryOp::Lt => comparison(f64::lt),
        BinaryOp::LtEq => comparison(f64::le),
        BinaryOp::Gt => comparison(f64::gt),
        BinaryOp::GtEq => comparison(f64::ge),
        BinaryOp::And => logical(|l, r| l && r),
        BinaryOp::Or => logical(|l, r| l || r),
        // Values of different types are never equal.
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Concat => Ok(Value::Str(format!("{left}{right}"))),
    }
}

fn numbers(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    offset: u32,
) -> Result<(f64, f64), HulkError> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok((*l, *r)),
        (Value::Number(_), other) | (other, _) => {
            Err(operand_error(op.as_symbol(), "numbers", other, offset))
        }
    }
}

fn booleans(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    offset: u32,
) -> Result<(bool, bool), HulkError> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Ok((*l, *r)),
        (Value::Bool(_), other) | (other, _) => {
            Err(operand_error(op.as_symbol(), "booleans", other, offset))
        }
    }
}

#[cold]
fn operand_error(symbol: &str, expected: &str, got: &Value, offset: u32) -> HulkError {
    errors::invalid_operand(symbol, expected, got.type_name(), offset)
}
