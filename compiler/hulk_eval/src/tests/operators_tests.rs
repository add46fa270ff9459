use hulk_ir::{BinaryOp, UnaryOp};
use pretty_assertions::assert_eq;

use crate::{evaluate_binary, evaluate_unary, Value};

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn binary(left: Value, op: BinaryOp, right: Value) -> Value {
    match evaluate_binary(left, op, right, 0) {
        Ok(v) => v,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn arithmetic() {
    assert_eq!(binary(num(7.0), BinaryOp::Add, num(2.0)), num(9.0));
    assert_eq!(binary(num(7.0), BinaryOp::Sub, num(2.0)), num(5.0));
    assert_eq!(binary(num(7.0), BinaryOp::Mul, num(2.0)), num(14.0));
    assert_eq!(binary(num(7.0), BinaryOp::Div, num(2.0)), num(3.5));
    assert_eq!(binary(num(7.0), BinaryOp::Mod, num(2.0)), num(1.0));
    assert_eq!(binary(num(2.0), BinaryOp::Pow, num(10.0)), num(1024.0));
}

#[test]
fn division_by_zero_follows_floating_point() {
    assert_eq!(binary(num(1.0), BinaryOp::Div, num(0.0)), num(f64::INFINITY));
}

#[test]
fn comparison() {
    assert_eq!(binary(num(3.0), BinaryOp::Lt, num(5.0)), Value::Bool(true));
    assert_eq!(binary(num(5.0), BinaryOp::LtEq, num(5.0)), Value::Bool(true));
    assert_eq!(binary(num(3.0), BinaryOp::Gt, num(5.0)), Value::Bool(false));
    assert_eq!(binary(num(5.0), BinaryOp::GtEq, num(3.0)), Value::Bool(true));
}

#[test]
fn equality_across_types_is_false() {
    assert_eq!(binary(num(1.0), BinaryOp::Eq, num(1.0)), Value::Bool(true));
    assert_eq!(
        binary(num(1.0), BinaryOp::Eq, Value::Str("1".into())),
        Value::Bool(false)
    );
    assert_eq!(
        binary(Value::Bool(true), BinaryOp::NotEq, Value::Str("true".into())),
        Value::Bool(true)
    );
}

#[test]
fn logical() {
    let t = Value::Bool(true);
    let f = Value::Bool(false);
    assert_eq!(binary(t.clone(), BinaryOp::And, f.clone()), f);
    assert_eq!(binary(t.clone(), BinaryOp::Or, f), t);
}

#[test]
fn concat_uses_display_form() {
    assert_eq!(
        binary(Value::Str("x = ".into()), BinaryOp::Concat, num(5.0)),
        Value::Str("x = 5".into())
    );
    assert_eq!(
        binary(num(1.5), BinaryOp::Concat, Value::Bool(false)),
        Value::Str("1.5false".into())
    );
}

#[test]
fn operand_type_errors() {
    let err = evaluate_binary(num(1.0), BinaryOp::Add, Value::Bool(true), 6).unwrap_err();
    assert_eq!(
        err.message(),
        "operator '+' cannot be applied to boolean; expected numbers"
    );
    assert_eq!(err.offset(), Some(6));

    let err = evaluate_binary(Value::Str("a".into()), BinaryOp::And, Value::Bool(true), 0)
        .unwrap_err();
    assert_eq!(
        err.message(),
        "operator '&' cannot be applied to string; expected booleans"
    );
}

#[test]
fn unary() {
    assert_eq!(evaluate_unary(UnaryOp::Neg, num(4.0), 0).ok(), Some(num(-4.0)));
    assert_eq!(
        evaluate_unary(UnaryOp::Not, Value::Bool(true), 0).ok(),
        Some(Value::Bool(false))
    );
    let err = evaluate_unary(UnaryOp::Not, num(1.0), 2).unwrap_err();
    assert_eq!(
        err.message(),
        "operator '!' cannot be applied to number; expected a boolean"
    );
}
