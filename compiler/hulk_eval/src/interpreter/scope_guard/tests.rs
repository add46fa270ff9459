use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::tests::helpers::Source;
use crate::{CallFrame, EvalMode, InterpreterBuilder, Value};
use hulk_ir::Name;
use pretty_assertions::assert_eq;

#[test]
fn test_guard_removes_bindings_in_reverse() {
    let src = Source::new();
    let mut env = src.env();
    let x = src.ident("x");
    let y = src.ident("y");
    let shadow = src.ident("x");
    {
        let mut interpreter = InterpreterBuilder::new(&mut env).build();
        let mut scoped = interpreter.scoped();
        scoped.bind(&x, Value::Number(1.0)).unwrap();
        scoped.bind(&y, Value::Number(2.0)).unwrap();
        scoped.bind(&shadow, Value::Number(3.0)).unwrap();
        assert_eq!(scoped.bound_count(), 3);
        assert_eq!(scoped.env().get(&x).unwrap(), Value::Number(3.0));
        assert_eq!(scoped.env().binding_depth(&x), 2);
    }
    assert!(env.is_unbound());
}

#[test]
fn test_failed_bind_unwinds_only_pushed_bindings() {
    let src = Source::new();
    let mut env = src.env();
    env.register(src.max_decl()).unwrap();
    let x = src.ident("x");
    let max = src.ident("Max");

    let mut interpreter = InterpreterBuilder::new(&mut env).build();
    let result = interpreter.with_bindings(
        vec![(x, Value::Number(1.0)), (max, Value::Number(2.0))],
        |_| Ok(()),
    );

    assert_eq!(
        result.unwrap_err().message(),
        "function name 'Max' cannot be used as the name of a variable"
    );
    assert!(interpreter.env().is_unbound());
}

#[test]
fn test_with_bindings_runs_body_in_scope() {
    let src = Source::new();
    let mut env = src.env();
    let a = src.ident("a");
    let body = src.var("a");

    let mut interpreter = InterpreterBuilder::new(&mut env).build();
    let value = interpreter
        .with_bindings(vec![(a, Value::Str("hi".into()))], |scoped| {
            scoped.eval(&body)
        })
        .unwrap();

    assert_eq!(value, Value::Str("hi".into()));
    assert!(interpreter.env().is_unbound());
}

#[test]
fn test_guard_unwinds_on_panic() {
    let src = Source::new();
    let mut env = src.env();
    let x = src.ident("x");

    let mut interpreter = InterpreterBuilder::new(&mut env).build();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let mut scoped = interpreter.scoped();
        scoped.bind(&x, Value::Bool(true)).unwrap();
        panic!("evaluation aborted");
    }));

    assert!(result.is_err());
    assert!(interpreter.env().is_unbound());
}

#[test]
fn test_call_frames_respect_limit_and_pop_on_drop() {
    let src = Source::new();
    let mut env = src.env();
    let mut interpreter = InterpreterBuilder::new(&mut env)
        .mode(EvalMode::TestRun)
        .max_call_depth(1)
        .build();
    let frame = CallFrame {
        name: Name::EMPTY,
        arity: 0,
        offset: 8,
    };

    {
        let mut outer = interpreter.call_frame(frame).unwrap();
        assert_eq!(outer.call_depth(), 1);
        let err = outer.call_frame(frame).err().unwrap();
        assert_eq!(
            err.message(),
            "maximum recursion depth exceeded (1 nested calls)"
        );
        assert_eq!(outer.call_depth(), 1);
    }
    assert_eq!(interpreter.call_depth(), 0);
}
