use super::*;

fn frame(offset: u32) -> CallFrame {
    CallFrame {
        name: Name::from_raw(1),
        arity: 1,
        offset,
    }
}

#[test]
fn test_push_pop_tracks_depth() {
    let mut stack = CallStack::new(None);
    stack.push(frame(0)).unwrap();
    stack.push(frame(4)).unwrap();
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.current_frame().map(|f| f.offset), Some(4));

    stack.pop();
    assert_eq!(stack.depth(), 1);
}

#[test]
fn test_limit_rejects_without_pushing() {
    let mut stack = CallStack::new(Some(2));
    stack.push(frame(0)).unwrap();
    stack.push(frame(1)).unwrap();

    let err = stack.push(frame(2)).unwrap_err();
    assert_eq!(err.offset(), Some(2));
    assert_eq!(err.error_type(), "SEMANTIC ERROR");
    assert_eq!(stack.depth(), 2);
}
