use super::*;

#[test]
fn buffer_handler_println_captures_with_newline() {
    let handler = BufferPrintHandler::new();
    handler.println("hello");
    handler.println("5");
    assert_eq!(handler.get_output(), "hello\n5\n");
}

#[test]
fn shared_buffer_handler_is_visible_through_clones() {
    let handler = buffer_handler();
    let session_side = handler.clone();
    handler.println("hello");
    assert_eq!(session_side.get_output(), "hello\n");
}

#[test]
fn stdout_handler_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn silent_handler_discards_output() {
    let handler = silent_handler();
    handler.println("hello");
    assert_eq!(handler.get_output(), "");
}
