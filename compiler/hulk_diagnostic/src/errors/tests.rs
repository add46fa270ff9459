use super::*;
use crate::ErrorKind;
use hulk_ir::{Expr, FunctionDecl, Token, TokenKind};
use pretty_assertions::assert_eq;

#[test]
fn test_missing_call_parens_points_past_the_name() {
    let err = missing_call_parens("Max", 10);
    assert_eq!(err.kind(), ErrorKind::Semantic);
    assert_eq!(err.offset(), Some(13));
    assert_eq!(err.message(), "missing '(' after call to function 'Max'");
}

#[test]
fn test_missing_call_parens_counts_characters() {
    assert_eq!(missing_call_parens("ñu", 10).offset(), Some(12));
}

#[test]
fn test_variable_errors_keep_token_offset() {
    assert_eq!(undeclared_variable("x", 4).offset(), Some(4));
    assert_eq!(function_name_as_variable("f", 7).offset(), Some(7));
}

#[test]
fn test_no_matching_overload_lists_arities() {
    let err = no_matching_overload("Sum", 1, &[2, 3], 0);
    assert_eq!(
        err.message(),
        "no overload of 'Sum' takes 1 argument (available: 2, 3)"
    );
}

#[test]
fn test_redeclaration_message() {
    assert_eq!(
        function_redeclaration("f", 2, 9).message(),
        "cannot redeclare function 'f' with 2 parameters"
    );
    assert_eq!(
        builtin_redefinition("sin", 9).message(),
        "'sin' is a built-in function and cannot be redefined"
    );
}

#[test]
fn test_unknown_declaration_has_no_offset() {
    let err = unknown_declaration("g", 1);
    assert_eq!(err.offset(), None);
    assert_eq!(err.error_type(), "SEMANTIC ERROR");
}

#[test]
fn test_from_ast_error_is_syntactic() {
    let interner = StringInterner::new();
    let star = Token::new(TokenKind::Star, interner.intern("*"), None, 5);
    let ast_err = Expr::unary(star, Expr::number(1.0)).unwrap_err();

    let err = from_ast_error(&ast_err, &interner);
    assert_eq!(err.kind(), ErrorKind::Syntactic);
    assert_eq!(err.offset(), Some(5));
    assert_eq!(err.message(), "'*' is not a unary operator");
}

#[test]
fn test_from_duplicate_parameter() {
    let interner = StringInterner::new();
    let name = |s: &str, offset| Token::identifier(interner.intern(s), offset);
    let ast_err = FunctionDecl::new(
        name("f", 9),
        vec![name("x", 11), name("x", 14)],
        Expr::number(0.0),
    )
    .unwrap_err();

    let err = from_ast_error(&ast_err, &interner);
    assert_eq!(
        err.to_string(),
        "SYNTACTIC ERROR: parameter 'x' is declared twice in function 'f' (at offset 14)"
    );
}
