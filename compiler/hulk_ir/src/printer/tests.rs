use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;

fn ident(interner: &StringInterner, name: &str) -> Token {
    Token::identifier(interner.intern(name), 0)
}

fn op(interner: &StringInterner, kind: TokenKind) -> Token {
    Token::new(kind, interner.intern(kind.display_name()), None, 0)
}

#[test]
fn test_print_literals() {
    let interner = StringInterner::new();
    assert_eq!(print_expr(&Expr::number(42.0), &interner), "42");
    assert_eq!(
        print_expr(&Expr::literal(Literal::Str("hola".into())), &interner),
        "\"hola\""
    );
    assert_eq!(
        print_expr(&Expr::literal(Literal::Bool(true)), &interner),
        "true"
    );
}

#[test]
fn test_print_nested_binary_parenthesizes_operands() {
    let interner = StringInterner::new();
    let sum = Expr::binary(
        Expr::number(1.0),
        op(&interner, TokenKind::Plus),
        Expr::number(2.0),
    )
    .unwrap();
    let product = Expr::binary(sum, op(&interner, TokenKind::Star), Expr::number(3.0)).unwrap();

    assert_eq!(print_expr(&product, &interner), "(1 + 2) * 3");
}

#[test]
fn test_print_unary() {
    let interner = StringInterner::new();
    let neg = Expr::unary(
        op(&interner, TokenKind::Minus),
        Expr::variable(ident(&interner, "x")),
    )
    .unwrap();
    let not = Expr::unary(
        op(&interner, TokenKind::Bang),
        Expr::literal(Literal::Bool(false)),
    )
    .unwrap();

    assert_eq!(print_expr(&neg, &interner), "-x");
    assert_eq!(print_expr(&not, &interner), "!false");
}

#[test]
fn test_print_let_and_call() {
    let interner = StringInterner::new();
    let tree = Expr::let_in(
        vec![
            (ident(&interner, "a"), Expr::number(1.0)),
            (ident(&interner, "b"), Expr::variable(ident(&interner, "a"))),
        ],
        Expr::call(
            ident(&interner, "print"),
            vec![Expr::variable(ident(&interner, "b"))],
        ),
    );

    assert_eq!(print_expr(&tree, &interner), "let a = 1, b = a in print(b)");
}

#[test]
fn test_print_function_declaration() {
    let interner = StringInterner::new();
    let body = Expr::call(
        ident(&interner, "sqrt"),
        vec![Expr::variable(ident(&interner, "x"))],
    );
    let decl = FunctionDecl::new(ident(&interner, "root"), vec![ident(&interner, "x")], body)
        .unwrap();

    assert_eq!(
        print_expr(&Expr::Function(decl), &interner),
        "function root(x) => sqrt(x)"
    );
}

#[test]
fn test_print_keeps_nested_signs_apart() {
    let interner = StringInterner::new();
    let neg_literal = Expr::unary(op(&interner, TokenKind::Minus), Expr::number(-1.0)).unwrap();
    let not_x = Expr::unary(
        op(&interner, TokenKind::Bang),
        Expr::variable(ident(&interner, "x")),
    )
    .unwrap();
    let not_not = Expr::unary(op(&interner, TokenKind::Bang), not_x).unwrap();

    assert_eq!(print_expr(&neg_literal, &interner), "-(-1)");
    assert_eq!(print_expr(&not_not, &interner), "!(!x)");
}

#[test]
fn test_print_escapes_string_literals() {
    let interner = StringInterner::new();
    let text = Expr::literal(Literal::Str(r#"say "hi" \ bye"#.into()));

    assert_eq!(print_expr(&text, &interner), r#""say \"hi\" \\ bye""#);
}
