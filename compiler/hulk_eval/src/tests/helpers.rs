//! Tree-building helpers standing in for the parser.
//!
//! Every helper call scans a fresh token, the way a parser would produce
//! one token per occurrence in the source.

use std::cell::Cell;

use hulk_ir::{Expr, FunctionDecl, Literal, SharedInterner, Token, TokenKind};

use crate::Environment;

pub(crate) struct Source {
    pub interner: SharedInterner,
    offset: Cell<u32>,
}

impl Source {
    pub fn new() -> Self {
        Source {
            interner: SharedInterner::new(),
            offset: Cell::new(0),
        }
    }

    pub fn env(&self) -> Environment {
        Environment::new(self.interner.clone())
    }

    fn next_offset(&self) -> u32 {
        let offset = self.offset.get();
        self.offset.set(offset + 2);
        offset
    }

    pub fn ident(&self, name: &str) -> Token {
        Token::identifier(self.interner.intern(name), self.next_offset())
    }

    pub fn ident_at(&self, name: &str, offset: u32) -> Token {
        Token::identifier(self.interner.intern(name), offset)
    }

    fn op(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.interner.intern(kind.display_name()),
            None,
            self.next_offset(),
        )
    }

    pub fn num(&self, n: f64) -> Expr {
        Expr::number(n)
    }

    pub fn string(&self, s: &str) -> Expr {
        Expr::literal(Literal::Str(s.to_string()))
    }

    pub fn boolean(&self, b: bool) -> Expr {
        Expr::literal(Literal::Bool(b))
    }

    pub fn var(&self, name: &str) -> Expr {
        Expr::variable(self.ident(name))
    }

    pub fn unary(&self, kind: TokenKind, operand: Expr) -> Expr {
        Expr::unary(self.op(kind), operand).unwrap()
    }

    pub fn binary(&self, left: Expr, kind: TokenKind, right: Expr) -> Expr {
        Expr::binary(left, self.op(kind), right).unwrap()
    }

    pub fn if_else(&self, condition: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
        let then_offset = self.next_offset();
        let else_offset = self.next_offset();
        Expr::conditional(condition, then_branch, else_branch, then_offset, else_offset)
    }

    pub fn let_in(&self, bindings: Vec<(&str, Expr)>, body: Expr) -> Expr {
        let bindings = bindings
            .into_iter()
            .map(|(name, value)| (self.ident(name), value))
            .collect();
        Expr::let_in(bindings, body)
    }

    pub fn call(&self, name: &str, arguments: Vec<Expr>) -> Expr {
        Expr::call(self.ident(name), arguments)
    }

    pub fn function(&self, name: &str, params: &[&str], body: Expr) -> FunctionDecl {
        let params = params.iter().map(|p| self.ident(p)).collect();
        FunctionDecl::new(self.ident(name), params, body).unwrap()
    }

    /// `function Max(a, b) => if (a >= b) a else b`
    pub fn max_decl(&self) -> FunctionDecl {
        let condition = self.binary(self.var("a"), TokenKind::GreaterEqual, self.var("b"));
        let body = self.if_else(condition, self.var("a"), self.var("b"));
        self.function("Max", &["a", "b"], body)
    }

    /// `function Fact(n) => if (n <= 1) 1 else n * Fact(n - 1)`
    pub fn fact_decl(&self) -> FunctionDecl {
        let condition = self.binary(self.var("n"), TokenKind::LessEqual, self.num(1.0));
        let recurse = self.call(
            "Fact",
            vec![self.binary(self.var("n"), TokenKind::Minus, self.num(1.0))],
        );
        let body = self.if_else(
            condition,
            self.num(1.0),
            self.binary(self.var("n"), TokenKind::Star, recurse),
        );
        self.function("Fact", &["n"], body)
    }
}
