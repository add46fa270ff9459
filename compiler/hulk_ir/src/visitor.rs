//! AST Visitor Protocol
//!
//! Every consumer of the expression tree (evaluator, printer, rewriter)
//! implements [`Visitor`] with one handler per [`Expr`] variant.
//! [`Expr::accept`] forwards to the handler that matches the node and
//! returns its result unchanged.
//!
//! # Design
//!
//! The variant set is closed: adding a variant is a compile error in every
//! consumer until it gains a handler. Consumers are open: a new
//! interpretation of the tree is a new `Visitor` impl, with no change to the
//! AST types.
//!
//! Handlers receive the node by reference and decide themselves whether and
//! in what order to descend into children (by calling `accept` on them).
//!
//! # Example
//!
//! ```text
//! struct CountCalls;
//!
//! impl Visitor for CountCalls {
//!     type Output = usize;
//!     fn visit_call(&mut self, call: &CallExpr) -> usize {
//!         1 + call.arguments.iter().map(|a| a.accept(self)).sum::<usize>()
//!     }
//!     // ... one handler per variant
//! }
//! ```

use crate::ast::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, FunctionDecl, LetInExpr, UnaryExpr,
};
use crate::{Literal, Token};

/// Double-dispatch target for [`Expr::accept`].
pub trait Visitor {
    /// Result of visiting a node.
    type Output;

    fn visit_literal(&mut self, literal: &Literal) -> Self::Output;

    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;

    fn visit_conditional(&mut self, expr: &ConditionalExpr) -> Self::Output;

    fn visit_let_in(&mut self, expr: &LetInExpr) -> Self::Output;

    fn visit_variable(&mut self, identifier: &Token) -> Self::Output;

    fn visit_function(&mut self, decl: &FunctionDecl) -> Self::Output;

    fn visit_call(&mut self, expr: &CallExpr) -> Self::Output;
}

impl Expr {
    /// Dispatch to the visitor handler for this node's variant.
    #[inline]
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(literal) => visitor.visit_literal(literal),
            Expr::Unary(expr) => visitor.visit_unary(expr),
            Expr::Binary(expr) => visitor.visit_binary(expr),
            Expr::Conditional(expr) => visitor.visit_conditional(expr),
            Expr::LetIn(expr) => visitor.visit_let_in(expr),
            Expr::Variable(identifier) => visitor.visit_variable(identifier),
            Expr::Function(decl) => visitor.visit_function(decl),
            Expr::Call(expr) => visitor.visit_call(expr),
        }
    }
}
