//! Pretty-printer for expression trees.
//!
//! Renders an [`Expr`] back to Hulk surface syntax. Nested compound operands
//! are parenthesized; everything else prints as written. Used for debug
//! logging of registered declarations and in tests.

use crate::ast::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, FunctionDecl, LetInExpr, UnaryExpr,
};
use crate::{Literal, StringInterner, Token, Visitor};

/// Render `expr` as Hulk source text.
pub fn print_expr(expr: &Expr, interner: &StringInterner) -> String {
    expr.accept(&mut Printer { interner })
}

struct Printer<'a> {
    interner: &'a StringInterner,
}

impl Printer<'_> {
    fn name(&self, token: &Token) -> &'static str {
        self.interner.lookup(token.lexeme())
    }

    /// Print an operand, wrapping it in parentheses if it is compound.
    fn operand(&mut self, expr: &Expr) -> String {
        let text = expr.accept(self);
        match expr {
            Expr::Binary(_) | Expr::Conditional(_) | Expr::LetIn(_) | Expr::Function(_) => {
                format!("({text})")
            }
            _ => text,
        }
    }

    /// Operand of a prefix operator. A nested prefix or a negative number
    /// is parenthesized so the two signs stay apart: `-(-1)`, `!(!x)`.
    fn prefix_operand(&mut self, expr: &Expr) -> String {
        let nested_sign = match expr {
            Expr::Unary(_) => true,
            Expr::Literal(Literal::Number(n)) => n.is_sign_negative(),
            _ => false,
        };
        if nested_sign {
            format!("({})", expr.accept(self))
        } else {
            self.operand(expr)
        }
    }

    fn list(&mut self, items: &[Expr]) -> String {
        items
            .iter()
            .map(|item| item.accept(self))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Visitor for Printer<'_> {
    type Output = String;

    fn visit_literal(&mut self, literal: &Literal) -> String {
        literal.to_string()
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("{}{}", expr.op.as_symbol(), self.prefix_operand(&expr.operand))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        let left = self.operand(&expr.left);
        let right = self.operand(&expr.right);
        format!("{left} {} {right}", expr.op.as_symbol())
    }

    fn visit_conditional(&mut self, expr: &ConditionalExpr) -> String {
        let condition = expr.condition.accept(self);
        let then_branch = self.operand(&expr.then_branch);
        let else_branch = expr.else_branch.accept(self);
        format!("if ({condition}) {then_branch} else {else_branch}")
    }

    fn visit_let_in(&mut self, expr: &LetInExpr) -> String {
        let bindings = expr
            .bindings
            .iter()
            .map(|b| format!("{} = {}", self.name(&b.identifier), b.value.accept(self)))
            .collect::<Vec<_>>()
            .join(", ");
        format!("let {bindings} in {}", expr.body.accept(self))
    }

    fn visit_variable(&mut self, identifier: &Token) -> String {
        self.name(identifier).to_string()
    }

    fn visit_function(&mut self, decl: &FunctionDecl) -> String {
        let params = decl
            .parameters
            .iter()
            .map(|p| self.name(p))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "function {}({params}) => {}",
            self.name(&decl.identifier),
            decl.body.accept(self)
        )
    }

    fn visit_call(&mut self, expr: &CallExpr) -> String {
        format!("{}({})", self.name(&expr.identifier), self.list(&expr.arguments))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
