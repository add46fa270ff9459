//! Hygienic renaming of binding sites.
//!
//! [`replace`] is an alpha-renaming pass: it rebuilds a tree with every
//! reference to one binding site pointed at another token. [`Renamer`]
//! supplies the fresh tokens, and [`FunctionDecl::hygienic`] combines the two
//! to give each parameter of a declaration a name that cannot collide with
//! any user-written identifier.
//!
//! # Resolution
//!
//! `replace(tree, old, new)` treats `tree` as the scope of `old` (a function
//! body for a parameter). A token refers to `old` when it is a handle of the
//! same binding site, or when it is a reference with the same lexeme that no
//! intervening `let` binding or parameter of the same lexeme shadows.
//! Shadowing binding sites and everything inside their scope keep their
//! tokens.

use crate::ast::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, FunctionDecl, LetBinding, LetInExpr, UnaryExpr,
};
use crate::{Literal, StringInterner, Token, Visitor};

/// Rebuild `tree` with every reference to `old` replaced by `new`.
pub fn replace(tree: &Expr, old: &Token, new: &Token) -> Expr {
    tree.accept(&mut TokenReplacer {
        scope: Resolution::new(old),
        new,
    })
}

/// Count the references to `token` inside `tree`, with the same resolution
/// rules as [`replace`].
pub fn occurrences(tree: &Expr, token: &Token) -> usize {
    tree.accept(&mut Occurrences {
        scope: Resolution::new(token),
    })
}

/// Tracks whether bare references to the target lexeme still resolve to
/// the target binding site.
struct Resolution<'a> {
    target: &'a Token,
    visible: bool,
}

impl<'a> Resolution<'a> {
    fn new(target: &'a Token) -> Self {
        Resolution {
            target,
            visible: true,
        }
    }

    fn refers_to_target(&self, token: &Token) -> bool {
        token.same_site(self.target)
            || (self.visible && token.lexeme() == self.target.lexeme())
    }

    fn shadows_target(&self, binding: &Token) -> bool {
        binding.lexeme() == self.target.lexeme() && !binding.same_site(self.target)
    }
}

struct TokenReplacer<'a> {
    scope: Resolution<'a>,
    new: &'a Token,
}

impl TokenReplacer<'_> {
    fn reference(&self, token: &Token) -> Token {
        if self.scope.refers_to_target(token) {
            self.new.clone()
        } else {
            token.clone()
        }
    }

    fn binding_site(&self, token: &Token) -> Token {
        if token.same_site(self.scope.target) {
            self.new.clone()
        } else {
            token.clone()
        }
    }

    fn boxed(&mut self, expr: &Expr) -> Box<Expr> {
        Box::new(expr.accept(self))
    }
}

impl Visitor for TokenReplacer<'_> {
    type Output = Expr;

    fn visit_literal(&mut self, literal: &Literal) -> Expr {
        Expr::Literal(literal.clone())
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> Expr {
        Expr::Unary(UnaryExpr {
            operator: expr.operator.clone(),
            op: expr.op,
            operand: self.boxed(&expr.operand),
        })
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Expr {
        Expr::Binary(BinaryExpr {
            left: self.boxed(&expr.left),
            operator: expr.operator.clone(),
            op: expr.op,
            right: self.boxed(&expr.right),
        })
    }

    fn visit_conditional(&mut self, expr: &ConditionalExpr) -> Expr {
        Expr::Conditional(ConditionalExpr {
            condition: self.boxed(&expr.condition),
            then_branch: self.boxed(&expr.then_branch),
            else_branch: self.boxed(&expr.else_branch),
            then_offset: expr.then_offset,
            else_offset: expr.else_offset,
        })
    }

    fn visit_let_in(&mut self, expr: &LetInExpr) -> Expr {
        let visible = self.scope.visible;
        let mut bindings = Vec::with_capacity(expr.bindings.len());
        for binding in &expr.bindings {
            // The value is evaluated before its own binding is pushed.
            let value = binding.value.accept(self);
            if self.scope.shadows_target(&binding.identifier) {
                self.scope.visible = false;
            }
            bindings.push(LetBinding {
                identifier: self.binding_site(&binding.identifier),
                value,
            });
        }
        let body = self.boxed(&expr.body);
        self.scope.visible = visible;
        Expr::LetIn(LetInExpr { bindings, body })
    }

    fn visit_variable(&mut self, identifier: &Token) -> Expr {
        Expr::Variable(self.reference(identifier))
    }

    fn visit_function(&mut self, decl: &FunctionDecl) -> Expr {
        let visible = self.scope.visible;
        if decl.parameters.iter().any(|p| self.scope.shadows_target(p)) {
            self.scope.visible = false;
        }
        let parameters = decl
            .parameters
            .iter()
            .map(|p| self.binding_site(p))
            .collect();
        let body = self.boxed(&decl.body);
        self.scope.visible = visible;
        Expr::Function(FunctionDecl {
            identifier: decl.identifier.clone(),
            parameters,
            body,
        })
    }

    fn visit_call(&mut self, expr: &CallExpr) -> Expr {
        Expr::Call(CallExpr {
            identifier: expr.identifier.clone(),
            arguments: expr.arguments.iter().map(|a| a.accept(self)).collect(),
        })
    }
}

struct Occurrences<'a> {
    scope: Resolution<'a>,
}

impl Visitor for Occurrences<'_> {
    type Output = usize;

    fn visit_literal(&mut self, _literal: &Literal) -> usize {
        0
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> usize {
        expr.operand.accept(self)
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> usize {
        expr.left.accept(self) + expr.right.accept(self)
    }

    fn visit_conditional(&mut self, expr: &ConditionalExpr) -> usize {
        expr.condition.accept(self) + expr.then_branch.accept(self) + expr.else_branch.accept(self)
    }

    fn visit_let_in(&mut self, expr: &LetInExpr) -> usize {
        let visible = self.scope.visible;
        let mut count = 0;
        for binding in &expr.bindings {
            count += binding.value.accept(self);
            if binding.identifier.same_site(self.scope.target) {
                count += 1;
            }
            if self.scope.shadows_target(&binding.identifier) {
                self.scope.visible = false;
            }
        }
        count += expr.body.accept(self);
        self.scope.visible = visible;
        count
    }

    fn visit_variable(&mut self, identifier: &Token) -> usize {
        usize::from(self.scope.refers_to_target(identifier))
    }

    fn visit_function(&mut self, decl: &FunctionDecl) -> usize {
        let visible = self.scope.visible;
        let mut count = 0;
        for param in &decl.parameters {
            if param.same_site(self.scope.target) {
                count += 1;
            }
            if self.scope.shadows_target(param) {
                self.scope.visible = false;
            }
        }
        count += decl.body.accept(self);
        self.scope.visible = visible;
        count
    }

    fn visit_call(&mut self, expr: &CallExpr) -> usize {
        expr.arguments.iter().map(|a| a.accept(self)).sum()
    }
}

/// Source of fresh, collision-free parameter tokens.
///
/// A fresh lexeme is the original lexeme followed by `#` and a counter
/// value. The scanner never produces `#` inside an identifier, and the
/// counter never repeats, so fresh names are unique by construction.
#[derive(Debug, Default)]
pub struct Renamer {
    next: u32,
}

impl Renamer {
    pub fn new() -> Self {
        Renamer { next: 0 }
    }

    /// Create a fresh binding site derived from `token`.
    pub fn fresh(&mut self, token: &Token, interner: &StringInterner) -> Token {
        let lexeme = format!("{}#{}", interner.lookup(token.lexeme()), self.next);
        self.next += 1;
        token.renamed(interner.intern(&lexeme))
    }

    /// Number of fresh tokens handed out so far.
    pub fn issued(&self) -> u32 {
        self.next
    }
}

impl FunctionDecl {
    /// Rename every parameter to a fresh token and rewrite the body to match.
    #[must_use]
    pub fn hygienic(self, renamer: &mut Renamer, interner: &StringInterner) -> FunctionDecl {
        let FunctionDecl {
            identifier,
            parameters,
            body,
        } = self;

        let mut body = *body;
        let mut renamed = Vec::with_capacity(parameters.len());
        for param in &parameters {
            let fresh = renamer.fresh(param, interner);
            body = replace(&body, param, &fresh);
            renamed.push(fresh);
        }

        FunctionDecl {
            identifier,
            parameters: renamed,
            body: Box::new(body),
        }
    }
}
