//! Expression tree.
//!
//! The AST is a closed sum type: every node is one of the eight [`Expr`]
//! variants. Parents own their children through `Box`/`Vec`, so the tree is
//! acyclic and every node except the root has exactly one parent.
//!
//! Node constructors that carry an invariant (operator classes, unique
//! parameter names) validate it and return [`AstError`] so that a parser
//! can surface the problem as a syntactic error.

mod operators;

pub use operators::{BinaryOp, UnaryOp};

use crate::{Literal, Name, Token, TokenKind};

/// Invalid node construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AstError {
    #[error("'{kind}' is not a unary operator")]
    InvalidUnaryOperator { kind: TokenKind, offset: u32 },
    #[error("'{kind}' is not a binary operator")]
    InvalidBinaryOperator { kind: TokenKind, offset: u32 },
    #[error("parameter declared twice in the same function")]
    DuplicateParameter {
        function: Name,
        parameter: Name,
        offset: u32,
    },
}

impl AstError {
    /// Source offset of the offending token.
    pub fn offset(&self) -> u32 {
        match self {
            AstError::InvalidUnaryOperator { offset, .. }
            | AstError::InvalidBinaryOperator { offset, .. }
            | AstError::DuplicateParameter { offset, .. } => *offset,
        }
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Number, string, or boolean literal.
    Literal(Literal),
    /// `!e`, `-e`
    Unary(UnaryExpr),
    /// `l op r`
    Binary(BinaryExpr),
    /// `if (c) a else b`
    Conditional(ConditionalExpr),
    /// `let a = e1, b = e2 in body`
    LetIn(LetInExpr),
    /// Identifier reference.
    Variable(Token),
    /// `function f(a, b) => body`
    Function(FunctionDecl),
    /// `f(e1, e2)`
    Call(CallExpr),
}

#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub op: UnaryOp,
    pub operand: Box<Expr>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub op: BinaryOp,
    pub right: Box<Expr>,
}

/// Conditional expression. Both branches are mandatory.
#[derive(Clone, Debug, PartialEq)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    /// Offset of the `if` keyword, for diagnostics.
    pub then_offset: u32,
    /// Offset of the `else` keyword, for diagnostics.
    pub else_offset: u32,
}

/// A single `name = value` binding of a `let` expression.
#[derive(Clone, Debug, PartialEq)]
pub struct LetBinding {
    pub identifier: Token,
    pub value: Expr,
}

/// `let` expression. Bindings are evaluated left to right and each one is
/// visible to the bindings after it.
#[derive(Clone, Debug, PartialEq)]
pub struct LetInExpr {
    pub bindings: Vec<LetBinding>,
    pub body: Box<Expr>,
}

/// Function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    pub identifier: Token,
    pub parameters: Vec<Token>,
    pub body: Box<Expr>,
}

impl FunctionDecl {
    /// Create a declaration, rejecting repeated parameter names.
    pub fn new(identifier: Token, parameters: Vec<Token>, body: Expr) -> Result<Self, AstError> {
        for (i, param) in parameters.iter().enumerate() {
            if parameters[..i].iter().any(|p| p.lexeme() == param.lexeme()) {
                return Err(AstError::DuplicateParameter {
                    function: identifier.lexeme(),
                    parameter: param.lexeme(),
                    offset: param.offset(),
                });
            }
        }
        Ok(FunctionDecl {
            identifier,
            parameters,
            body: Box::new(body),
        })
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.identifier.lexeme()
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Function call.
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    pub identifier: Token,
    pub arguments: Vec<Expr>,
}

impl CallExpr {
    #[inline]
    pub fn name(&self) -> Name {
        self.identifier.lexeme()
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

impl Expr {
    pub fn literal(value: Literal) -> Expr {
        Expr::Literal(value)
    }

    pub fn number(value: f64) -> Expr {
        Expr::Literal(Literal::Number(value))
    }

    pub fn unary(operator: Token, operand: Expr) -> Result<Expr, AstError> {
        let op = UnaryOp::from_kind(operator.kind()).ok_or(AstError::InvalidUnaryOperator {
            kind: operator.kind(),
            offset: operator.offset(),
        })?;
        Ok(Expr::Unary(UnaryExpr {
            operator,
            op,
            operand: Box::new(operand),
        }))
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Result<Expr, AstError> {
        let op = BinaryOp::from_kind(operator.kind()).ok_or(AstError::InvalidBinaryOperator {
            kind: operator.kind(),
            offset: operator.offset(),
        })?;
        Ok(Expr::Binary(BinaryExpr {
            left: Box::new(left),
            operator,
            op,
            right: Box::new(right),
        }))
    }

    pub fn conditional(
        condition: Expr,
        then_branch: Expr,
        else_branch: Expr,
        then_offset: u32,
        else_offset: u32,
    ) -> Expr {
        Expr::Conditional(ConditionalExpr {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
            then_offset,
            else_offset,
        })
    }

    pub fn let_in(bindings: Vec<(Token, Expr)>, body: Expr) -> Expr {
        Expr::LetIn(LetInExpr {
            bindings: bindings
                .into_iter()
                .map(|(identifier, value)| LetBinding { identifier, value })
                .collect(),
            body: Box::new(body),
        })
    }

    pub fn variable(identifier: Token) -> Expr {
        Expr::Variable(identifier)
    }

    pub fn call(identifier: Token, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            identifier,
            arguments,
        })
    }

    /// Approximate source offset of the expression, when it has a token.
    pub fn offset(&self) -> Option<u32> {
        match self {
            Expr::Literal(_) => None,
            Expr::Unary(e) => Some(e.operator.offset()),
            Expr::Binary(e) => e.left.offset().or(Some(e.operator.offset())),
            Expr::Conditional(e) => Some(e.then_offset),
            Expr::LetIn(e) => e
                .bindings
                .first()
                .map(|b| b.identifier.offset())
                .or_else(|| e.body.offset()),
            Expr::Variable(t) => Some(t.offset()),
            Expr::Function(f) => Some(f.identifier.offset()),
            Expr::Call(c) => Some(c.identifier.offset()),
        }
    }
}
