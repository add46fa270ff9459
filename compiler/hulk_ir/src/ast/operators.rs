//! Unary and binary operators.

use crate::TokenKind;

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// Logical negation: `!`
    Not,
    /// Arithmetic negation: `-`
    Neg,
}

impl UnaryOp {
    /// Classify an operator token, or `None` if it cannot be unary.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Not),
            TokenKind::Minus => Some(Self::Neg),
            _ => None,
        }
    }

    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Neg => "-",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Text
    Concat,

    // Logical
    And,
    Or,

    // Comparison
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
}

impl BinaryOp {
    /// Classify an operator token, or `None` if it cannot be binary.
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Mod,
            TokenKind::Caret => Self::Pow,
            TokenKind::At => Self::Concat,
            TokenKind::Amp => Self::And,
            TokenKind::Pipe => Self::Or,
            TokenKind::Less => Self::Lt,
            TokenKind::LessEqual => Self::LtEq,
            TokenKind::Greater => Self::Gt,
            TokenKind::GreaterEqual => Self::GtEq,
            TokenKind::EqualEqual => Self::Eq,
            TokenKind::BangEqual => Self::NotEq,
            _ => return None,
        };
        Some(op)
    }

    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Concat => "@",
            Self::And => "&",
            Self::Or => "|",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Eq => "==",
            Self::NotEq => "!=",
        }
    }
}
