//! Token types shared by the scanner, the parser, and the evaluation core.

mod kind;

pub use kind::TokenKind;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, Ordering};

use crate::Name;

/// Source of fresh token identities.
static NEXT_TOKEN_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a token's binding site.
///
/// Every call to [`Token::new`] (and every rename) draws a fresh id; clones
/// keep the id of the token they were cloned from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenId(u32);

impl TokenId {
    fn fresh() -> Self {
        TokenId(NEXT_TOKEN_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Semantic value carried by literal tokens and literal expressions.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    Number(f64),
    Str(String),
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' | '\\' => write!(f, "\\{c}")?,
                        _ => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            }
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// A lexical unit.
///
/// Tokens are immutable once constructed. Equality and hashing are by
/// identity: two tokens are equal only if one is a clone of the other,
/// regardless of their lexemes. Compare [`Token::lexeme`] when text equality
/// is what matters.
#[derive(Clone)]
pub struct Token {
    kind: TokenKind,
    lexeme: Name,
    literal: Option<Literal>,
    offset: u32,
    id: TokenId,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: Name, literal: Option<Literal>, offset: u32) -> Self {
        Token {
            kind,
            lexeme,
            literal,
            offset,
            id: TokenId::fresh(),
        }
    }

    /// Create an identifier token.
    pub fn identifier(lexeme: Name, offset: u32) -> Self {
        Self::new(TokenKind::Identifier, lexeme, None, offset)
    }

    /// Create a new binding site with a different lexeme at the same
    /// source position.
    #[must_use]
    pub fn renamed(&self, lexeme: Name) -> Self {
        Token {
            kind: self.kind,
            lexeme,
            literal: self.literal.clone(),
            offset: self.offset,
            id: TokenId::fresh(),
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> Name {
        self.lexeme
    }

    #[inline]
    pub fn literal(&self) -> Option<&Literal> {
        self.literal.as_ref()
    }

    /// Approximate character offset of the token in its source line.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Returns `true` if both tokens denote the same binding site.
    #[inline]
    pub fn same_site(&self, other: &Token) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.same_site(other)
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}({:?}) #{} @ {}",
            self.kind, self.lexeme, self.id.0, self.offset
        )
    }
}
