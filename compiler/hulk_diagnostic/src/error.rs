//! Error type and classification.

use std::fmt;

/// Stage of the pipeline that detected an error.
///
/// The three kinds are mutually exclusive: every [`HulkError`] carries
/// exactly one of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raised while scanning source text.
    Lexical,
    /// Raised while building the expression tree.
    Syntactic,
    /// Raised while evaluating, or while registering declarations.
    Semantic,
}

impl ErrorKind {
    /// Fixed label shown to the user in front of the message.
    pub const fn error_type(self) -> &'static str {
        match self {
            ErrorKind::Lexical => "LEXICAL ERROR",
            ErrorKind::Syntactic => "SYNTACTIC ERROR",
            ErrorKind::Semantic => "SEMANTIC ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_type())
    }
}

/// A classified error with a human-readable message.
///
/// `offset` approximates the character position of the problem within its
/// source line. It is `None` when no position applies.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error(
    "{kind}: {message}{}",
    .offset.map_or_else(String::new, |o| format!(" (at offset {o})"))
)]
pub struct HulkError {
    kind: ErrorKind,
    message: String,
    offset: Option<u32>,
}

impl HulkError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, offset: Option<u32>) -> Self {
        HulkError {
            kind,
            message: message.into(),
            offset,
        }
    }

    #[cold]
    pub fn lexical(message: impl Into<String>, offset: u32) -> Self {
        Self::new(ErrorKind::Lexical, message, Some(offset))
    }

    #[cold]
    pub fn syntactic(message: impl Into<String>, offset: u32) -> Self {
        Self::new(ErrorKind::Syntactic, message, Some(offset))
    }

    #[cold]
    pub fn semantic(message: impl Into<String>, offset: u32) -> Self {
        Self::new(ErrorKind::Semantic, message, Some(offset))
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// One of `"LEXICAL ERROR"`, `"SYNTACTIC ERROR"`, `"SEMANTIC ERROR"`.
    #[inline]
    pub fn error_type(&self) -> &'static str {
        self.kind.error_type()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn offset(&self) -> Option<u32> {
        self.offset
    }
}
