//! Diagnostics for the Hulk evaluation core.
//!
//! Every failure surfaces as a [`HulkError`] classified by [`ErrorKind`]:
//! lexical, syntactic, or semantic. Errors are raised where they are
//! detected and propagated with `?`; the driver hands each failed run to a
//! [`Reporter`] exactly once before returning the error to its caller.
//!
//! Semantic conditions are built through the factory functions in
//! [`errors`] so that message wording lives in one place.

mod error;
pub mod errors;
mod reporter;

pub use error::{ErrorKind, HulkError};
pub use reporter::{report_and_raise, BufferReporter, Reporter, TerminalReporter};

/// Result alias used across the evaluation core.
pub type HulkResult<T> = Result<T, HulkError>;
