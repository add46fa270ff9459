//! Hulk Eval - environment and reference evaluator.
//!
//! # Architecture
//!
//! - `Environment`: per-name variable binding stacks, the function table
//!   keyed by name and arity, and the reserved built-in set
//! - `ScopedInterpreter`: RAII guard that pops every binding it pushed
//! - `Interpreter`: tree walker implementing the `Visitor` protocol
//! - `evaluate_binary` / `evaluate_unary`: operator dispatch on `Value`s
//! - `Builtin`: intrinsic behaviour of the reserved functions
//!
//! Functions are registered once, before evaluation, and renamed
//! hygienically at registration. Variables are bound dynamically: a call
//! pushes its (renamed) parameters on top of whatever the caller has bound.

mod builtins;
mod call_stack;
mod environment;
mod eval_mode;
pub mod interpreter;
mod operators;
mod print_handler;
mod stack;
mod value;

pub use builtins::Builtin;
pub use call_stack::{CallFrame, CallStack};
pub use environment::Environment;
pub use eval_mode::EvalMode;
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use stack::ensure_sufficient_stack;
pub use value::Value;

/// Result of evaluating an expression.
pub type EvalResult = hulk_diagnostic::HulkResult<Value>;

#[cfg(test)]
mod tests;
