//! Hulk IR - tokens and expression trees.
//!
//! This crate contains the data structures shared by every stage of the
//! Hulk pipeline:
//! - Names for interned identifiers
//! - Tokens produced by the scanner
//! - The closed `Expr` sum type produced by the parser
//! - The `Visitor` protocol used by every tree consumer
//! - Hygienic parameter renaming (`rewrite`)
//! - A pretty-printer (`printer`)
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier text becomes `Name(u32)`
//! - **Closed AST, open operations**: new consumers implement `Visitor`,
//!   new syntax means touching every consumer
//! - **Identity, not text**: tokens compare by binding site (`TokenId`)

pub mod ast;
mod interner;
mod name;
pub mod printer;
pub mod rewrite;
mod token;
pub mod visitor;

pub use ast::{
    AstError, BinaryExpr, BinaryOp, CallExpr, ConditionalExpr, Expr, FunctionDecl, LetBinding,
    LetInExpr, UnaryExpr, UnaryOp,
};
pub use interner::{SharedInterner, StringInterner};
pub use name::Name;
pub use printer::print_expr;
pub use rewrite::{occurrences, replace, Renamer};
pub use token::{Literal, Token, TokenId, TokenKind};
pub use visitor::Visitor;
