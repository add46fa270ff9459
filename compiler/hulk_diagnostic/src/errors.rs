//! Error factories.
//!
//! One function per error condition. Callers resolve interned names to text
//! before calling; offsets are the offset of the token that triggered the
//! error unless noted otherwise.

use hulk_ir::{AstError, StringInterner};

use crate::HulkError;

/// Offset just past `name` when it starts at `offset`. Offsets count
/// characters, not bytes.
fn end_of(name: &str, offset: u32) -> u32 {
    offset.saturating_add(u32::try_from(name.chars().count()).unwrap_or(u32::MAX))
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// Variables

/// A variable is read with no active binding.
#[cold]
pub fn undeclared_variable(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(format!("variable '{name}' is used but not declared"), offset)
}

/// A declared function name is read as a variable. Reported just past the
/// name, where the `(` was expected.
#[cold]
pub fn missing_call_parens(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("missing '(' after call to function '{name}'"),
        end_of(name, offset),
    )
}

/// A binding would shadow a declared function name.
#[cold]
pub fn function_name_as_variable(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("function name '{name}' cannot be used as the name of a variable"),
        offset,
    )
}

// Declarations

#[cold]
pub fn builtin_redefinition(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("'{name}' is a built-in function and cannot be redefined"),
        offset,
    )
}

#[cold]
pub fn function_redeclaration(name: &str, arity: usize, offset: u32) -> HulkError {
    HulkError::semantic(
        format!(
            "cannot redeclare function '{name}' with {arity} parameter{}",
            plural(arity)
        ),
        offset,
    )
}

/// A function declaration appears inside an expression.
#[cold]
pub fn declaration_not_allowed(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("function '{name}' can only be declared at the top level"),
        offset,
    )
}

/// A declaration accessor was called for a `(name, arity)` pair that was
/// never registered. Callers are expected to check with
/// `is_function_with_arity` first, so this has no source position.
#[cold]
pub fn unknown_declaration(name: &str, arity: usize) -> HulkError {
    HulkError::new(
        crate::ErrorKind::Semantic,
        format!(
            "no function '{name}' with {arity} parameter{} is registered",
            plural(arity)
        ),
        None,
    )
}

// Calls

#[cold]
pub fn undefined_function(name: &str, offset: u32) -> HulkError {
    HulkError::semantic(format!("function '{name}' is not declared"), offset)
}

/// The name is declared, but not with `got` parameters.
#[cold]
pub fn no_matching_overload(name: &str, got: usize, available: &[usize], offset: u32) -> HulkError {
    let available = available
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    HulkError::semantic(
        format!(
            "no overload of '{name}' takes {got} argument{} (available: {available})",
            plural(got)
        ),
        offset,
    )
}

#[cold]
pub fn recursion_limit_exceeded(limit: usize, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("maximum recursion depth exceeded ({limit} nested calls)"),
        offset,
    )
}

// Values

/// A built-in or construct received a value of the wrong type.
#[cold]
pub fn type_mismatch(context: &str, expected: &str, got: &str, offset: u32) -> HulkError {
    HulkError::semantic(format!("{context} expects {expected}, found {got}"), offset)
}

/// An operator was applied to operands it does not support.
#[cold]
pub fn invalid_operand(op: &str, expected: &str, got: &str, offset: u32) -> HulkError {
    HulkError::semantic(
        format!("operator '{op}' cannot be applied to {got}; expected {expected}"),
        offset,
    )
}

#[cold]
pub fn non_boolean_condition(got: &str, offset: u32) -> HulkError {
    HulkError::semantic(format!("condition must be boolean, found {got}"), offset)
}

// Tree construction

#[cold]
pub fn invalid_unary_operator(symbol: &str, offset: u32) -> HulkError {
    HulkError::syntactic(format!("'{symbol}' is not a unary operator"), offset)
}

#[cold]
pub fn invalid_binary_operator(symbol: &str, offset: u32) -> HulkError {
    HulkError::syntactic(format!("'{symbol}' is not a binary operator"), offset)
}

/// Convert a tree construction failure into a syntactic error.
#[cold]
pub fn from_ast_error(err: &AstError, interner: &StringInterner) -> HulkError {
    match err {
        AstError::InvalidUnaryOperator { kind, offset } => {
            invalid_unary_operator(kind.display_name(), *offset)
        }
        AstError::InvalidBinaryOperator { kind, offset } => {
            invalid_binary_operator(kind.display_name(), *offset)
        }
        AstError::DuplicateParameter {
            function,
            parameter,
            offset,
        } => HulkError::syntactic(
            format!(
                "parameter '{}' is declared twice in function '{}'",
                interner.lookup(*parameter),
                interner.lookup(*function)
            ),
            *offset,
        ),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
