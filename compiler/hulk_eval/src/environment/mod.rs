//! Environment for name resolution.
//!
//! Holds three tables:
//! - variable bindings: each name maps to a stack of values, innermost last
//! - functions: name → arity → declaration, so overloads differ by arity
//! - the reserved built-in signatures (see [`Builtin`])
//!
//! Every `set` must be balanced by a `remove` of the same name in strict
//! reverse order; the scope guards in `interpreter::scope_guard` do this
//! structurally. A name that is declared as a function can never be bound as
//! a variable, which is why registered parameters are renamed to lexemes
//! the scanner cannot produce.

use std::collections::BTreeMap;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use hulk_diagnostic::{errors, HulkResult};
use hulk_ir::{
    print_expr, Expr, FunctionDecl, Name, Renamer, SharedInterner, StringInterner, Token,
};

use crate::{Builtin, Value};

/// Overloads of one function name, ordered by arity.
type ArityTable = BTreeMap<usize, Rc<FunctionDecl>>;

pub struct Environment {
    interner: SharedInterner,
    variables: FxHashMap<Name, Vec<Value>>,
    functions: FxHashMap<Name, ArityTable>,
    renamer: Renamer,
}

impl Environment {
    pub fn new(interner: SharedInterner) -> Self {
        Environment {
            interner,
            variables: FxHashMap::default(),
            functions: FxHashMap::default(),
            renamer: Renamer::new(),
        }
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Innermost value bound to the identifier's lexeme.
    ///
    /// Reading a declared function name is reported as a missing call,
    /// positioned just past the name.
    pub fn get(&self, identifier: &Token) -> HulkResult<Value> {
        let name = identifier.lexeme();
        if self.functions.contains_key(&name) {
            return Err(errors::missing_call_parens(
                self.interner.lookup(name),
                identifier.offset(),
            ));
        }
        self.variables
            .get(&name)
            .and_then(|stack| stack.last())
            .cloned()
            .ok_or_else(|| {
                errors::undeclared_variable(self.interner.lookup(name), identifier.offset())
            })
    }

    /// Push a binding for the identifier's lexeme. The tables are left
    /// untouched on error.
    pub fn set(&mut self, identifier: &Token, value: Value) -> HulkResult<()> {
        let name = identifier.lexeme();
        if self.functions.contains_key(&name) {
            return Err(errors::function_name_as_variable(
                self.interner.lookup(name),
                identifier.offset(),
            ));
        }
        tracing::trace!(name = self.interner.lookup(name), %value, "bind");
        self.variables.entry(name).or_default().push(value);
        Ok(())
    }

    /// Pop the innermost binding for the identifier's lexeme, dropping the
    /// entry once its stack is empty.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the lexeme has no active binding. In
    /// release builds an unbalanced remove is ignored.
    pub fn remove(&mut self, identifier: &Token) {
        let name = identifier.lexeme();
        let stack = self.variables.get_mut(&name);
        debug_assert!(
            stack.is_some(),
            "remove of unbound variable '{}'",
            self.interner.lookup(name)
        );
        let Some(stack) = stack else {
            return;
        };
        stack.pop();
        tracing::trace!(name = self.interner.lookup(name), depth = stack.len(), "unbind");
        if stack.is_empty() {
            self.variables.remove(&name);
        }
    }

    /// Register a top-level function declaration.
    ///
    /// Fails if `(name, arity)` is a built-in or already declared. On
    /// success every parameter is renamed to a fresh token before the
    /// declaration is stored.
    pub fn register(&mut self, decl: FunctionDecl) -> HulkResult<()> {
        let name = decl.name();
        let arity = decl.arity();
        let offset = decl.identifier.offset();
        let text = self.interner.lookup(name);

        if self.is_builtin(name, arity) {
            return Err(errors::builtin_redefinition(text, offset));
        }
        if self.is_function_with_arity(&decl.identifier, arity) {
            return Err(errors::function_redeclaration(text, arity, offset));
        }

        let decl = decl.hygienic(&mut self.renamer, &self.interner);
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!(
                signature = %format!("{text}/{arity}"),
                decl = %print_expr(&Expr::Function(decl.clone()), &self.interner),
                "registered function"
            );
        }
        self.functions
            .entry(name)
            .or_default()
            .insert(arity, Rc::new(decl));
        Ok(())
    }

    /// Whether any overload is declared under the identifier's lexeme.
    #[inline]
    pub fn is_function(&self, identifier: &Token) -> bool {
        self.functions.contains_key(&identifier.lexeme())
    }

    pub fn is_function_with_arity(&self, identifier: &Token, arity: usize) -> bool {
        self.functions
            .get(&identifier.lexeme())
            .is_some_and(|table| table.contains_key(&arity))
    }

    /// Renamed parameters of the `(name, arity)` overload.
    pub fn arguments(&self, name: Name, arity: usize) -> HulkResult<&[Token]> {
        self.lookup_decl(name, arity).map(|decl| decl.parameters.as_slice())
    }

    /// Body of the `(name, arity)` overload, rewritten to use the renamed
    /// parameters.
    pub fn body(&self, name: Name, arity: usize) -> HulkResult<&Expr> {
        self.lookup_decl(name, arity).map(|decl| &*decl.body)
    }

    /// Declared arities of `name`, ascending. Empty if `name` is not a
    /// function.
    pub fn arities(&self, name: Name) -> Vec<usize> {
        self.functions
            .get(&name)
            .map(|table| table.keys().copied().collect())
            .unwrap_or_default()
    }

    #[inline]
    pub fn is_builtin(&self, name: Name, arity: usize) -> bool {
        Builtin::lookup(self.interner.lookup(name), arity).is_some()
    }

    /// Shared handle to a stored declaration.
    pub fn declaration(&self, name: Name, arity: usize) -> Option<Rc<FunctionDecl>> {
        self.functions.get(&name)?.get(&arity).cloned()
    }

    /// Number of active bindings for the identifier's lexeme.
    pub fn binding_depth(&self, identifier: &Token) -> usize {
        self.variables.get(&identifier.lexeme()).map_or(0, Vec::len)
    }

    /// Whether no variable is bound at all.
    #[inline]
    pub fn is_unbound(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of registered `(name, arity)` declarations.
    pub fn function_count(&self) -> usize {
        self.functions.values().map(BTreeMap::len).sum()
    }

    fn lookup_decl(&self, name: Name, arity: usize) -> HulkResult<&FunctionDecl> {
        self.functions
            .get(&name)
            .and_then(|table| table.get(&arity))
            .map(|decl| &**decl)
            .ok_or_else(|| errors::unknown_declaration(self.interner.lookup(name), arity))
    }
}
