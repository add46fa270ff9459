//! RAII scope guards for environment bindings.
//!
//! [`ScopedInterpreter`] remembers every binding pushed through it and
//! removes them, innermost first, when dropped: on normal return, on `?`
//! propagation, and during unwinding. If a `bind` fails midway, only the
//! bindings that were actually pushed are removed.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! evaluation continues through the guard:
//!
//! ```text
//! let mut scoped = interpreter.scoped();
//! scoped.bind(&x, value)?;
//! body.accept(&mut *scoped)
//! // `x` removed here
//! ```

use std::ops::{Deref, DerefMut};

use hulk_diagnostic::HulkResult;
use hulk_ir::Token;

use super::Interpreter;
use crate::{CallFrame, Value};

pub struct ScopedInterpreter<'guard, 'interp> {
    interpreter: &'guard mut Interpreter<'interp>,
    /// Tokens bound through this guard, in push order.
    bound: Vec<Token>,
    /// Whether this guard owns the top call frame.
    frame: bool,
}

impl ScopedInterpreter<'_, '_> {
    /// Push a binding that lives until the guard is dropped. Nothing is
    /// pushed on error.
    pub fn bind(&mut self, identifier: &Token, value: Value) -> HulkResult<()> {
        self.interpreter.env.set(identifier, value)?;
        self.bound.push(identifier.clone());
        Ok(())
    }

    /// Number of bindings this guard will remove.
    #[inline]
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }
}

impl Drop for ScopedInterpreter<'_, '_> {
    fn drop(&mut self) {
        for identifier in self.bound.iter().rev() {
            self.interpreter.env.remove(identifier);
        }
        if self.frame {
            self.interpreter.call_stack.pop();
        }
    }
}

impl<'interp> Deref for ScopedInterpreter<'_, 'interp> {
    type Target = Interpreter<'interp>;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedInterpreter<'_, '_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl<'a> Interpreter<'a> {
    /// Open a binding scope that is unwound when the guard drops.
    pub fn scoped(&mut self) -> ScopedInterpreter<'_, 'a> {
        ScopedInterpreter {
            interpreter: self,
            bound: Vec::new(),
            frame: false,
        }
    }

    /// Open a binding scope for a user-function call. Fails without
    /// pushing anything if the call would exceed the recursion limit.
    pub(crate) fn call_frame(&mut self, frame: CallFrame) -> HulkResult<ScopedInterpreter<'_, 'a>> {
        self.call_stack.push(frame)?;
        Ok(ScopedInterpreter {
            interpreter: self,
            bound: Vec::new(),
            frame: true,
        })
    }

    /// Run `f` with `bindings` pushed in order; all of them are removed
    /// when `f` returns or a binding fails.
    pub fn with_bindings<T, F, I>(&mut self, bindings: I, f: F) -> HulkResult<T>
    where
        F: FnOnce(&mut ScopedInterpreter<'_, 'a>) -> HulkResult<T>,
        I: IntoIterator<Item = (Token, Value)>,
    {
        let mut scoped = self.scoped();
        for (identifier, value) in bindings {
            scoped.bind(&identifier, value)?;
        }
        f(&mut scoped)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
