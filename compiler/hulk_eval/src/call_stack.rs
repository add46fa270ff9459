//! Live call stack of user-function calls.
//!
//! Each call to a user function pushes a frame and pops it on return. The
//! depth limit is checked on `push`, so runaway recursion surfaces as a
//! semantic error instead of exhausting memory.

use hulk_diagnostic::{errors, HulkError};
use hulk_ir::Name;

/// A single frame in the live call stack.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Interned function name.
    pub name: Name,
    /// Number of arguments, which selects the overload.
    pub arity: usize,
    /// Offset of the call site.
    pub offset: u32,
}

#[derive(Clone, Debug, Default)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` is `None` for unlimited.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit. The frame is not pushed
    /// on overflow.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), HulkError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(errors::recursion_limit_exceeded(max, frame.offset));
            }
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Pop the most recent call frame.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the stack is empty.
    pub fn pop(&mut self) {
        debug_assert!(
            !self.frames.is_empty(),
            "CallStack::pop() called on empty stack"
        );
        self.frames.pop();
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn current_frame(&self) -> Option<&CallFrame> {
        self.frames.last()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
