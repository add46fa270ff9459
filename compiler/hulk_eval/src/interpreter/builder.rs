//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use super::Interpreter;
use crate::{buffer_handler, stdout_handler, CallStack, Environment, EvalMode, SharedPrintHandler};

/// Builder for [`Interpreter`].
///
/// The mode supplies defaults: `Interpret` prints to stdout with unbounded
/// recursion, `TestRun` captures output with a recursion limit of 500.
/// Explicit settings override the mode's defaults.
pub struct InterpreterBuilder<'a> {
    env: &'a mut Environment,
    mode: EvalMode,
    print_handler: Option<SharedPrintHandler>,
    seed: Option<u64>,
    max_call_depth: Option<usize>,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(env: &'a mut Environment) -> Self {
        InterpreterBuilder {
            env,
            mode: EvalMode::default(),
            print_handler: None,
            seed: None,
            max_call_depth: None,
        }
    }

    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the print handler. Overrides the mode-based default.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Seed the generator behind `rand()` for reproducible runs.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Limit nested user-function calls. Overrides the mode-based default.
    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = Some(depth);
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        let print_handler = self.print_handler.unwrap_or_else(|| {
            if self.mode.allows_io() {
                stdout_handler()
            } else {
                buffer_handler()
            }
        });
        let rng = self
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let max_depth = self.max_call_depth.or(self.mode.max_recursion_depth());

        Interpreter {
            env: self.env,
            mode: self.mode,
            print_handler,
            rng,
            call_stack: CallStack::new(max_depth),
        }
    }
}
