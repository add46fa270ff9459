//! Evaluation modes.
//!
//! `EvalMode` selects the evaluation policy: where `print` writes and how
//! deep calls may nest.

/// Evaluation mode, dispatched by `match` in the policy methods below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Run a program: `print` goes to stdout, recursion is bounded only by
    /// memory (the stack grows on demand).
    #[default]
    Interpret,
    /// Run under test: `print` is captured, recursion is bounded.
    TestRun,
}

impl EvalMode {
    /// Whether `print` may write to the process's stdout.
    #[inline]
    pub fn allows_io(self) -> bool {
        matches!(self, Self::Interpret)
    }

    /// Maximum call depth, or `None` for unlimited.
    ///
    /// - `Interpret`: `None` on native targets, 200 on WASM
    /// - `TestRun`: always 500
    #[inline]
    pub fn max_recursion_depth(self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::TestRun => Some(500),
        }
    }
}
