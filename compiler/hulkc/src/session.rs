//! Evaluation session.
//!
//! A session owns one environment for its whole lifetime: functions
//! declared by one program stay callable from every later program, as in
//! an interactive prompt. Variable bindings never outlive a run.

use hulk_diagnostic::{report_and_raise, HulkResult, Reporter};
use hulk_eval::{
    buffer_handler, stdout_handler, Environment, EvalMode, InterpreterBuilder, SharedPrintHandler,
    Value,
};
use hulk_ir::SharedInterner;

use crate::Program;

/// Session settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print destination and default recursion limit.
    pub mode: EvalMode,
    /// Seed for `rand()`; random when unset.
    pub seed: Option<u64>,
    /// Overrides the mode's recursion limit.
    pub max_call_depth: Option<usize>,
}

impl SessionConfig {
    /// Settings for running under test: captured output, bounded
    /// recursion, deterministic `rand()`.
    pub fn test_run() -> Self {
        SessionConfig {
            mode: EvalMode::TestRun,
            seed: Some(0),
            max_call_depth: None,
        }
    }
}

pub struct Session<R: Reporter> {
    config: SessionConfig,
    interner: SharedInterner,
    env: Environment,
    print_handler: SharedPrintHandler,
    reporter: R,
}

impl<R: Reporter> Session<R> {
    pub fn new(config: SessionConfig, interner: SharedInterner, reporter: R) -> Self {
        let print_handler = if config.mode.allows_io() {
            stdout_handler()
        } else {
            buffer_handler()
        };
        Session {
            env: Environment::new(interner.clone()),
            config,
            interner,
            print_handler,
            reporter,
        }
    }

    /// Register the program's declarations, then evaluate its body.
    ///
    /// A failure is reported exactly once and then returned. Declarations
    /// registered before a failing one stay registered.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(declarations = program.declarations.len())
    )]
    pub fn run(&mut self, program: Program) -> HulkResult<Value> {
        match self.execute(program) {
            Ok(value) => Ok(value),
            Err(error) => {
                tracing::debug!(error_type = error.error_type(), "run failed");
                report_and_raise(&mut self.reporter, error)
            }
        }
    }

    /// Run the output of an upstream stage. A lexical or syntactic error
    /// from the scanner or parser is reported like any other failure.
    pub fn run_parsed(&mut self, parsed: HulkResult<Program>) -> HulkResult<Value> {
        match parsed {
            Ok(program) => self.run(program),
            Err(error) => report_and_raise(&mut self.reporter, error),
        }
    }

    fn execute(&mut self, program: Program) -> HulkResult<Value> {
        let Program { declarations, body } = program;
        for decl in declarations {
            self.env.register(decl)?;
        }

        let mut builder = InterpreterBuilder::new(&mut self.env)
            .mode(self.config.mode)
            .print_handler(self.print_handler.clone());
        if let Some(seed) = self.config.seed {
            builder = builder.seed(seed);
        }
        if let Some(depth) = self.config.max_call_depth {
            builder = builder.max_call_depth(depth);
        }
        builder.build().eval(&body)
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    #[inline]
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Output of `print`; empty unless the mode captures it.
    pub fn output(&self) -> String {
        self.print_handler.get_output()
    }

    #[inline]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
