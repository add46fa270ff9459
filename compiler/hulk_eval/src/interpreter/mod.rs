//! Tree-walking interpreter for Hulk expressions.
//!
//! The interpreter borrows an [`Environment`] whose functions have already
//! been registered and evaluates an expression through the [`Visitor`]
//! protocol. Every binding it pushes goes through a [`ScopedInterpreter`]
//! guard, so the environment is restored on every exit path.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use hulk_diagnostic::{errors, HulkResult};
use hulk_ir::{
    BinaryExpr, CallExpr, ConditionalExpr, Expr, FunctionDecl, LetInExpr, Literal, Token,
    UnaryExpr, Visitor,
};

use crate::{
    ensure_sufficient_stack, evaluate_binary, evaluate_unary, Builtin, CallFrame, CallStack,
    Environment, EvalMode, EvalResult, SharedPrintHandler, Value,
};

pub struct Interpreter<'a> {
    /// Variable bindings and the function table.
    pub(crate) env: &'a mut Environment,
    /// Evaluation mode: print destination and recursion policy.
    pub(crate) mode: EvalMode,
    /// Destination of the `print` built-in.
    pub(crate) print_handler: SharedPrintHandler,
    /// Source for the `rand` built-in.
    pub(crate) rng: fastrand::Rng,
    /// Active user-function calls; its depth limit bounds recursion.
    pub(crate) call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Create an interpreter in `Interpret` mode writing to stdout.
    pub fn new(env: &'a mut Environment) -> Self {
        InterpreterBuilder::new(env).build()
    }

    /// Evaluate an expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| expr.accept(self))
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        self.env
    }

    #[inline]
    pub fn mode(&self) -> EvalMode {
        self.mode
    }

    #[inline]
    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Number of user-function calls currently active.
    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_stack.depth()
    }

    fn text(&self, token: &Token) -> &'static str {
        self.env.interner().lookup(token.lexeme())
    }

    /// Evaluate call arguments left to right in the caller's scope.
    fn eval_arguments(&mut self, arguments: &[Expr]) -> HulkResult<Vec<Value>> {
        arguments.iter().map(|arg| arg.accept(self)).collect()
    }

    /// Bind the already-evaluated arguments to the declaration's (renamed)
    /// parameters and evaluate its body.
    fn call_function(&mut self, decl: &FunctionDecl, args: Vec<Value>, offset: u32) -> EvalResult {
        let mut scoped = self.call_frame(CallFrame {
            name: decl.name(),
            arity: decl.arity(),
            offset,
        })?;
        for (param, value) in decl.parameters.iter().zip(args) {
            scoped.bind(param, value)?;
        }
        ensure_sufficient_stack(|| decl.body.accept(&mut *scoped))
    }
}

impl Visitor for Interpreter<'_> {
    type Output = EvalResult;

    fn visit_literal(&mut self, literal: &Literal) -> EvalResult {
        Ok(Value::from(literal))
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> EvalResult {
        let operand = expr.operand.accept(self)?;
        evaluate_unary(expr.op, operand, expr.operator.offset())
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> EvalResult {
        let left = expr.left.accept(self)?;
        let right = expr.right.accept(self)?;
        evaluate_binary(left, expr.op, right, expr.operator.offset())
    }

    fn visit_conditional(&mut self, expr: &ConditionalExpr) -> EvalResult {
        match expr.condition.accept(self)? {
            Value::Bool(true) => expr.then_branch.accept(self),
            Value::Bool(false) => expr.else_branch.accept(self),
            other => Err(errors::non_boolean_condition(
                other.type_name(),
                expr.then_offset,
            )),
        }
    }

    fn visit_let_in(&mut self, expr: &LetInExpr) -> EvalResult {
        let mut scoped = self.scoped();
        for binding in &expr.bindings {
            let value = binding.value.accept(&mut *scoped)?;
            scoped.bind(&binding.identifier, value)?;
        }
        expr.body.accept(&mut *scoped)
    }

    fn visit_variable(&mut self, identifier: &Token) -> EvalResult {
        self.env.get(identifier)
    }

    fn visit_function(&mut self, decl: &FunctionDecl) -> EvalResult {
        Err(errors::declaration_not_allowed(
            self.text(&decl.identifier),
            decl.identifier.offset(),
        ))
    }

    /// Built-ins take precedence; otherwise the overload is selected by
    /// argument count.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = self.text(&expr.identifier), arity = expr.arity())
    )]
    fn visit_call(&mut self, expr: &CallExpr) -> EvalResult {
        let name = expr.name();
        let arity = expr.arity();
        let offset = expr.identifier.offset();
        let text = self.text(&expr.identifier);

        if let Some(builtin) = Builtin::lookup(text, arity) {
            let args = self.eval_arguments(&expr.arguments)?;
            return builtin.call(&args, offset, &mut self.rng, &self.print_handler);
        }

        if let Some(decl) = self.env.declaration(name, arity) {
            let args = self.eval_arguments(&expr.arguments)?;
            return self.call_function(&decl, args, offset);
        }

        let available = self.env.arities(name);
        if available.is_empty() {
            Err(errors::undefined_function(text, offset))
        } else {
            Err(errors::no_matching_overload(text, arity, &available, offset))
        }
    }
}
