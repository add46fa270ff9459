use hulk_ir::{Expr, FunctionDecl};

/// Parser output: top-level function declarations followed by the
/// expression to evaluate.
#[derive(Clone, Debug)]
pub struct Program {
    pub declarations: Vec<FunctionDecl>,
    pub body: Expr,
}

impl Program {
    pub fn new(declarations: Vec<FunctionDecl>, body: Expr) -> Self {
        Program { declarations, body }
    }

    /// A program without declarations.
    pub fn expression(body: Expr) -> Self {
        Program {
            declarations: Vec::new(),
            body,
        }
    }
}
