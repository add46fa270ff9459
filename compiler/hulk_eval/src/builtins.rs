//! Reserved built-in functions.
//!
//! A built-in is identified by name and arity together: `log/2` is
//! reserved, `log/1` is free for user declarations.

use hulk_diagnostic::{errors, HulkError};

use crate::print_handler::PrintHandlerImpl;
use crate::Value;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    Rand,
    Cos,
    Exp,
    Print,
    Sin,
    Sqrt,
    Log,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Rand,
        Builtin::Cos,
        Builtin::Exp,
        Builtin::Print,
        Builtin::Sin,
        Builtin::Sqrt,
        Builtin::Log,
    ];

    /// The built-in reserved under `(name, arity)`, if any.
    pub fn lookup(name: &str, arity: usize) -> Option<Builtin> {
        Self::ALL
            .into_iter()
            .find(|b| b.name() == name && b.arity() == arity)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Rand => "rand",
            Builtin::Cos => "cos",
            Builtin::Exp => "exp",
            Builtin::Print => "print",
            Builtin::Sin => "sin",
            Builtin::Sqrt => "sqrt",
            Builtin::Log => "log",
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Builtin::Rand => 0,
            Builtin::Log => 2,
            Builtin::Cos | Builtin::Exp | Builtin::Print | Builtin::Sin | Builtin::Sqrt => 1,
        }
    }

    /// Apply the built-in to already-evaluated arguments.
    pub fn call(
        self,
        args: &[Value],
        offset: u32,
        rng: &mut fastrand::Rng,
        out: &PrintHandlerImpl,
    ) -> Result<Value, HulkError> {
        let number = |value: &Value| self.number(value, offset);
        match (self, args) {
            (Builtin::Rand, []) => Ok(Value::Number(rng.f64())),
            (Builtin::Print, [value]) => {
                out.println(&value.to_string());
                Ok(value.clone())
            }
            (Builtin::Cos, [x]) => Ok(Value::Number(number(x)?.cos())),
            (Builtin::Exp, [x]) => Ok(Value::Number(number(x)?.exp())),
            (Builtin::Sin, [x]) => Ok(Value::Number(number(x)?.sin())),
            (Builtin::Sqrt, [x]) => Ok(Value::Number(number(x)?.sqrt())),
            (Builtin::Log, [base, x]) => Ok(Value::Number(number(x)?.log(number(base)?))),
            _ => Err(errors::no_matching_overload(
                self.name(),
                args.len(),
                &[self.arity()],
                offset,
            )),
        }
    }

    fn number(self, value: &Value, offset: u32) -> Result<f64, HulkError> {
        value
            .as_number()
            .ok_or_else(|| errors::type_mismatch(self.name(), "a number", value.type_name(), offset))
    }
}
