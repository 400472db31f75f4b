use crate::eval::EvalErr;
use crate::value::Value;
use std::ops;

/// Native procedures seeded into every root environment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Builtin {
    Add,
    Sub,
    Mul,
    Div,
}

impl Builtin {
    pub const ALL: [Builtin; 4] = [Builtin::Add, Builtin::Sub, Builtin::Mul, Builtin::Div];

    pub fn symbol(&self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }

    // Division follows IEEE-754: x/0 is ±inf and 0/0 is NaN, never an error
    pub fn apply(&self, args: &[Value]) -> Result<Value, EvalErr> {
        match self {
            Builtin::Add => binop(self.symbol(), ops::Add::add, args),
            Builtin::Sub => binop(self.symbol(), ops::Sub::sub, args),
            Builtin::Mul => binop(self.symbol(), ops::Mul::mul, args),
            Builtin::Div => binop(self.symbol(), ops::Div::div, args),
        }
    }
}

fn number(name: &str, arg: &Value) -> Result<f64, EvalErr> {
    match arg {
        Value::Number(n) => Ok(*n),
        other => Err(EvalErr::TypeError(
            format!("expected number argument to '{}', found {}", name, other.type_name())))
    }
}

fn binop<T>(name: &str, op: T, args: &[Value]) -> Result<Value, EvalErr>
        where T: Fn(f64, f64) -> f64 {
    match args {
        [lhs, rhs] => Ok(Value::Number(op(number(name, lhs)?, number(name, rhs)?))),
        _ => Err(EvalErr::WrongNumberOfArgs {
            form: name.to_string(), expected: 2, found: args.len()
        })
    }
}

///////////////////////////////////////////////////////////////////////////////
