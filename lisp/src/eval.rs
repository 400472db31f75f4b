use crate::environment::Environment;
use crate::parser::{LispExpr, ParseError};
use crate::value::Value;

macro_rules! check {
    ($argcheck:expr, $err:expr) => {
        if ! $argcheck { return Err($err); }
    }
}

#[derive(PartialEq, Debug, thiserror::Error)]
pub enum EvalErr {
    #[error("syntax error: {0}")]
    ParseError(#[from] ParseError),
    #[error("undefined symbol: {0}")]
    UndefinedSymbol(String),
    #[error("syntax error: expected procedure name")]
    ExpectedProcedureName,
    #[error("syntax error: expected symbol")]
    ExpectedSymbol,
    #[error("syntax error: expected {expected} arguments to '{form}', found {found}")]
    WrongNumberOfArgs { form: String, expected: usize, found: usize },
    #[error("type error: {0}")]
    TypeError(String),
    #[error("'{0}' is not callable")]
    NotCallable(String),
}

fn arity(form: &str, expected: usize, operands: &[LispExpr]) -> EvalErr {
    EvalErr::WrongNumberOfArgs {
        form: form.to_string(), expected, found: operands.len()
    }
}

/// Evaluate `expr` in `env`.
///
/// Literals evaluate to themselves and symbols to whatever they are bound to;
/// bound values are data and are not evaluated a second time. Forms are
/// either one of the special forms `define` and `if` or a procedure call.
pub fn eval(expr: &LispExpr, env: &Environment) -> Result<Value, EvalErr> {
    match expr {
        LispExpr::Number(n) => Ok(Value::Number(*n)),
        LispExpr::Bool(b) => Ok(Value::Boolean(*b)),
        LispExpr::Null => Ok(Value::Null),
        LispExpr::Symbol(sym) => env.lookup(sym)
            .ok_or_else(|| EvalErr::UndefinedSymbol(sym.clone())),
        LispExpr::List(list) => match list.split_first() {
            Some((LispExpr::Symbol(head), operands)) => match head.as_str() {
                "define" => eval_define(operands, env),
                "if" => eval_if(operands, env),
                _ => apply(head, operands, env),
            },
            // covers both () and forms headed by a literal or a nested form
            _ => Err(EvalErr::ExpectedProcedureName),
        }
    }
}

fn eval_define(operands: &[LispExpr], env: &Environment) -> Result<Value, EvalErr> {
    check!(operands.len() == 2, arity("define", 2, operands));
    match &operands[0] {
        LispExpr::Symbol(var) => {
            let value = eval(&operands[1], env)?;
            env.define(var, value);
            Ok(Value::Null)
        },
        _ => Err(EvalErr::ExpectedSymbol)
    }
}

fn eval_if(operands: &[LispExpr], env: &Environment) -> Result<Value, EvalErr> {
    check!(operands.len() == 3, arity("if", 3, operands));
    let (test, conseq, alt) = (&operands[0], &operands[1], &operands[2]);
    match eval(test, env)? {
        Value::Boolean(true) => eval(conseq, env),
        Value::Boolean(false) => eval(alt, env),
        other => Err(EvalErr::TypeError(
            format!("expected boolean condition, found {}", other.type_name())))
    }
}

// Arguments are evaluated left to right before the head is resolved
fn apply(head: &str, operands: &[LispExpr], env: &Environment) -> Result<Value, EvalErr> {
    let args = operands.iter()
        .map(|arg| eval(arg, env))
        .collect::<Result<Vec<_>, _>>()?;
    match env.lookup(head) {
        Some(Value::Procedure(p)) => p.call(&args),
        Some(Value::Number(_)) | Some(Value::Text(_)) | Some(Value::Boolean(_)) |
        Some(Value::Null) | Some(Value::List(_)) => Err(EvalErr::NotCallable(head.to_string())),
        None => Err(EvalErr::UndefinedSymbol(head.to_string())),
    }
}
