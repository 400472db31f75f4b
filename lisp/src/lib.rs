extern crate lexers;

mod builtin;
mod environment;
mod eval;
mod interpreter;
mod procedure;
mod value;

pub use builtin::Builtin;
pub use environment::Environment;
pub use eval::{eval, EvalErr};
pub use interpreter::Interpreter;
pub use parser::{LispExpr, ParseError, Parser, MAX_DEPTH};
pub use procedure::Procedure;
pub use value::Value;

mod parser;
#[cfg(test)]
mod parser_test;
