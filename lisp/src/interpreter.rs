use crate::environment::Environment;
use crate::eval::{eval, EvalErr};
use crate::parser::Parser;
use crate::value::Value;
use std::rc::Rc;

/// Evaluates one line at a time against an environment that persists
/// between lines.
pub struct Interpreter {
    env: Rc<Environment>,
}

impl Interpreter {
    pub fn new() -> Interpreter {
        Self::with_env(Rc::new(Environment::root()))
    }

    pub fn with_env(env: Rc<Environment>) -> Interpreter {
        Interpreter{env}
    }

    pub fn environment(&self) -> &Rc<Environment> { &self.env }

    pub fn evaluate(&self, line: &str) -> Result<Value, EvalErr> {
        let tokens = lexers::tokenize(line);
        tracing::debug!(?tokens, "tokenized");
        let expr = Parser::parse_tokens(tokens)?;
        tracing::debug!(%expr, "parsed");
        let value = eval(&expr, &self.env)?;
        tracing::debug!(%value, "evaluated");
        Ok(value)
    }
}

impl Default for Interpreter {
    fn default() -> Interpreter { Self::new() }
}

///////////////////////////////////////////////////////////////////////////////
