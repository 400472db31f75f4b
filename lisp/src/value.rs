use crate::procedure::Procedure;
use std::fmt;

/// Runtime values. Everything `eval` produces is one of these.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Number(f64),
    Text(String),
    Boolean(bool),
    Null,
    List(Vec<Value>),
    Procedure(Procedure),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Text(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
            Value::List(_) => "list",
            Value::Procedure(_) => "procedure",
        }
    }

    /// How the REPL prints a top level result: data values carry their
    /// type after a colon, booleans and null print as their literal.
    pub fn render(&self) -> String {
        match self {
            Value::Boolean(_) | Value::Null => self.to_string(),
            Value::Number(_) | Value::Text(_) | Value::List(_) | Value::Procedure(_) =>
                format!("{}: {}", self, self.type_name()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            },
            Value::Procedure(p) => write!(f, "#<procedure {}>", p.name()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Value { Value::Number(n) }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value { Value::Boolean(b) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::Text(s.to_string()) }
}

///////////////////////////////////////////////////////////////////////////////
