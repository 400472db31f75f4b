use lexers::{LispTokenizer, Scanner};
use std::fmt;

#[derive(PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected end of input")]
    UnexpectedEOF,
    #[error("unexpected ')'")]
    UnexpectedCParen,
    #[error("expression nested deeper than {0} levels")]
    TooDeeplyNested(usize),
}

/// Deepest form nesting the parser accepts. It keeps the recursive parse,
/// eval and drop of a tree well within the default thread stack.
pub const MAX_DEPTH: usize = 1024;

/// A parsed expression. Lists are forms; every other node is an atom.
#[derive(Clone, PartialEq, Debug)]
pub enum LispExpr {
    List(Vec<LispExpr>),
    Symbol(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for LispExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LispExpr::Symbol(s) => write!(f, "{}", s),
            LispExpr::Number(n) => write!(f, "{}", n),
            LispExpr::Bool(b) => write!(f, "{}", b),
            LispExpr::Null => write!(f, "null"),
            LispExpr::List(list) => {
                write!(f, "(")?;
                for (i, expr) in list.iter().enumerate() {
                    if i > 0 { write!(f, " ")?; }
                    write!(f, "{}", expr)?;
                }
                write!(f, ")")
            },
        }
    }
}

pub struct Parser;

impl Parser {
    pub fn parse_str(expr: &str) -> Result<LispExpr, ParseError> {
        Self::parse(&mut LispTokenizer::scanner(expr))
    }

    pub fn parse_tokens(tokens: Vec<String>) -> Result<LispExpr, ParseError> {
        Self::parse(&mut Scanner::new(tokens.into_iter()))
    }

    // Only the first complete expression is consumed, trailing tokens are left
    pub fn parse<I>(lex: &mut Scanner<I>) -> Result<LispExpr, ParseError>
            where I: Iterator<Item=String> {
        Self::parse_nested(lex, 0)
    }

    fn parse_nested<I>(lex: &mut Scanner<I>, depth: usize) -> Result<LispExpr, ParseError>
            where I: Iterator<Item=String> {
        let token = lex.next().ok_or(ParseError::UnexpectedEOF)?;
        match token.as_str() {
            ")" => Err(ParseError::UnexpectedCParen),
            "(" => {
                if depth >= MAX_DEPTH {
                    return Err(ParseError::TooDeeplyNested(MAX_DEPTH));
                }
                let mut list = Vec::new();
                while lex.peek().as_deref() != Some(")") { // even when None
                    list.push(Parser::parse_nested(lex, depth + 1)?);
                }
                lex.next(); // get over that CParen
                Ok(LispExpr::List(list))
            },
            atom => Ok(Self::parse_atom(atom)),
        }
    }

    pub fn parse_atom(token: &str) -> LispExpr {
        if let Some(n) = lexers::parse_number(token) {
            return LispExpr::Number(n);
        }
        match token {
            "true" => LispExpr::Bool(true),
            "false" => LispExpr::Bool(false),
            "null" => LispExpr::Null,
            sym => LispExpr::Symbol(sym.to_string()),
        }
    }
}
