use crate::parser::{LispExpr, ParseError, Parser, MAX_DEPTH};

fn sym(s: &str) -> LispExpr { LispExpr::Symbol(s.to_string()) }

#[test]
fn test_lisp1() {
    let p = Parser::parse_str("(if (define r 10) (* r (+ r 1.5)) null)");
    let r = LispExpr::List(vec![
        sym("if"),
        LispExpr::List(vec![
            sym("define"),
            sym("r"),
            LispExpr::Number(10.0),
        ]),
        LispExpr::List(vec![
            sym("*"),
            sym("r"),
            LispExpr::List(vec![
                sym("+"),
                sym("r"),
                LispExpr::Number(1.5),
            ]),
        ]),
        LispExpr::Null,
    ]);
    assert_eq!(p.unwrap(), r);
}

#[test]
fn bare_atoms() {
    assert_eq!(Parser::parse_str("42"), Ok(LispExpr::Number(42.0)));
    assert_eq!(Parser::parse_str("  x  "), Ok(sym("x")));
    assert_eq!(Parser::parse_str("true"), Ok(LispExpr::Bool(true)));
    assert_eq!(Parser::parse_str("()"), Ok(LispExpr::List(Vec::new())));
}

#[test]
fn atom_classification() {
    assert_eq!(Parser::parse_atom("-2.5e3"), LispExpr::Number(-2500.0));
    assert_eq!(Parser::parse_atom("0x1F"), LispExpr::Number(31.0));
    assert_eq!(Parser::parse_atom("-Infinity"), LispExpr::Number(f64::NEG_INFINITY));
    assert_eq!(Parser::parse_atom("inf"), sym("inf"));
    assert_eq!(Parser::parse_atom("INFINITY"), sym("INFINITY"));
    assert_eq!(Parser::parse_atom("true"), LispExpr::Bool(true));
    assert_eq!(Parser::parse_atom("false"), LispExpr::Bool(false));
    assert_eq!(Parser::parse_atom("null"), LispExpr::Null);
    assert_eq!(Parser::parse_atom("True"), sym("True"));
    assert_eq!(Parser::parse_atom("nan"), sym("nan"));
    assert_eq!(Parser::parse_atom("1+"), sym("1+"));
    assert_eq!(Parser::parse_atom("\"hi\""), sym("\"hi\""));
}

#[test]
fn trailing_tokens_are_ignored() {
    assert_eq!(Parser::parse_str("1 2 3"), Ok(LispExpr::Number(1.0)));
    assert_eq!(Parser::parse_str("(a) )"), Ok(LispExpr::List(vec![sym("a")])));
}

#[test]
fn parse_from_tokens() {
    let tokens = lexers::tokenize("(- 5 (/ 1 2))");
    let expect = LispExpr::List(vec![
        sym("-"),
        LispExpr::Number(5.0),
        LispExpr::List(vec![sym("/"), LispExpr::Number(1.0), LispExpr::Number(2.0)]),
    ]);
    assert_eq!(Parser::parse_tokens(tokens), Ok(expect));
}

#[test]
fn parse_errors() {
    assert_eq!(Parser::parse_str(""), Err(ParseError::UnexpectedEOF));
    assert_eq!(Parser::parse_str("   "), Err(ParseError::UnexpectedEOF));
    assert_eq!(Parser::parse_str("(+ 1"), Err(ParseError::UnexpectedEOF));
    assert_eq!(Parser::parse_str("((+ 1 2)"), Err(ParseError::UnexpectedEOF));
    assert_eq!(Parser::parse_str(")"), Err(ParseError::UnexpectedCParen));
    assert_eq!(Parser::parse_str(") (+ 1 2)"), Err(ParseError::UnexpectedCParen));
    assert_eq!(Parser::parse_tokens(Vec::new()), Err(ParseError::UnexpectedEOF));
}

#[test]
fn display_roundtrip() {
    let src = "(define x (+ 1 (* 2.5 y)))";
    assert_eq!(Parser::parse_str(src).unwrap().to_string(), src);
    assert_eq!(Parser::parse_str("( if  true null false )").unwrap().to_string(),
               "(if true null false)");
}

fn nested_sum(depth: usize) -> String {
    format!("{}1{}", "(+ 1 ".repeat(depth), ")".repeat(depth))
}

#[test]
fn nesting_limit() {
    assert!(Parser::parse_str(&nested_sum(MAX_DEPTH)).is_ok());
    assert_eq!(Parser::parse_str(&nested_sum(MAX_DEPTH + 1)),
               Err(ParseError::TooDeeplyNested(MAX_DEPTH)));
    assert_eq!(Parser::parse_str(&nested_sum(200_000)),
               Err(ParseError::TooDeeplyNested(MAX_DEPTH)));
    let unclosed = "(".repeat(MAX_DEPTH + 1);
    assert_eq!(Parser::parse_str(&unclosed), Err(ParseError::TooDeeplyNested(MAX_DEPTH)));
}
