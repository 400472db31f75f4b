#![deny(warnings)]

use crate::scanner::Scanner;

fn is_paren(c: &char) -> bool { *c == '(' || *c == ')' }

fn is_delimiter(c: &char) -> bool { c.is_whitespace() || is_paren(c) }

/// Splits source text into untyped tokens: every parenthesis is a token of
/// its own and anything else is a maximal run of non-space, non-paren chars.
pub struct LispTokenizer<I: Iterator<Item=char>>(Scanner<I>);

impl<'a> LispTokenizer<std::str::Chars<'a>> {
    pub fn scanner(source: &'a str) -> Scanner<LispTokenizer<std::str::Chars<'a>>> {
        Scanner::new(LispTokenizer(Scanner::new(source.chars())))
    }
}

impl<I: Iterator<Item=char>> Iterator for LispTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.skip_ws();
        self.0.ignore();
        if self.0.accept_any(&['(', ')']).is_some() || self.0.until(is_delimiter) {
            Some(self.0.extract_string())
        } else {
            None
        }
    }
}

pub fn tokenize(source: &str) -> Vec<String> {
    LispTokenizer::scanner(source).collect()
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{tokenize, LispTokenizer};

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lisp_tokenizer() {
        let inputs = vec![
            "(+ 3 4)",
            "(define x (+ 1 1))",
            "  (if\ttrue 1   2)  ",
            "x",
        ];
        let expect = vec![
            tokens(&["(", "+", "3", "4", ")"]),
            tokens(&["(", "define", "x", "(", "+", "1", "1", ")", ")"]),
            tokens(&["(", "if", "true", "1", "2", ")"]),
            tokens(&["x"]),
        ];
        for (input, expected) in inputs.iter().zip(expect.iter()) {
            assert_eq!(&tokenize(input), expected);
        }
    }

    #[test]
    fn parens_split_atoms() {
        assert_eq!(tokenize("a(b)c"), tokens(&["a", "(", "b", ")", "c"]));
        assert_eq!(tokenize("(()))"), tokens(&["(", "(", ")", ")", ")"]));
        assert_eq!(tokenize("\"hi there\""), tokens(&["\"hi", "there\""]));
    }

    #[test]
    fn blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \n").is_empty());
    }

    #[test]
    fn lazy_scanner() {
        let mut lx = LispTokenizer::scanner("(* 3 4)");
        assert_eq!(lx.peek(), Some("(".to_string()));
        assert_eq!(lx.next(), Some("(".to_string()));
        assert_eq!(lx.next(), Some("*".to_string()));
        let backtrack = lx.pos();
        assert_eq!(lx.next(), Some("3".to_string()));
        assert!(lx.set_pos(backtrack));
        assert_eq!(lx.next(), Some("3".to_string()));
        assert_eq!(lx.next(), Some("4".to_string()));
        assert_eq!(lx.next(), Some(")".to_string()));
        assert_eq!(lx.next(), None);
        assert!(lx.at_end());
    }
}
