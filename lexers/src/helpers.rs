#![deny(warnings)]

use crate::scanner::Scanner;
use std::str::FromStr;

// scan integers like 0x34 0b10101 0o657
fn scan_xob_integer<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    if scanner.accept(&'0').is_some() &&
        match scanner.accept_any(&['x', 'X', 'o', 'O', 'b', 'B']) {
            Some('x') | Some('X') => scanner.skip_matching(|c| c.is_ascii_hexdigit()),
            Some('o') | Some('O') => scanner.skip_matching(|c| c.is_digit(8)),
            Some('b') | Some('B') => scanner.skip_matching(|c| c.is_digit(2)),
            _ => false,
        } {
        return Some(scanner.extract_string());
    }
    scanner.set_pos(backtrack);
    None
}

fn radix_value(literal: &str) -> Option<f64> {
    let radix = match literal.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None
    };
    literal[2..].chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}

/// Parse a whole token as a number.
///
/// Accepts signed decimals with fraction and exponent, `Infinity` and
/// unsigned `0x`, `0o`, `0b` integers. Other spellings `f64::from_str`
/// takes (`inf`, `INFINITY`, `nan`) are left for the caller to treat as
/// something else.
pub fn parse_number(token: &str) -> Option<f64> {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return None;
    }
    if let Ok(n) = f64::from_str(token) {
        return if n.is_nan() { None } else { Some(n) };
    }
    let mut scanner = Scanner::new(token.chars());
    let literal = scan_xob_integer(&mut scanner)?;
    if !scanner.at_end() {
        return None;
    }
    radix_value(&literal)
}

///////////////////////////////////////////////////////////////////////////////
