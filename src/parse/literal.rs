//! Restricted list-literal decoder.
//!
//! The raw dataset stores lists as Python-style literals inside string
//! fields. This decoder accepts exactly one shape — a flat list of quoted
//! strings and/or numbers — and rejects everything else. It is the safe
//! replacement for evaluating the literal with a language runtime: no
//! identifiers, no expressions, no nesting.
//!
//! # Examples
//!
//! ```
//! use sazonar::parse::literal::{decode_list, Literal};
//!
//! let items = decode_list("['flour', 'salt']").expect("valid list literal");
//! assert_eq!(items.len(), 2);
//! assert_eq!(items[0], Literal::Str("flour".to_string()));
//!
//! assert!(decode_list("not a list").is_err());
//! ```

use crate::error::{Result, SazonarError};

/// One element of a decoded list literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A quoted string element.
    Str(String),
    /// A numeric element (integers are widened to f64).
    Num(f64),
}

fn parse_error(message: impl Into<String>) -> SazonarError {
    SazonarError::Parse {
        field: "list literal".to_string(),
        message: message.into(),
    }
}

/// Decode a flat list literal of strings and numbers.
///
/// Accepts single- or double-quoted strings with backslash escapes, and
/// signed integer or decimal numbers. An empty list `[]` is valid.
///
/// # Errors
///
/// Returns [`SazonarError::Parse`] when the input is not a flat list of
/// string/number literals: missing brackets, unterminated strings, bare
/// identifiers, nested lists, or trailing garbage.
///
/// # Examples
///
/// ```
/// use sazonar::parse::literal::{decode_list, Literal};
///
/// let items = decode_list("[400, 10.5, 'sugar']").expect("valid list literal");
/// assert_eq!(items[0], Literal::Num(400.0));
/// assert_eq!(items[1], Literal::Num(10.5));
/// assert_eq!(items[2], Literal::Str("sugar".to_string()));
/// ```
pub fn decode_list(input: &str) -> Result<Vec<Literal>> {
    let trimmed = input.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| parse_error("expected a bracketed list"))?;

    let mut items = Vec::new();
    let mut chars = inner.chars().peekable();

    loop {
        // Skip whitespace between elements
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }

        let Some(&c) = chars.peek() else { break };

        let item = match c {
            '\'' | '"' => {
                let quote = c;
                chars.next();
                let mut s = String::new();
                let mut closed = false;
                while let Some(ch) = chars.next() {
                    match ch {
                        '\\' => {
                            let escaped = chars
                                .next()
                                .ok_or_else(|| parse_error("dangling escape at end of string"))?;
                            s.push(escaped);
                        }
                        ch if ch == quote => {
                            closed = true;
                            break;
                        }
                        ch => s.push(ch),
                    }
                }
                if !closed {
                    return Err(parse_error("unterminated string"));
                }
                Literal::Str(s)
            }
            '-' | '0'..='9' | '.' => {
                let mut num = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E') {
                        num.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                let value: f64 = num
                    .parse()
                    .map_err(|_| parse_error(format!("invalid number '{num}'")))?;
                Literal::Num(value)
            }
            other => {
                return Err(parse_error(format!(
                    "unexpected character '{other}' (only strings and numbers are allowed)"
                )));
            }
        };
        items.push(item);

        // Skip whitespace, then expect a comma or the end
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
        }
        match chars.next() {
            Some(',') => continue,
            Some(other) => {
                return Err(parse_error(format!(
                    "expected ',' between elements, found '{other}'"
                )));
            }
            None => break,
        }
    }

    Ok(items)
}

/// Decode a list literal whose elements must all be strings.
///
/// # Errors
///
/// Returns [`SazonarError::Parse`] if the literal is malformed or contains
/// a non-string element.
pub fn decode_string_list(input: &str) -> Result<Vec<String>> {
    decode_list(input)?
        .into_iter()
        .map(|item| match item {
            Literal::Str(s) => Ok(s),
            Literal::Num(n) => Err(parse_error(format!("expected string, found number {n}"))),
        })
        .collect()
}

/// Decode a list literal whose elements must all be numbers.
///
/// # Errors
///
/// Returns [`SazonarError::Parse`] if the literal is malformed or contains
/// a non-numeric element.
pub fn decode_number_list(input: &str) -> Result<Vec<f64>> {
    decode_list(input)?
        .into_iter()
        .map(|item| match item {
            Literal::Num(n) => Ok(n),
            Literal::Str(s) => Err(parse_error(format!("expected number, found string '{s}'"))),
        })
        .collect()
}

#[cfg(test)]
#[path = "literal_tests.rs"]
mod tests;
