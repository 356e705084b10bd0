//! Lexer - converts formula text into spanned tokens
use crate::parser::tokens::{Operator, Spanned, Token};
use crate::{DiffError, Span};

/// Tokenize the input in a single left-to-right pass
pub(crate) fn lex(input: &str) -> Result<Vec<Spanned>, DiffError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::with_capacity(input.len() / 2 + 1);
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];
        let start = pos;

        let token = match c {
            b' ' | b'\t' | b'\n' | b'\r' => {
                pos += 1;
                continue;
            }
            b'0'..=b'9' | b'.' => {
                pos = scan_number(bytes, pos);
                let text = &input[start..pos];
                let value = text.parse::<f64>().map_err(|_| DiffError::InvalidNumber {
                    value: text.to_string(),
                    span: Some(Span::new(start, pos)),
                })?;
                Token::Number(value)
            }
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => {
                while pos < bytes.len() && (bytes[pos].is_ascii_alphanumeric() || bytes[pos] == b'_')
                {
                    pos += 1;
                }
                Token::Identifier(input[start..pos].to_string())
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                Token::Operator(Operator::DoubleStar)
            }
            b'+' | b'-' | b'*' | b'/' | b'^' => {
                pos += 1;
                Token::Operator(match c {
                    b'+' => Operator::Plus,
                    b'-' => Operator::Minus,
                    b'*' => Operator::Star,
                    b'/' => Operator::Slash,
                    _ => Operator::Caret,
                })
            }
            b'(' => {
                pos += 1;
                Token::LeftParen
            }
            b')' => {
                pos += 1;
                Token::RightParen
            }
            b',' => {
                pos += 1;
                Token::Comma
            }
            _ => {
                // Report the whole (possibly multi-byte) character
                let ch = input[start..].chars().next().unwrap_or('?');
                return Err(DiffError::InvalidToken {
                    token: ch.to_string(),
                    span: Some(Span::new(start, start + ch.len_utf8())),
                });
            }
        };

        tokens.push(Spanned {
            token,
            span: Span::new(start, pos),
        });
    }

    Ok(tokens)
}

/// Scan `digits [. digits] [(e|E) [+|-] digits]`, returning the end offset.
///
/// The exponent is only consumed when at least one digit follows it, so
/// `2e` lexes as the number `2` followed by the identifier `e`.
fn scan_number(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
        pos += 1;
    }
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut look = pos + 1;
        if look < bytes.len() && (bytes[look] == b'+' || bytes[look] == b'-') {
            look += 1;
        }
        if look < bytes.len() && bytes[look].is_ascii_digit() {
            pos = look;
            while pos < bytes.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }
    pos
}
