//! Token normalization for diffing
//!
//! This module turns the lexer's raw token stream into a sequence the diff engine
//! can compare element by element, while keeping enough of the text to print the
//! original formatting back.
//!
//! # Transformations
//!
//! 1. Raw characters become [`TokenKind::Raw`] tokens. They carry no line of their
//!    own, so they take the line of the last classified token seen.
//! 2. Doc comments are folded into plain comments.
//! 3. Multi-line, non-whitespace tokens (block comments, strings spanning lines)
//!    are split into single-line pieces. Leading indentation of each piece
//!    becomes its own whitespace token and the newlines lost by splitting come
//!    back as synthetic `"\n"` whitespace tokens.
//!
//! # Example
//!
//! Input: `Comment("/* a\n   b */")` on line 5
//! Output: `[Comment("/* a"), Whitespace("\n"), Whitespace("   "), Comment("b */")]`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::token::{RawToken, Token, TokenKind};

static LEADING_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s+)(\S.*)").expect("leading whitespace pattern is valid"));

/// Normalize a raw token stream. Order is preserved, nothing is dropped except
/// empty fragments left over from splitting.
pub fn normalize<I>(raw_tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = RawToken>,
{
    let mut result = Vec::new();
    let mut current_line = 1;

    for raw in raw_tokens {
        let token = match raw {
            RawToken::Classified { kind, text, line } => {
                current_line = line;
                Token::new(kind, text, line)
            }
            RawToken::Char(text) => Token::new(TokenKind::Raw, text, current_line),
        };

        let token = match token.kind() {
            TokenKind::DocComment => token.with_kind(TokenKind::Comment),
            _ => token,
        };

        if !token.is_whitespace() && token.text().contains('\n') {
            split_multiline(&token, &mut result);
        } else {
            result.push(token);
        }
    }

    result
}

/// Split a multi-line token into single-line tokens, appending them to `out`
fn split_multiline(token: &Token, out: &mut Vec<Token>) {
    let kind = token.kind();
    let lines: Vec<&str> = token.text().split('\n').collect();
    let last = lines.len() - 1;

    for (i, fragment) in lines.iter().enumerate() {
        let line = token.line() + i;

        if let Some(captures) = LEADING_WHITESPACE.captures(fragment) {
            out.push(Token::whitespace(&captures[1], line));
            out.push(Token::new(kind, &captures[2], line));
        } else if !fragment.is_empty() {
            out.push(Token::new(kind, *fragment, line));
        }

        if i != last {
            out.push(Token::whitespace("\n", line));
        }
    }
}
