//! Implementation of the source lexer
//!
//! Thin wrapper around the logos lexer that attaches line numbers and turns
//! unclassified input into raw characters.

use crate::lexing::tokens::Lexeme;
use crate::token::RawToken;
use logos::Logos;

/// Tokenize source text into raw tokens.
///
/// Total over any input: whatever logos cannot classify is emitted as one
/// [`RawToken::Char`] per character. Classified tokens carry the 1-based line
/// on which they start; raw characters carry none.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut rest = source;

    'restart: while !rest.is_empty() {
        let mut lexer = Lexeme::lexer(rest);

        while let Some(result) = lexer.next() {
            let slice = lexer.slice();
            match result {
                Ok(lexeme) => {
                    tokens.push(RawToken::classified(lexeme.kind(slice), slice, line));
                    line += slice.matches('\n').count();
                }
                Err(()) => {
                    // An error span can cover a failed operator prefix plus what
                    // follows it. Only its first character is unclaimed.
                    let Some(c) = slice.chars().next() else {
                        continue;
                    };
                    tokens.push(RawToken::Char(c.to_string()));
                    if c == '\n' {
                        line += 1;
                    }
                    rest = &rest[lexer.span().start + c.len_utf8()..];
                    continue 'restart;
                }
            }
        }

        break;
    }

    tokens
}
