//! Token factories for tests
//!
//! Building tokens by hand is noisy; these helpers keep test fixtures readable.
//! Every token is placed on line 1, since nothing past normalization reads lines
//! for comparison.

use crate::token::{Token, TokenKind};

pub fn ws(text: &str) -> Token {
    Token::new(TokenKind::Whitespace, text, 1)
}

pub fn kw(text: &str) -> Token {
    Token::new(TokenKind::Keyword, text, 1)
}

pub fn ident(text: &str) -> Token {
    Token::new(TokenKind::Identifier, text, 1)
}

pub fn var(text: &str) -> Token {
    Token::new(TokenKind::Variable, text, 1)
}

pub fn raw(text: &str) -> Token {
    Token::new(TokenKind::Raw, text, 1)
}

pub fn comment(text: &str) -> Token {
    Token::new(TokenKind::Comment, text, 1)
}

pub fn string(text: &str) -> Token {
    Token::new(TokenKind::String, text, 1)
}

pub fn num(text: &str) -> Token {
    Token::new(TokenKind::Number, text, 1)
}
