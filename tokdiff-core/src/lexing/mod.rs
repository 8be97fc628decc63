//! Lexer module for C-family / PHP-style source
//!
//! The diff works on a flat token stream and never looks at grammar, so the
//! lexer only has to group characters into the categories the reconciler and
//! the renderers care about: whitespace, comments, strings, words and a few
//! operators. Everything else is left as single raw characters.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::{is_keyword, Lexeme};
