//! Token definitions for the source lexer
//!
//! This module defines the lexemes recognized in C-family / PHP-style source.
//! The tokens are defined using the logos derive macro. Characters no pattern
//! claims are reported by logos as errors and surface as raw characters.
use logos::Logos;
use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::token::TokenKind;

/// All lexemes the logos lexer can produce
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    #[regex(r"[ \t\r\n\x0C]+")]
    Whitespace,

    /// Line and block comments. Doc comments are told apart in [`Lexeme::kind`].
    #[regex(r"//[^\n]*")]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/")]
    Comment,

    #[regex(r#""([^"\\]|\\(.|\n))*""#)]
    #[regex(r"'([^'\\]|\\(.|\n))*'")]
    String,

    #[regex(r"[0-9][0-9_]*(\.[0-9]+)?")]
    #[regex(r"0[xX][0-9a-fA-F]+")]
    Number,

    #[regex(r"\$[A-Za-z_][A-Za-z0-9_]*")]
    Variable,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,

    #[token("==")]
    #[token("===")]
    #[token("!=")]
    #[token("!==")]
    #[token("<=")]
    #[token(">=")]
    #[token("&&")]
    #[token("||")]
    #[token("++")]
    #[token("--")]
    #[token("->")]
    #[token("=>")]
    #[token("::")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token(".=")]
    #[token("<<")]
    #[token(">>")]
    #[token("??")]
    Operator,

    #[token("<?php")]
    #[token("<?=")]
    OpenTag,

    #[token("?>")]
    CloseTag,
}

static KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "array", "break", "case", "catch", "class", "clone", "const", "continue",
        "declare", "default", "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor",
        "endforeach", "endif", "endswitch", "endwhile", "enum", "eval", "exit", "extends",
        "final", "fn", "for", "foreach", "function", "global", "goto", "if", "implements",
        "include", "include_once", "instanceof", "interface", "isset", "list", "match",
        "namespace", "new", "print", "private", "protected", "public", "readonly", "require",
        "require_once", "return", "static", "struct", "switch", "throw", "trait", "try",
        "unset", "use", "var", "while", "yield",
    ]
    .into_iter()
    .collect()
});

/// Check whether an identifier is a reserved word
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.contains(word.to_ascii_lowercase().as_str())
}

/// `/** ... */`, but not the empty block comment `/**/`
fn is_doc_comment(slice: &str) -> bool {
    slice.starts_with("/**") && slice != "/**/"
}

impl Lexeme {
    /// Map a lexeme and its source slice onto the shared token kind
    pub fn kind(self, slice: &str) -> TokenKind {
        match self {
            Lexeme::Whitespace => TokenKind::Whitespace,
            Lexeme::Comment if is_doc_comment(slice) => TokenKind::DocComment,
            Lexeme::Comment => TokenKind::Comment,
            Lexeme::String => TokenKind::String,
            Lexeme::Number => TokenKind::Number,
            Lexeme::Variable => TokenKind::Variable,
            Lexeme::Identifier if is_keyword(slice) => TokenKind::Keyword,
            Lexeme::Identifier => TokenKind::Identifier,
            Lexeme::Operator => TokenKind::Operator,
            Lexeme::OpenTag => TokenKind::OpenTag,
            Lexeme::CloseTag => TokenKind::CloseTag,
        }
    }
}
