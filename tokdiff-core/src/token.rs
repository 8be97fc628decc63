//! Token model shared by every stage of the diff pipeline.
//!
//!     The lexer produces [`RawToken`]s. The normalizer turns them into [`Token`]s, which are
//!     immutable from then on: the diff engine compares them, the reconciler regroups them and
//!     the renderers print them. Nothing downstream of normalization edits a token in place;
//!     stages that need a different token build a new one.
//!
//!     Equality used by the diff engine is the [`Token::key`], which ignores the line number.
//!     Two tokens on different lines with the same kind and text are the same token as far as
//!     the diff is concerned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Variable,
    Whitespace,
    Comment,
    DocComment,
    String,
    Number,
    Operator,
    OpenTag,
    CloseTag,
    /// Single character the lexer did not classify (punctuation, braces, ...)
    Raw,
}

impl TokenKind {
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Variable => "variable",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc-comment",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::OpenTag => "open-tag",
            TokenKind::CloseTag => "close-tag",
            TokenKind::Raw => "raw",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified piece of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn whitespace(text: impl Into<String>, line: usize) -> Self {
        Token::new(TokenKind::Whitespace, text, line)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 1-based source line. Best effort for tokens synthesized by the normalizer.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }

    /// Comparison key for the diff engine: kind and text, never the line.
    pub fn key(&self) -> (TokenKind, &str) {
        (self.kind, &self.text)
    }

    /// Same token re-tagged with another kind.
    pub fn with_kind(&self, kind: TokenKind) -> Self {
        Token::new(kind, self.text.clone(), self.line)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// True when every token of the run is whitespace. An empty run counts as whitespace-only.
pub fn is_whitespace_only(tokens: &[Token]) -> bool {
    tokens.iter().all(Token::is_whitespace)
}

/// Lexer output, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    Classified {
        kind: TokenKind,
        text: String,
        line: usize,
    },
    /// Ungrouped character with no line of its own
    Char(String),
}

impl RawToken {
    pub fn classified(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        RawToken::Classified {
            kind,
            text: text.into(),
            line,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            RawToken::Classified { text, .. } => text,
            RawToken::Char(text) => text,
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            RawToken::Classified { kind, .. } => *kind,
            RawToken::Char(_) => TokenKind::Raw,
        }
    }
}
