//! Renderer configuration
//!
//! Colours and highlight rules are plain values handed to the renderers when
//! they are built. `tokdiff-config` deserializes them from TOML; the `Default`
//! impls match the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::formats::style::Style;
use crate::token::{Token, TokenKind};

/// Styles for changed text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourScheme {
    pub add: Style,
    pub delete: Style,
}

impl Default for ColourScheme {
    fn default() -> Self {
        ColourScheme {
            add: Style::fg(2),
            delete: Style::fg(1),
        }
    }
}

/// Syntax highlighting applied to unchanged text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightTable {
    pub keyword: Style,
    pub variable: Style,
    /// Braces and open tags
    pub block: Style,
}

impl Default for HighlightTable {
    fn default() -> Self {
        HighlightTable {
            keyword: Style::fg(222),
            variable: Style::fg(226),
            block: Style::fg(222),
        }
    }
}

impl HighlightTable {
    /// Style for a token, if its category is highlighted at all
    pub fn style_for(&self, token: &Token) -> Option<&Style> {
        match token.kind() {
            TokenKind::Keyword => Some(&self.keyword),
            TokenKind::Variable => Some(&self.variable),
            TokenKind::OpenTag => Some(&self.block),
            TokenKind::Raw if matches!(token.text(), "{" | "}") => Some(&self.block),
            _ => None,
        }
    }
}

/// Everything the built-in renderers can be tuned with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub syntax_highlighting: bool,
    /// Unchanged lines kept around each change by the html renderer
    pub context_lines: usize,
    pub colours: ColourScheme,
    pub highlight: HighlightTable,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            syntax_highlighting: false,
            context_lines: 4,
            colours: ColourScheme::default(),
            highlight: HighlightTable::default(),
        }
    }
}
