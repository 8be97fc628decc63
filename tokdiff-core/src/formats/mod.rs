//! Output formats for a reconciled edit script
//!
//! Renderers only present; they never change which tokens are shown as changed.
//! Every built-in renderer is registered in [`RendererRegistry::with_defaults`].
//!
//! - `inline`: coloured terminal output ([`InlineRenderer`])
//! - `plain`: bracket markers, no colour ([`PlainRenderer`])
//! - `html`: line table with context trimming ([`HtmlTableRenderer`])
//! - `json`: the edit script itself ([`JsonRenderer`])

pub mod detokenizer;
pub mod html;
pub mod inline;
pub mod json;
pub mod options;
pub mod plain;
pub mod registry;
pub mod style;

pub use detokenizer::detokenize;
pub use html::HtmlTableRenderer;
pub use inline::InlineRenderer;
pub use json::JsonRenderer;
pub use options::{ColourScheme, HighlightTable, RenderOptions};
pub use plain::PlainRenderer;
pub use registry::{FormatError, Renderer, RendererRegistry};
pub use style::{Colour, Style, TextAttribute};
