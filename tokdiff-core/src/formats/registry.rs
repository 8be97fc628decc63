//! Renderer registry
//!
//! Each output format implements [`Renderer`] and is registered by name with a
//! [`RendererRegistry`]. The CLI looks formats up here instead of matching on
//! format strings itself.

use std::collections::HashMap;
use thiserror::Error;

use crate::diffing::EditOp;
use crate::formats::options::RenderOptions;

/// Error that can occur while rendering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    FormatNotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Turns a reconciled edit script into text
pub trait Renderer: Send + Sync {
    /// The name of this format (e.g., "inline", "html")
    fn name(&self) -> &str;

    fn render(&self, ops: &[EditOp]) -> Result<String, FormatError>;

    fn description(&self) -> &str {
        ""
    }
}

/// Registry of renderers, keyed by name
pub struct RendererRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl RendererRegistry {
    pub fn new() -> Self {
        RendererRegistry {
            renderers: HashMap::new(),
        }
    }

    /// Register a renderer, replacing any previous one with the same name
    pub fn register<R: Renderer + 'static>(&mut self, renderer: R) {
        self.renderers
            .insert(renderer.name().to_string(), Box::new(renderer));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Renderer> {
        self.renderers.get(name).map(|r| r.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.renderers.contains_key(name)
    }

    /// Render with the named format
    pub fn render(&self, ops: &[EditOp], format: &str) -> Result<String, FormatError> {
        let renderer = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        renderer.render(ops)
    }

    /// Registered format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.renderers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Registry holding every built-in renderer, configured with `options`
    pub fn with_defaults(options: &RenderOptions) -> Self {
        let mut registry = Self::new();

        registry.register(super::InlineRenderer::new(options.clone()));
        registry.register(super::PlainRenderer);
        registry.register(super::HtmlTableRenderer::new(options.context_lines));
        registry.register(super::JsonRenderer);

        registry
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults(&RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ident;

    struct CountingRenderer;
    impl Renderer for CountingRenderer {
        fn name(&self) -> &str {
            "count"
        }

        fn render(&self, ops: &[EditOp]) -> Result<String, FormatError> {
            Ok(ops.len().to_string())
        }
    }

    #[test]
    fn test_register_and_render() {
        let mut registry = RendererRegistry::new();
        registry.register(CountingRenderer);
        assert!(registry.has("count"));

        let ops = vec![EditOp::copy(vec![ident("a")])];
        assert_eq!(registry.render(&ops, "count"), Ok("1".to_string()));
    }

    #[test]
    fn test_unknown_format() {
        let registry = RendererRegistry::new();
        assert_eq!(
            registry.render(&[], "nope"),
            Err(FormatError::FormatNotFound("nope".to_string()))
        );
    }

    #[test]
    fn test_defaults_are_registered() {
        let registry = RendererRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["html", "inline", "json", "plain"]
        );
        assert_eq!(
            registry.get("inline").map(|r| !r.description().is_empty()),
            Some(true)
        );
    }
}
