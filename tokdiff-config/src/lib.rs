//! Configuration loader for tokdiff.
//!
//! `defaults/tokdiff.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. User files are layered
//! on top of those defaults via [`Loader`] before deserializing into
//! [`TokdiffConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
pub use config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use tokdiff_core::formats::{ColourScheme, HighlightTable, RenderOptions};
use tokdiff_core::{DiffAlgorithm, SimilarDiff};

const DEFAULT_TOML: &str = include_str!("../defaults/tokdiff.default.toml");

/// Top-level configuration consumed by the tokdiff binary.
#[derive(Debug, Clone, Deserialize)]
pub struct TokdiffConfig {
    pub diff: DiffConfig,
    pub render: RenderConfig,
    pub colours: ColourScheme,
    pub highlight: HighlightTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiffConfig {
    pub algorithm: DiffAlgorithm,
}

/// Output knobs shared by the renderers.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub format: String,
    pub syntax_highlighting: bool,
    pub context_lines: usize,
}

impl TokdiffConfig {
    /// Sequence diff engine for the configured algorithm
    pub fn engine(&self) -> SimilarDiff {
        SimilarDiff::new(self.diff.algorithm)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            syntax_highlighting: self.render.syntax_highlighting,
            context_lines: self.render.context_lines,
            colours: self.colours.clone(),
            highlight: self.highlight.clone(),
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. from a command-line flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<TokdiffConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TokdiffConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tokdiff_core::formats::{Colour, Style, TextAttribute};

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.diff.algorithm, DiffAlgorithm::Myers);
        assert_eq!(config.render.format, "inline");
        assert!(!config.render.syntax_highlighting);
        assert_eq!(config.render.context_lines, 4);
    }

    #[test]
    fn defaults_match_render_options_default() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.render_options(), RenderOptions::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("diff.algorithm", "patience")
            .expect("override to apply")
            .set_override("render.syntax_highlighting", true)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.engine().algorithm(), DiffAlgorithm::Patience);
        assert!(config.render_options().syntax_highlighting);
    }

    #[test]
    fn user_file_is_layered_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("tokdiff.toml");
        fs::write(
            &path,
            r#"
[render]
format = "html"

[colours.add]
foreground = [0, 255, 0]
attributes = ["bold"]
"#,
        )
        .expect("write config");

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.render.format, "html");
        assert_eq!(config.render.context_lines, 4);
        assert_eq!(
            config.colours.add,
            Style {
                foreground: Some(Colour::Rgb([0, 255, 0])),
                background: None,
                attributes: vec![TextAttribute::Bold],
            }
        );
        assert_eq!(config.colours.delete, Style::fg(1));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let result = Loader::new().with_file(dir.path().join("absent.toml")).build();
        assert!(result.is_err());
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let result = Loader::new()
            .set_override("diff.algorithm", "histogram")
            .expect("override to apply")
            .build();
        assert!(result.is_err());
    }
}
