//! Inline terminal renderer
//!
//! Prints the final text in reading order. Deleted text is shown in the delete
//! colour where it used to be, inserted text in the add colour; a replace shows the
//! deleted run followed by the inserted one. Unchanged text is printed as is, or
//! syntax highlighted when enabled.

use crate::diffing::EditOp;
use crate::formats::detokenizer::detokenize;
use crate::formats::options::RenderOptions;
use crate::formats::registry::{FormatError, Renderer};
use crate::token::Token;

#[derive(Debug, Clone, Default)]
pub struct InlineRenderer {
    options: RenderOptions,
}

impl InlineRenderer {
    pub fn new(options: RenderOptions) -> Self {
        InlineRenderer { options }
    }

    fn copied(&self, tokens: &[Token], out: &mut String) {
        if !self.options.syntax_highlighting {
            out.push_str(&detokenize(tokens));
            return;
        }
        for token in tokens {
            match self.options.highlight.style_for(token) {
                Some(style) => out.push_str(&style.paint(token.text())),
                None => out.push_str(token.text()),
            }
        }
    }

    fn added(&self, tokens: &[Token], out: &mut String) {
        out.push_str(&self.options.colours.add.paint(&detokenize(tokens)));
    }

    fn deleted(&self, tokens: &[Token], out: &mut String) {
        out.push_str(&self.options.colours.delete.paint(&detokenize(tokens)));
    }
}

impl Renderer for InlineRenderer {
    fn name(&self) -> &str {
        "inline"
    }

    fn description(&self) -> &str {
        "Final text with coloured insertions and deletions, for terminals"
    }

    fn render(&self, ops: &[EditOp]) -> Result<String, FormatError> {
        let mut out = String::new();
        for op in ops {
            match op {
                EditOp::Copy { tokens } => self.copied(tokens, &mut out),
                EditOp::Insert { tokens } => self.added(tokens, &mut out),
                EditOp::Delete { tokens } => self.deleted(tokens, &mut out),
                EditOp::Replace { orig, r#final } => {
                    self.deleted(orig, &mut out);
                    self.added(r#final, &mut out);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::options::ColourScheme;
    use crate::formats::style::Style;
    use crate::testing::{ident, kw, raw, ws};

    fn plain_colours() -> RenderOptions {
        RenderOptions {
            colours: ColourScheme {
                add: Style::default(),
                delete: Style::default(),
            },
            ..RenderOptions::default()
        }
    }

    #[test]
    fn test_copies_render_verbatim() {
        let ops = vec![EditOp::copy(vec![kw("if"), ws(" "), raw("(")])];
        let out = InlineRenderer::default().render(&ops).expect("renders");
        assert_eq!(out, "if (");
    }

    #[test]
    fn test_changes_are_coloured() {
        let ops = vec![
            EditOp::copy(vec![ident("a"), ws(" ")]),
            EditOp::replace(vec![ident("b")], vec![ident("c")]),
        ];
        let out = InlineRenderer::default().render(&ops).expect("renders");
        assert_eq!(out, "a \x1b[38;5;1mb\x1b[0m\x1b[38;5;2mc\x1b[0m");
    }

    #[test]
    fn test_plain_styles_emit_no_escapes() {
        let ops = vec![
            EditOp::delete(vec![ident("x")]),
            EditOp::insert(vec![ident("y")]),
        ];
        let out = InlineRenderer::new(plain_colours())
            .render(&ops)
            .expect("renders");
        assert_eq!(out, "xy");
    }

    #[test]
    fn test_syntax_highlighting_only_touches_copies() {
        let options = RenderOptions {
            syntax_highlighting: true,
            ..plain_colours()
        };
        let ops = vec![
            EditOp::copy(vec![kw("if"), ws(" "), raw("{")]),
            EditOp::insert(vec![kw("return")]),
        ];
        let out = InlineRenderer::new(options).render(&ops).expect("renders");
        assert_eq!(
            out,
            "\x1b[38;5;222mif\x1b[0m \x1b[38;5;222m{\x1b[0mreturn"
        );
    }
}
