//! Plain-text renderer
//!
//! Marks changes with wdiff-style brackets instead of colours: `[-deleted-]` and
//! `{+inserted+}`. Useful when output goes to a file or a pager without colour.

use crate::diffing::EditOp;
use crate::formats::detokenizer::detokenize;
use crate::formats::registry::{FormatError, Renderer};

#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn name(&self) -> &str {
        "plain"
    }

    fn description(&self) -> &str {
        "Final text with [-deleted-] and {+inserted+} markers"
    }

    fn render(&self, ops: &[EditOp]) -> Result<String, FormatError> {
        let mut out = String::new();
        for op in ops {
            match op {
                EditOp::Copy { tokens } => out.push_str(&detokenize(tokens)),
                EditOp::Insert { tokens } => {
                    out.push_str(&format!("{{+{}+}}", detokenize(tokens)));
                }
                EditOp::Delete { tokens } => {
                    out.push_str(&format!("[-{}-]", detokenize(tokens)));
                }
                EditOp::Replace { orig, r#final } => {
                    out.push_str(&format!(
                        "[-{}-]{{+{}+}}",
                        detokenize(orig),
                        detokenize(r#final)
                    ));
                }
            }
        }
        Ok(out)
    }
}
