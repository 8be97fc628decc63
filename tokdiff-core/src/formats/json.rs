//! JSON renderer: the reconciled edit script, serialized as is.

use crate::diffing::EditOp;
use crate::formats::registry::{FormatError, Renderer};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Reconciled edit script as JSON, for tooling"
    }

    fn render(&self, ops: &[EditOp]) -> Result<String, FormatError> {
        let mut out = serde_json::to_string_pretty(ops)
            .map_err(|e| FormatError::Serialization(e.to_string()))?;
        out.push('\n');
        Ok(out)
    }
}
