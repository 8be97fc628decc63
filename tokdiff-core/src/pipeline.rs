//! Diff pipeline
//!
//! [`SourceDiff`] ties the stages together:
//!
//! 1. **Tokenization**: each side is tokenized on its own (see [`crate::lexing`])
//! 2. **Normalization**: raw tokens become diffable tokens (see [`crate::normalization`])
//! 3. **Sequence diff**: a [`SequenceDiff`] engine computes the raw edit script
//! 4. **Reconciliation**: whitespace-only edits are folded away (see [`reconcile`])
//!
//! Either side may be given as tokens, source text or a file path. Asking for the
//! diff before both sides are set is an error.
//!
//! ```rust
//! use tokdiff_core::pipeline::SourceDiff;
//!
//! let diff = SourceDiff::from_sources("if (a) {}", "if(a){}");
//! let ops = diff.compute()?;
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::diffing::{reconcile, EditOp, SequenceDiff, SimilarDiff};
use crate::error::{DiffError, DiffResult};
use crate::lexing::tokenize;
use crate::normalization::normalize;
use crate::token::RawToken;

/// Two sides of a diff and the engine used to compare them
#[derive(Debug, Clone)]
pub struct SourceDiff<E = SimilarDiff> {
    original: Option<Vec<RawToken>>,
    r#final: Option<Vec<RawToken>>,
    engine: E,
}

impl SourceDiff {
    /// Pipeline with the default engine and no sides set
    pub fn new() -> Self {
        Self::with_engine(SimilarDiff::default())
    }

    pub fn from_sources(original: &str, r#final: &str) -> Self {
        let mut diff = Self::new();
        diff.set_original_source(original).set_final_source(r#final);
        diff
    }

    pub fn from_files(original: impl AsRef<Path>, r#final: impl AsRef<Path>) -> DiffResult<Self> {
        let mut diff = Self::new();
        diff.set_original_file(original)?.set_final_file(r#final)?;
        Ok(diff)
    }
}

impl Default for SourceDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SequenceDiff> SourceDiff<E> {
    pub fn with_engine(engine: E) -> Self {
        SourceDiff {
            original: None,
            r#final: None,
            engine,
        }
    }

    pub fn set_original_tokens(&mut self, tokens: Vec<RawToken>) -> &mut Self {
        self.original = Some(tokens);
        self
    }

    pub fn set_final_tokens(&mut self, tokens: Vec<RawToken>) -> &mut Self {
        self.r#final = Some(tokens);
        self
    }

    pub fn set_original_source(&mut self, source: &str) -> &mut Self {
        self.set_original_tokens(tokenize(source))
    }

    pub fn set_final_source(&mut self, source: &str) -> &mut Self {
        self.set_final_tokens(tokenize(source))
    }

    pub fn set_original_file(&mut self, path: impl AsRef<Path>) -> DiffResult<&mut Self> {
        let source = read_source(path.as_ref())?;
        Ok(self.set_original_source(&source))
    }

    pub fn set_final_file(&mut self, path: impl AsRef<Path>) -> DiffResult<&mut Self> {
        let source = read_source(path.as_ref())?;
        Ok(self.set_final_source(&source))
    }

    /// Run normalization, the sequence diff and reconciliation.
    pub fn compute(&self) -> DiffResult<Vec<EditOp>> {
        let (Some(original), Some(r#final)) = (&self.original, &self.r#final) else {
            return Err(DiffError::invalid_argument(
                "both the original and the final side must be set before diffing",
            ));
        };

        let original = normalize(original.iter().cloned());
        let r#final = normalize(r#final.iter().cloned());
        debug!(
            original_tokens = original.len(),
            final_tokens = r#final.len(),
            "normalized both sides"
        );

        let raw_script = self.engine.diff(&original, &r#final);
        debug!(ops = raw_script.len(), "raw edit script");

        let reconciled = reconcile(raw_script);
        let summary = DiffSummary::of(&reconciled);
        debug!(
            ops = reconciled.len(),
            inserts = summary.inserts,
            deletes = summary.deletes,
            replaces = summary.replaces,
            "reconciled edit script"
        );

        Ok(reconciled)
    }
}

fn read_source(path: &Path) -> DiffResult<String> {
    fs::read_to_string(path).map_err(|e| DiffError::unreadable(path, e))
}

/// Op and token counts of an edit script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub copies: usize,
    pub inserts: usize,
    pub deletes: usize,
    pub replaces: usize,
    /// Final-side tokens in inserts and replaces
    pub added_tokens: usize,
    /// Original-side tokens in deletes and replaces
    pub removed_tokens: usize,
}

impl DiffSummary {
    pub fn of(ops: &[EditOp]) -> Self {
        let mut summary = DiffSummary::default();
        for op in ops {
            match op {
                EditOp::Copy { .. } => summary.copies += 1,
                EditOp::Insert { tokens } => {
                    summary.inserts += 1;
                    summary.added_tokens += tokens.len();
                }
                EditOp::Delete { tokens } => {
                    summary.deletes += 1;
                    summary.removed_tokens += tokens.len();
                }
                EditOp::Replace { orig, r#final } => {
                    summary.replaces += 1;
                    summary.removed_tokens += orig.len();
                    summary.added_tokens += r#final.len();
                }
            }
        }
        summary
    }

    /// True if anything besides copies survived reconciliation
    pub fn has_changes(&self) -> bool {
        self.inserts + self.deletes + self.replaces > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ident, ws};
    use crate::token::TokenKind;

    #[test]
    fn test_compute_requires_both_sides() {
        let mut diff = SourceDiff::new();
        assert!(matches!(
            diff.compute(),
            Err(DiffError::InvalidArgument(_))
        ));

        diff.set_original_source("a");
        assert!(matches!(
            diff.compute(),
            Err(DiffError::InvalidArgument(_))
        ));

        diff.set_final_source("a");
        assert!(diff.compute().is_ok());
    }

    #[test]
    fn test_whitespace_reformat_has_no_changes() {
        let ops = SourceDiff::from_sources("if ($a) {\n  b();\n}\n", "if($a){\n\tb();\n}\n")
            .compute()
            .expect("both sides set");
        assert!(!DiffSummary::of(&ops).has_changes(), "{ops:?}");
    }

    #[test]
    fn test_renamed_identifier_is_a_change() {
        let ops = SourceDiff::from_sources("foo();", "bar();")
            .compute()
            .expect("both sides set");
        let summary = DiffSummary::of(&ops);
        assert_eq!(summary.replaces, 1);
        assert_eq!(summary.added_tokens, 1);
        assert_eq!(summary.removed_tokens, 1);
    }

    #[test]
    fn test_tokens_can_be_supplied_directly() {
        let mut diff = SourceDiff::new();
        diff.set_original_tokens(vec![RawToken::classified(TokenKind::Identifier, "a", 1)])
            .set_final_tokens(vec![
                RawToken::classified(TokenKind::Identifier, "a", 1),
                RawToken::classified(TokenKind::Whitespace, " ", 1),
            ]);
        let ops = diff.compute().expect("both sides set");
        assert_eq!(
            ops,
            vec![EditOp::copy(vec![ident("a")]), EditOp::copy(vec![ws(" ")])]
        );
    }

    #[test]
    fn test_missing_file_is_unreadable() {
        let mut diff = SourceDiff::new();
        let err = diff
            .set_original_file("/definitely/not/here.php")
            .expect_err("file does not exist");
        assert!(matches!(err, DiffError::UnreadableInput { .. }));
    }

    #[test]
    fn test_summary_counts() {
        let ops = vec![
            EditOp::copy(vec![ident("a")]),
            EditOp::insert(vec![ident("b"), ws(" ")]),
            EditOp::delete(vec![ident("c")]),
            EditOp::replace(vec![ident("d")], vec![ident("e"), ident("f")]),
        ];
        let summary = DiffSummary::of(&ops);
        assert_eq!(
            summary,
            DiffSummary {
                copies: 1,
                inserts: 1,
                deletes: 1,
                replaces: 1,
                added_tokens: 4,
                removed_tokens: 2,
            }
        );
        assert!(summary.has_changes());
        assert!(!DiffSummary::default().has_changes());
    }
}
