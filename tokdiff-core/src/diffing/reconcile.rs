//! Whitespace-aware reconciliation of an edit script
//!
//! The diff engine reports every difference, including ones that only move
//! whitespace around. This pass rewrites the script so that only changes involving
//! at least one non-whitespace token remain visible:
//!
//! - `Copy` is kept as is.
//! - A whitespace-only `Insert` becomes a `Copy`; other inserts are kept.
//! - A whitespace-only `Delete` is dropped; other deletes are kept.
//! - A `Replace` is cut into segments by [`Segmenter`]: runs where both sides are
//!   whitespace at the same position collapse into a `Copy` of the final side,
//!   other runs stay `Replace` unless both sides are token-for-token equal, in
//!   which case they are a `Copy` too. Whatever one side has beyond the other
//!   becomes a trailing `Insert` or `Delete`.
//!
//! The rules are deliberately asymmetric. Original-side whitespace that was removed
//! or replaced never shows up in the output, so the original side cannot be rebuilt
//! from a reconciled script. The final side always can.
//!
//! Order is never changed, neither across ops nor within one.

use tracing::trace;

use crate::diffing::edit::EditOp;
use crate::token::{is_whitespace_only, Token};

/// Rewrite a raw edit script. Pure and total.
pub fn reconcile<I>(ops: I) -> Vec<EditOp>
where
    I: IntoIterator<Item = EditOp>,
{
    let mut result = Vec::new();

    for op in ops {
        match op {
            copy @ EditOp::Copy { .. } => result.push(copy),
            EditOp::Insert { tokens } => {
                if is_whitespace_only(&tokens) {
                    result.push(EditOp::copy(tokens));
                } else {
                    result.push(EditOp::insert(tokens));
                }
            }
            EditOp::Delete { tokens } => {
                if !is_whitespace_only(&tokens) {
                    result.push(EditOp::delete(tokens));
                }
            }
            EditOp::Replace { orig, r#final } => result.extend(split_replace(orig, r#final)),
        }
    }

    result
}

/// Segment a single `Replace` into copies, replaces and at most one trailing
/// insert or delete.
pub fn split_replace(orig: Vec<Token>, r#final: Vec<Token>) -> Vec<EditOp> {
    let (orig_len, final_len) = (orig.len(), r#final.len());
    let aligned = orig_len.min(final_len);

    let mut segmenter = Segmenter::new(SegmentContext::of_pair(orig.first(), r#final.first()));
    let mut orig = orig.into_iter();
    let mut r#final = r#final.into_iter();

    for (o, f) in orig.by_ref().take(aligned).zip(r#final.by_ref().take(aligned)) {
        segmenter.push(o, f);
    }

    let mut segments = segmenter.finish();

    let final_tail: Vec<Token> = r#final.collect();
    let orig_tail: Vec<Token> = orig.collect();
    if !final_tail.is_empty() {
        segments.push(EditOp::insert(final_tail));
    } else if !orig_tail.is_empty() {
        segments.push(EditOp::delete(orig_tail));
    }

    trace!(
        orig_len,
        final_len,
        segments = segments.len(),
        "split replace"
    );
    segments
}

/// Mode of the segmentation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentContext {
    /// Both sides whitespace at every accumulated position
    Whitespace,
    NonWhitespace,
}

impl SegmentContext {
    /// Classify an aligned pair. A missing side counts as non-whitespace.
    pub fn of_pair(orig: Option<&Token>, r#final: Option<&Token>) -> Self {
        match (orig, r#final) {
            (Some(o), Some(f)) if o.is_whitespace() && f.is_whitespace() => {
                SegmentContext::Whitespace
            }
            _ => SegmentContext::NonWhitespace,
        }
    }
}

/// Two-state machine that accumulates aligned token pairs and emits one segment
/// each time the context flips.
#[derive(Debug)]
pub struct Segmenter {
    context: SegmentContext,
    orig_acc: Vec<Token>,
    final_acc: Vec<Token>,
    segments: Vec<EditOp>,
}

impl Segmenter {
    pub fn new(context: SegmentContext) -> Self {
        Segmenter {
            context,
            orig_acc: Vec::new(),
            final_acc: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn context(&self) -> SegmentContext {
        self.context
    }

    /// Feed the next aligned pair, flushing first if the pair changes context
    pub fn push(&mut self, orig: Token, r#final: Token) {
        let context = SegmentContext::of_pair(Some(&orig), Some(&r#final));
        if context != self.context {
            self.flush();
            self.context = context;
        }
        self.orig_acc.push(orig);
        self.final_acc.push(r#final);
    }

    /// Flush what is left and return the segments in order
    pub fn finish(mut self) -> Vec<EditOp> {
        self.flush();
        self.segments
    }

    fn flush(&mut self) {
        // Accumulators grow in lockstep, checking one is enough
        if self.orig_acc.is_empty() {
            return;
        }

        let orig = std::mem::take(&mut self.orig_acc);
        let r#final = std::mem::take(&mut self.final_acc);
        let segment = match self.context {
            SegmentContext::Whitespace => EditOp::copy(r#final),
            SegmentContext::NonWhitespace if same_keys(&orig, &r#final) => EditOp::copy(r#final),
            SegmentContext::NonWhitespace => EditOp::replace(orig, r#final),
        };
        self.segments.push(segment);
    }
}

/// Runs that compare equal token by token are not a change, whatever put them in a replace
fn same_keys(orig: &[Token], r#final: &[Token]) -> bool {
    orig.len() == r#final.len() && orig.iter().zip(r#final).all(|(o, f)| o.key() == f.key())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{comment, ident, kw, raw, ws};

    #[test]
    fn test_copy_passes_through() {
        let ops = vec![EditOp::copy(vec![ident("a"), ws(" ")])];
        assert_eq!(reconcile(ops.clone()), ops);
    }

    #[test]
    fn test_whitespace_insert_becomes_copy() {
        let result = reconcile(vec![EditOp::insert(vec![ws(" "), ws("\n")])]);
        assert_eq!(result, vec![EditOp::copy(vec![ws(" "), ws("\n")])]);
    }

    #[test]
    fn test_mixed_insert_is_kept() {
        let ops = vec![EditOp::insert(vec![ws(" "), ident("x")])];
        assert_eq!(reconcile(ops.clone()), ops);
    }

    #[test]
    fn test_whitespace_delete_is_dropped() {
        let result = reconcile(vec![
            EditOp::copy(vec![ident("a")]),
            EditOp::delete(vec![ws("  ")]),
            EditOp::copy(vec![ident("b")]),
        ]);
        assert_eq!(
            result,
            vec![
                EditOp::copy(vec![ident("a")]),
                EditOp::copy(vec![ident("b")]),
            ]
        );
    }

    #[test]
    fn test_mixed_delete_is_kept() {
        let ops = vec![EditOp::delete(vec![comment("// x"), ws("\n")])];
        assert_eq!(reconcile(ops.clone()), ops);
    }

    #[test]
    fn test_whitespace_to_whitespace_replace_keeps_final() {
        let result = split_replace(vec![ws(" ")], vec![ws("\t")]);
        assert_eq!(result, vec![EditOp::copy(vec![ws("\t")])]);
    }

    #[test]
    fn test_replace_alternates_segments() {
        let orig = vec![ident("a"), ws(" "), ws(" "), ident("b")];
        let fin = vec![ident("x"), ws("\t"), ws("\n"), ident("y")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::replace(vec![ident("a")], vec![ident("x")]),
                EditOp::copy(vec![ws("\t"), ws("\n")]),
                EditOp::replace(vec![ident("b")], vec![ident("y")]),
            ]
        );
    }

    #[test]
    fn test_equal_runs_inside_replace_become_copies() {
        let orig = vec![kw("if"), ws(" "), raw("(")];
        let fin = vec![kw("if"), ws("\t"), raw("(")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::copy(vec![kw("if")]),
                EditOp::copy(vec![ws("\t")]),
                EditOp::copy(vec![raw("(")]),
            ]
        );
    }

    #[test]
    fn test_textual_difference_keeps_its_replace() {
        let orig = vec![kw("if"), ws(" "), raw("(")];
        let fin = vec![kw("while"), ws("\t"), raw("(")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::replace(vec![kw("if")], vec![kw("while")]),
                EditOp::copy(vec![ws("\t")]),
                EditOp::copy(vec![raw("(")]),
            ]
        );
    }

    #[test]
    fn test_whitespace_against_code_is_a_replace() {
        let result = split_replace(vec![ws(" ")], vec![raw(";")]);
        assert_eq!(result, vec![EditOp::replace(vec![ws(" ")], vec![raw(";")])]);
    }

    #[test]
    fn test_longer_final_ends_with_insert() {
        let orig = vec![ws(" ")];
        let fin = vec![ws("  "), kw("return"), ws(" ")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::copy(vec![ws("  ")]),
                EditOp::insert(vec![kw("return"), ws(" ")]),
            ]
        );
    }

    #[test]
    fn test_longer_orig_ends_with_delete() {
        let orig = vec![ident("a"), ident("b"), ws(" ")];
        let fin = vec![ident("c")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::replace(vec![ident("a")], vec![ident("c")]),
                EditOp::delete(vec![ident("b"), ws(" ")]),
            ]
        );
    }

    #[test]
    fn test_trailing_tail_is_not_reconciled_again() {
        // A whitespace-only tail still surfaces as a delete
        let orig = vec![ident("a"), ws(" ")];
        let fin = vec![ident("b")];
        assert_eq!(
            split_replace(orig, fin),
            vec![
                EditOp::replace(vec![ident("a")], vec![ident("b")]),
                EditOp::delete(vec![ws(" ")]),
            ]
        );
    }

    #[test]
    fn test_empty_side_replace() {
        assert_eq!(
            split_replace(vec![], vec![ident("a")]),
            vec![EditOp::insert(vec![ident("a")])]
        );
        assert_eq!(
            split_replace(vec![ident("a")], vec![]),
            vec![EditOp::delete(vec![ident("a")])]
        );
        assert!(split_replace(vec![], vec![]).is_empty());
    }

    #[test]
    fn test_initial_context() {
        assert_eq!(
            SegmentContext::of_pair(Some(&ws(" ")), Some(&ws("\t"))),
            SegmentContext::Whitespace
        );
        assert_eq!(
            SegmentContext::of_pair(Some(&ws(" ")), Some(&ident("a"))),
            SegmentContext::NonWhitespace
        );
        assert_eq!(
            SegmentContext::of_pair(None, Some(&ws(" "))),
            SegmentContext::NonWhitespace
        );
    }

    #[test]
    fn test_segmenter_tracks_context() {
        let mut segmenter = Segmenter::new(SegmentContext::NonWhitespace);
        segmenter.push(ws(" "), ws("  "));
        assert_eq!(segmenter.context(), SegmentContext::Whitespace);
        segmenter.push(ident("a"), ident("b"));
        assert_eq!(segmenter.context(), SegmentContext::NonWhitespace);
        assert_eq!(
            segmenter.finish(),
            vec![
                EditOp::copy(vec![ws("  ")]),
                EditOp::replace(vec![ident("a")], vec![ident("b")]),
            ]
        );
    }

    #[test]
    fn test_ops_keep_their_order() {
        let result = reconcile(vec![
            EditOp::insert(vec![ident("a")]),
            EditOp::replace(vec![ws(" ")], vec![ws("\n")]),
            EditOp::delete(vec![ident("b")]),
        ]);
        assert_eq!(
            result,
            vec![
                EditOp::insert(vec![ident("a")]),
                EditOp::copy(vec![ws("\n")]),
                EditOp::delete(vec![ident("b")]),
            ]
        );
    }
}
