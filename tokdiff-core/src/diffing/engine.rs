//! Sequence diff engine
//!
//! The reconciler does not care how the raw edit script is computed, only that it
//! reconstructs both sides. [`SequenceDiff`] is that seam; [`SimilarDiff`] fills it
//! with the `similar` crate.

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffOp};

use crate::diffing::edit::EditOp;
use crate::token::{Token, TokenKind};

/// Computes a minimal edit script between two normalized token sequences.
///
/// Tokens are compared by [`Token::key`]. Implementations must return a script
/// whose original side is `orig` and whose final side is `r#final`.
pub trait SequenceDiff {
    fn diff(&self, orig: &[Token], r#final: &[Token]) -> Vec<EditOp>;
}

/// Diff algorithm used by [`SimilarDiff`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
    Lcs,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(algorithm: DiffAlgorithm) -> Self {
        match algorithm {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
            DiffAlgorithm::Lcs => Algorithm::Lcs,
        }
    }
}

/// [`SequenceDiff`] backed by `similar`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarDiff {
    algorithm: DiffAlgorithm,
}

impl SimilarDiff {
    pub fn new(algorithm: DiffAlgorithm) -> Self {
        SimilarDiff { algorithm }
    }

    pub fn algorithm(&self) -> DiffAlgorithm {
        self.algorithm
    }
}

impl SequenceDiff for SimilarDiff {
    fn diff(&self, orig: &[Token], r#final: &[Token]) -> Vec<EditOp> {
        let old_keys: Vec<(TokenKind, &str)> = orig.iter().map(Token::key).collect();
        let new_keys: Vec<(TokenKind, &str)> = r#final.iter().map(Token::key).collect();

        capture_diff_slices(self.algorithm.into(), &old_keys, &new_keys)
            .into_iter()
            .map(|op| match op {
                DiffOp::Equal {
                    new_index, len, ..
                } => EditOp::copy(r#final[new_index..new_index + len].to_vec()),
                DiffOp::Delete {
                    old_index, old_len, ..
                } => EditOp::delete(orig[old_index..old_index + old_len].to_vec()),
                DiffOp::Insert {
                    new_index, new_len, ..
                } => EditOp::insert(r#final[new_index..new_index + new_len].to_vec()),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => EditOp::replace(
                    orig[old_index..old_index + old_len].to_vec(),
                    r#final[new_index..new_index + new_len].to_vec(),
                ),
            })
            .collect()
    }
}
