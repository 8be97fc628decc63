//! Diffing: edit scripts, the sequence diff engine and the whitespace reconciler.

pub mod edit;
pub mod engine;
pub mod reconcile;

pub use edit::{final_side, original_side, EditOp};
pub use engine::{DiffAlgorithm, SequenceDiff, SimilarDiff};
pub use reconcile::{reconcile, split_replace, SegmentContext, Segmenter};
