//! # tokdiff-core
//!
//! Whitespace-tolerant diffing of tokenized source.
//!
//! Two versions of a file are tokenized, normalized into comparable tokens and
//! diffed token by token. The resulting edit script is then reconciled: edits that
//! only add, remove or change whitespace stop showing up as changes, while any edit
//! that touches a non-whitespace token is kept as it was.
//!
//! Layout
//!
//!   token          Token model shared by every stage
//!   lexing         logos lexer for C-family / PHP-style source
//!   normalization  Raw tokens to diffable tokens (doc comment folding, line splitting)
//!   diffing        Edit script, sequence diff engine, whitespace reconciler
//!   pipeline       SourceDiff: the stages wired together
//!   formats        Renderers (inline, plain, html, json) and their registry
//!
//! The lexer, the sequence diff engine and the renderers sit behind small seams
//! (`RawToken`, [`diffing::SequenceDiff`], [`formats::Renderer`]) and can be swapped.

pub mod diffing;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod normalization;
pub mod pipeline;
pub mod testing;
pub mod token;

pub use diffing::{reconcile, DiffAlgorithm, EditOp, SequenceDiff, SimilarDiff};
pub use error::{DiffError, DiffResult};
pub use lexing::tokenize;
pub use normalization::normalize;
pub use pipeline::{DiffSummary, SourceDiff};
pub use token::{RawToken, Token, TokenKind};
