//! Edit operations produced by the diff engine and rewritten by the reconciler.

use serde::Serialize;

use crate::token::Token;

/// One step of an edit script.
///
/// Reading the `Copy`, `Delete` and `orig` tokens of a script in order gives the
/// original sequence back; reading the `Copy`, `Insert` and `final` tokens gives
/// the final sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// Unchanged run, holding the final side's tokens
    Copy { tokens: Vec<Token> },
    Insert { tokens: Vec<Token> },
    Delete { tokens: Vec<Token> },
    Replace {
        orig: Vec<Token>,
        #[serde(rename = "final")]
        r#final: Vec<Token>,
    },
}

impl EditOp {
    pub fn copy(tokens: Vec<Token>) -> Self {
        EditOp::Copy { tokens }
    }

    pub fn insert(tokens: Vec<Token>) -> Self {
        EditOp::Insert { tokens }
    }

    pub fn delete(tokens: Vec<Token>) -> Self {
        EditOp::Delete { tokens }
    }

    pub fn replace(orig: Vec<Token>, r#final: Vec<Token>) -> Self {
        EditOp::Replace { orig, r#final }
    }

    /// Tokens this op contributes to the original side
    pub fn original_tokens(&self) -> &[Token] {
        match self {
            EditOp::Copy { tokens } | EditOp::Delete { tokens } => tokens,
            EditOp::Insert { .. } => &[],
            EditOp::Replace { orig, .. } => orig,
        }
    }

    /// Tokens this op contributes to the final side
    pub fn final_tokens(&self) -> &[Token] {
        match self {
            EditOp::Copy { tokens } | EditOp::Insert { tokens } => tokens,
            EditOp::Delete { .. } => &[],
            EditOp::Replace { r#final, .. } => r#final,
        }
    }

    /// Anything other than a copy is a visible change
    pub fn is_change(&self) -> bool {
        !matches!(self, EditOp::Copy { .. })
    }
}

/// Original-side reconstruction of an edit script
pub fn original_side(ops: &[EditOp]) -> Vec<&Token> {
    ops.iter().flat_map(EditOp::original_tokens).collect()
}

/// Final-side reconstruction of an edit script
pub fn final_side(ops: &[EditOp]) -> Vec<&Token> {
    ops.iter().flat_map(EditOp::final_tokens).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ident, raw, ws};

    #[test]
    fn sides_follow_op_kind() {
        let ops = vec![
            EditOp::copy(vec![ident("a")]),
            EditOp::delete(vec![ident("b")]),
            EditOp::insert(vec![ident("c")]),
            EditOp::replace(vec![raw("(")], vec![raw("["), ws(" ")]),
        ];

        let orig: Vec<_> = original_side(&ops).into_iter().map(Token::text).collect();
        let fin: Vec<_> = final_side(&ops).into_iter().map(Token::text).collect();
        assert_eq!(orig, vec!["a", "b", "("]);
        assert_eq!(fin, vec!["a", "c", "[", " "]);
    }

    #[test]
    fn only_copy_is_not_a_change() {
        assert!(!EditOp::copy(vec![]).is_change());
        assert!(EditOp::insert(vec![]).is_change());
        assert!(EditOp::delete(vec![]).is_change());
        assert!(EditOp::replace(vec![], vec![]).is_change());
    }

    #[test]
    fn serializes_with_op_tag() {
        let json = serde_json::to_value(EditOp::replace(vec![ident("a")], vec![ident("b")]))
            .expect("op serializes");
        assert_eq!(json["op"], "replace");
        assert_eq!(json["orig"][0]["text"], "a");
        assert_eq!(json["final"][0]["kind"], "identifier");
    }
}
