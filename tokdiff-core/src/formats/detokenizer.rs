//! Detokenizer
//!
//! Converts a run of tokens back into source text. Normalization only splits
//! tokens, it never drops characters, so joining the texts of a normalized
//! sequence gives the source back verbatim.

use crate::token::Token;

/// Join the texts of a token run
pub fn detokenize<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(Token::text).collect()
}
