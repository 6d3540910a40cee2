//! Error taxonomy
//!
//! Every fallible operation in this crate surfaces a typed error value
//! rather than panicking. There are three families: a missing dictionary
//! entry, a malformed meter string, and an aggregated set of words that
//! could not be identified in a multi-word query.

use thiserror::Error;

/// The dictionary has no entry for a given word.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("word not found in dictionary: {0}")]
pub struct DictionaryError(pub String);

impl DictionaryError {
    /// The word that triggered the lookup failure.
    pub fn word(&self) -> &str {
        &self.0
    }
}

/// Structural error in a meter pattern string.
///
/// `MeterParser` rejects nested optional groups and unbalanced parentheses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeterError {
    /// An optional group `(...)` was opened while already inside one.
    #[error("meter contains a nested optional group")]
    NestedOptional,
    /// The meter ended, or hit a `)`, without a matching open paren.
    #[error("meter contains an unclosed or unmatched optional group")]
    UnclosedOptional,
    /// A character other than `x`, `/`, `(`, `)`, or whitespace appeared.
    #[error("meter contains an unrecognized character: {0:?}")]
    UnrecognizedCharacter(char),
}

/// A multi-text comparison could not be completed because one or more words
/// on either side were not found in the dictionary.
///
/// This is never partial: either a full result is produced, or every
/// unidentified word across both sides is collected into one error value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unidentified words: {0:?}")]
pub struct UnidentifiedWords(pub Vec<String>);

impl UnidentifiedWords {
    /// The unidentified words, in first-encountered order, left side first.
    pub fn words(&self) -> &[String] {
        &self.0
    }
}
