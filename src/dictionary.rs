//! Pronouncing dictionary collaborator.
//!
//! The core never loads a dictionary file itself (that's a host concern);
//! it only consumes a lookup behind the [`PronouncingDictionary`] trait.
//! [`InMemoryDictionary`] is the one concrete implementation the crate
//! ships, so the public API is usable out of the box without a host
//! providing its own CMU Pronouncing Dictionary loader.

use crate::error::DictionaryError;
use std::collections::HashMap;

/// A word → pronunciation-variants lookup.
///
/// Implementors are free to back this with a loaded file, a network
/// service, or (as here) a plain in-memory map; the core only ever calls
/// through this trait.
pub trait PronouncingDictionary {
    /// Look up every pronunciation variant known for `word`.
    ///
    /// Lookup is case-insensitive; implementations should normalize
    /// `word` the same way regardless of the caller's casing.
    fn word_to_phones(&self, word: &str) -> Result<Vec<String>, DictionaryError>;
}

/// A `HashMap`-backed [`PronouncingDictionary`], keyed case-insensitively
/// by the upper-cased word.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl InMemoryDictionary {
    /// Build a dictionary from an iterator of `(word, pronunciation
    /// variants)` pairs. Words are upper-cased on insertion so lookups are
    /// case-insensitive.
    pub fn new<I, W, P>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Vec<P>)>,
        W: AsRef<str>,
        P: Into<String>,
    {
        let mut map = HashMap::new();
        for (word, phones) in entries {
            map.insert(
                word.as_ref().to_uppercase(),
                phones.into_iter().map(Into::into).collect(),
            );
        }
        InMemoryDictionary { entries: map }
    }

    /// Insert or replace the pronunciation variants for a single word.
    pub fn insert<P: Into<String>>(&mut self, word: &str, phones: Vec<P>) {
        self.entries
            .insert(word.to_uppercase(), phones.into_iter().map(Into::into).collect());
    }
}

impl PronouncingDictionary for InMemoryDictionary {
    fn word_to_phones(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.entries
            .get(&word.to_uppercase())
            .cloned()
            .ok_or_else(|| DictionaryError(word.to_uppercase()))
    }
}
