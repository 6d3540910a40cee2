//! Validates a line of text against a target syllable count, the
//! syllable-counting analogue of [`crate::meter::validator`].

use crate::dictionary::PronouncingDictionary;
use crate::phoneme::{parse_sequence, syllable_count};
use crate::tokenizer::Tokenizer;
use log::warn;
use std::collections::HashSet;

/// Result of checking a line of text against a target syllable count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllableValidity {
    /// Whether some reading of the text's pronunciation variants sums
    /// exactly to the target count.
    pub is_valid: bool,
    /// Words the dictionary didn't recognize; reported even when present,
    /// but forces `is_valid` false.
    pub unrecognized_words: Vec<String>,
}

/// Check whether `text` can be read in exactly `target` syllables, given
/// its words' pronunciation variants.
pub fn check_syllable_validity(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text: &str,
    target: usize,
) -> SyllableValidity {
    let mut candidates: HashSet<usize> = HashSet::from([target]);
    let mut unrecognized_words = Vec::new();

    for word in tokenizer.tokenize(text) {
        let phones = match dict.word_to_phones(&word) {
            Ok(phones) => phones,
            Err(e) => {
                warn!("check_syllable_validity: unrecognized word {word:?}");
                unrecognized_words.push(e.word().to_string());
                continue;
            }
        };

        let counts: HashSet<usize> = phones
            .iter()
            .map(|p| syllable_count(&parse_sequence(p)))
            .collect();

        let mut next_candidates: HashSet<usize> = HashSet::new();
        for &count in &counts {
            for &candidate in &candidates {
                if candidate >= count {
                    next_candidates.insert(candidate - count);
                }
            }
        }

        candidates = next_candidates;
        if candidates.is_empty() {
            return SyllableValidity { is_valid: false, unrecognized_words };
        }
    }

    let is_valid = unrecognized_words.is_empty() && candidates.contains(&0);
    SyllableValidity { is_valid, unrecognized_words }
}
