//! Metrical and phonetic analysis over ARPABET pronunciations.
//!
//! Given a pronouncing dictionary and a tokenizer (both supplied by the
//! host; this crate never reads a dictionary file itself), [`Engine`]
//! answers three families of questions about English text: does it scan
//! against a given meter, does it have a given syllable count, and how
//! phonetically close is it to another fragment of text (including
//! end-of-line rhyme). See the module docs for the algorithms underneath:
//! [`vowel_graph`] and [`consonant_distance`] for the calibrated distance
//! metric, [`edit_distance`] and [`align`] for the two equivalent ways of
//! scoring a pair of phoneme sequences, and [`meter`] for the pattern
//! language used to describe a line's stress.

#![warn(missing_docs)]

pub mod align;
pub mod consonant_distance;
pub mod constants;
pub mod dictionary;
pub mod edit_distance;
pub mod error;
pub mod meter;
pub mod phoneme;
pub mod rhyme;
pub mod scoring;
pub mod syllable;
pub mod taxonomy;
pub mod text;
pub mod tokenizer;
pub mod vowel_graph;

pub use align::{align, Alignment};
pub use dictionary::{InMemoryDictionary, PronouncingDictionary};
pub use edit_distance::levenshtein_distance;
pub use error::{DictionaryError, MeterError, UnidentifiedWords};
pub use meter::{check_meter_validity, fuzzy_meter_to_binary_set, MeterValidity};
pub use rhyme::{compare_end_line_rhyming_parts, end_rhyme_distance, minimum_rhyme_distance};
pub use syllable::{check_syllable_validity, SyllableValidity};
pub use text::{minimum_text_alignment, minimum_text_distance};
pub use tokenizer::{DefaultTokenizer, Tokenizer};

/// Entry point bundling a dictionary and tokenizer so the public
/// operations can be called without re-passing both every time.
///
/// `Engine` owns no analysis state of its own: the consonant table,
/// vowel-distance matrix, and every scoring function are process-wide
/// pure functions/statics. This struct exists purely to pair a caller's
/// chosen collaborators with the core's entry points.
pub struct Engine<D: PronouncingDictionary, T: Tokenizer> {
    dictionary: D,
    tokenizer: T,
}

impl<D: PronouncingDictionary, T: Tokenizer> Engine<D, T> {
    /// Build an engine over the given dictionary and tokenizer.
    pub fn new(dictionary: D, tokenizer: T) -> Self {
        Engine { dictionary, tokenizer }
    }

    /// Look up every pronunciation variant known for `word`.
    pub fn word_to_phones(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.dictionary.word_to_phones(word)
    }

    /// Check whether `text` conforms to `meter`.
    pub fn check_meter_validity(&self, text: &str, meter: &str) -> MeterValidity {
        check_meter_validity(&self.dictionary, &self.tokenizer, text, meter)
    }

    /// Check whether `text` can be read in exactly `syllables` syllables.
    pub fn check_syllable_validity(&self, text: &str, syllables: usize) -> SyllableValidity {
        check_syllable_validity(&self.dictionary, &self.tokenizer, text, syllables)
    }

    /// Rhyming parts of the last word of each line, trimmed to a common
    /// syllable length.
    pub fn compare_end_line_rhyming_parts(
        &self,
        line1: &str,
        line2: &str,
    ) -> Result<(Vec<phoneme::PhonemeSequence>, Vec<phoneme::PhonemeSequence>), UnidentifiedWords> {
        compare_end_line_rhyming_parts(&self.dictionary, &self.tokenizer, line1, line2)
    }

    /// Minimum edit distance between two end-of-line rhyming parts.
    pub fn end_rhyme_distance(&self, line1: &str, line2: &str) -> Result<i32, UnidentifiedWords> {
        end_rhyme_distance(&self.dictionary, &self.tokenizer, line1, line2)
    }

    /// Minimum edit distance between any reading of `text1` and `text2`.
    pub fn minimum_text_distance(&self, text1: &str, text2: &str) -> Result<i32, UnidentifiedWords> {
        minimum_text_distance(&self.dictionary, &self.tokenizer, text1, text2)
    }

    /// The lowest-scoring alignment between any reading of `text1` and
    /// `text2`.
    pub fn minimum_text_alignment(&self, text1: &str, text2: &str) -> Result<Alignment, UnidentifiedWords> {
        minimum_text_alignment(&self.dictionary, &self.tokenizer, text1, text2)
    }
}
