//! Phonemes
//!
//! An ARPABET symbol, as used by the CMU Pronouncing Dictionary: a
//! consonant (1-3 letters, no trailing digit) or a vowel (2 letters plus a
//! stress digit `0`, `1`, or `2`). The only classification heuristic used
//! anywhere in this crate is "the last character is a digit".

use std::fmt;

/// A single ARPABET phoneme symbol, e.g. `"K"` or `"IH1"`.
///
/// Phonemes compare and hash by their symbol, so `Phoneme::new("IH1")` and
/// a second independently-constructed `Phoneme::new("IH1")` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phoneme(String);

/// A sentinel representing an alignment gap: an insertion on the other
/// side of an [`crate::align::Alignment`]. Not a member of the phoneme
/// alphabet.
pub const GAP: &str = "-";

impl Phoneme {
    /// Construct a phoneme from its ARPABET symbol.
    pub fn new(symbol: &str) -> Self {
        Phoneme(symbol.to_string())
    }

    /// The symbol's textual representation.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A vowel is any phoneme whose symbol ends in a stress digit.
    pub fn is_vowel(&self) -> bool {
        self.0
            .chars()
            .last()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
    }

    /// A consonant is any phoneme that is not a vowel.
    pub fn is_consonant(&self) -> bool {
        !self.is_vowel()
    }

    /// The stress digit (`0`, `1`, or `2`) for a vowel phoneme, or `None`
    /// for a consonant.
    pub fn stress(&self) -> Option<u8> {
        if !self.is_vowel() {
            return None;
        }
        self.0
            .chars()
            .last()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8)
    }

    /// The symbol with its trailing stress digit removed. For a
    /// consonant, this is the symbol itself.
    pub fn bare_vowel(&self) -> &str {
        if self.is_vowel() {
            &self.0[..self.0.len() - 1]
        } else {
            &self.0
        }
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Phoneme {
    fn from(symbol: &str) -> Self {
        Phoneme::new(symbol)
    }
}

/// Ordered finite list of phonemes, with an interchangeable external form
/// of a single space-separated string.
pub type PhonemeSequence = Vec<Phoneme>;

/// Parse a space-separated ARPABET string into a [`PhonemeSequence`].
/// Leading/trailing whitespace is trimmed and runs of interior whitespace
/// collapse. An empty (or all-whitespace) string yields an empty sequence.
pub fn parse_sequence(phones: &str) -> PhonemeSequence {
    phones.split_whitespace().map(Phoneme::new).collect()
}

/// Render a [`PhonemeSequence`] back to its space-separated string form.
pub fn sequence_to_string(seq: &[Phoneme]) -> String {
    seq.iter()
        .map(Phoneme::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The stress pattern of a pronunciation: the sequence of stress digits
/// (`'0'`, `'1'`, `'2'`) of its vowels, in order, e.g. `"M AA1 D ER0 N AY2 Z
/// D"` yields `"102"`.
pub fn stress_pattern(seq: &[Phoneme]) -> String {
    seq.iter()
        .filter_map(|p| p.stress())
        .map(|d| char::from_digit(d as u32, 10).unwrap())
        .collect()
}

/// The number of syllables in a pronunciation: the count of its vowel
/// phonemes (equivalently, the length of its [`stress_pattern`]).
pub fn syllable_count(seq: &[Phoneme]) -> usize {
    seq.iter().filter(|p| p.is_vowel()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_vowel() {
        assert!(Phoneme::new("IH1").is_vowel());
        assert!(Phoneme::new("AH0").is_vowel());
        assert!(!Phoneme::new("K").is_vowel());
        assert!(!Phoneme::new("NG").is_vowel());
    }

    #[test]
    fn test_stress() {
        assert_eq!(Phoneme::new("IH1").stress(), Some(1));
        assert_eq!(Phoneme::new("AH0").stress(), Some(0));
        assert_eq!(Phoneme::new("K").stress(), None);
    }

    #[test]
    fn test_bare_vowel() {
        assert_eq!(Phoneme::new("IH1").bare_vowel(), "IH");
        assert_eq!(Phoneme::new("K").bare_vowel(), "K");
    }

    #[test]
    fn test_parse_sequence_collapses_whitespace() {
        let seq = parse_sequence("  K  IH1 T   AH0 N ");
        assert_eq!(
            seq,
            vec![
                Phoneme::new("K"),
                Phoneme::new("IH1"),
                Phoneme::new("T"),
                Phoneme::new("AH0"),
                Phoneme::new("N"),
            ]
        );
    }

    #[test]
    fn test_parse_sequence_empty() {
        assert_eq!(parse_sequence(""), Vec::<Phoneme>::new());
        assert_eq!(parse_sequence("   "), Vec::<Phoneme>::new());
    }

    #[test]
    fn test_stress_pattern() {
        let seq = parse_sequence("M AA1 D ER0 N AY2 Z D");
        assert_eq!(stress_pattern(&seq), "102");
    }

    #[test]
    fn test_syllable_count() {
        let seq = parse_sequence("F AY1 ER0");
        assert_eq!(syllable_count(&seq), 2);
    }

    #[test]
    fn test_sequence_to_string_roundtrip() {
        let s = "K IH1 T AH0 N";
        assert_eq!(sequence_to_string(&parse_sequence(s)), s);
    }
}
