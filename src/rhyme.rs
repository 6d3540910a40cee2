//! Rhyming-part extraction and end-of-line rhyme comparison.

use crate::dictionary::PronouncingDictionary;
use crate::error::UnidentifiedWords;
use crate::phoneme::{parse_sequence, Phoneme, PhonemeSequence};
use crate::tokenizer::Tokenizer;

/// The suffix of `seq` starting at the last primary-stressed vowel, or (if
/// there is none) the last vowel of any stress, or (if there is no vowel
/// at all) an empty sequence.
pub fn rhyming_part(seq: &[Phoneme]) -> PhonemeSequence {
    let last_primary = seq.iter().rposition(|p| p.stress() == Some(1));
    let last_vowel = last_primary.or_else(|| seq.iter().rposition(|p| p.is_vowel()));

    match last_vowel {
        Some(i) => seq[i..].to_vec(),
        None => Vec::new(),
    }
}

/// Trim `seq` to its last `l` syllables, cutting at the `l`th-from-last
/// vowel and keeping that vowel. If `seq` has fewer than `l` vowels,
/// returns `seq` unchanged.
fn trim_to_last_syllables(seq: &[Phoneme], l: usize) -> PhonemeSequence {
    if l == 0 {
        return Vec::new();
    }
    let vowel_positions: Vec<usize> =
        seq.iter().enumerate().filter(|(_, p)| p.is_vowel()).map(|(i, _)| i).collect();
    if vowel_positions.len() < l {
        return seq.to_vec();
    }
    let start = vowel_positions[vowel_positions.len() - l];
    seq[start..].to_vec()
}

fn last_word(tokenizer: &dyn Tokenizer, line: &str) -> Option<String> {
    tokenizer.tokenize(line).into_iter().last()
}

/// Pronunciation variants' rhyming parts for the last word of each line,
/// trimmed to the shorter side's syllable length.
///
/// Each side's word is looked up independently; if either is unidentified
/// both failures (whichever occurred) are collected into a single error.
pub fn compare_end_line_rhyming_parts(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    line1: &str,
    line2: &str,
) -> Result<(Vec<PhonemeSequence>, Vec<PhonemeSequence>), UnidentifiedWords> {
    let word1 = last_word(tokenizer, line1).unwrap_or_default();
    let word2 = last_word(tokenizer, line2).unwrap_or_default();

    let phones1 = dict.word_to_phones(&word1);
    let phones2 = dict.word_to_phones(&word2);

    let mut missing = Vec::new();
    if let Err(e) = &phones1 {
        missing.push(e.word().to_string());
    }
    if let Err(e) = &phones2 {
        missing.push(e.word().to_string());
    }
    if !missing.is_empty() {
        return Err(UnidentifiedWords(missing));
    }

    let parts1: Vec<PhonemeSequence> =
        phones1.unwrap().iter().map(|p| rhyming_part(&parse_sequence(p))).collect();
    let parts2: Vec<PhonemeSequence> =
        phones2.unwrap().iter().map(|p| rhyming_part(&parse_sequence(p))).collect();

    let min_syllables = parts1
        .iter()
        .chain(parts2.iter())
        .map(|seq| seq.iter().filter(|p| p.is_vowel()).count())
        .min()
        .unwrap_or(0);

    let trimmed1 = parts1.iter().map(|seq| trim_to_last_syllables(seq, min_syllables)).collect();
    let trimmed2 = parts2.iter().map(|seq| trim_to_last_syllables(seq, min_syllables)).collect();

    Ok((trimmed1, trimmed2))
}

/// Minimum `levenshtein_distance` over every pair drawn from the
/// cross-product of the two rhyming-part lists.
pub fn minimum_rhyme_distance(parts: &(Vec<PhonemeSequence>, Vec<PhonemeSequence>)) -> i32 {
    let (left, right) = parts;
    left.iter()
        .flat_map(|a| right.iter().map(move |b| crate::edit_distance::levenshtein_distance(a, b)))
        .min()
        .unwrap_or(0)
}

/// `minimum_rhyme_distance(compare_end_line_rhyming_parts(line1, line2))`,
/// with unidentified-word errors propagated.
pub fn end_rhyme_distance(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    line1: &str,
    line2: &str,
) -> Result<i32, UnidentifiedWords> {
    let parts = compare_end_line_rhyming_parts(dict, tokenizer, line1, line2)?;
    Ok(minimum_rhyme_distance(&parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::InMemoryDictionary;
    use crate::tokenizer::DefaultTokenizer;

    #[test]
    fn test_rhyming_part_primary_stress() {
        let seq = parse_sequence("M AA1 D ER0 N AY2 Z D");
        assert_eq!(rhyming_part(&seq), parse_sequence("AA1 D ER0 N AY2 Z D"));
    }

    #[test]
    fn test_rhyming_part_no_primary_stress_falls_back_to_last_vowel() {
        let seq = parse_sequence("K AH0 T");
        assert_eq!(rhyming_part(&seq), parse_sequence("AH0 T"));
    }

    #[test]
    fn test_rhyming_part_no_vowel_is_empty() {
        let seq = parse_sequence("S T");
        assert!(rhyming_part(&seq).is_empty());
    }

    #[test]
    fn test_rhyming_part_syllable_count_invariant() {
        let seq = parse_sequence("M AA1 D ER0 N AY2 Z D");
        assert!(crate::phoneme::syllable_count(&rhyming_part(&seq)) >= 1);
    }

    fn dict() -> InMemoryDictionary {
        InMemoryDictionary::new([
            ("pulled", vec!["P UH1 L D"]),
            ("pulley", vec!["P UH1 L IY0"]),
            ("summoned", vec!["S AH1 M AH0 N D"]),
            ("bully", vec!["B UH1 L IY0"]),
            ("do", vec!["D UW1"]),
            ("bleed", vec!["B L IY1 D"]),
            ("penelope", vec!["P EH0 N EH1 L OW0 P IY0"]),
        ])
    }

    #[test]
    fn test_end_rhyme_distance_zero() {
        let d = end_rhyme_distance(&dict(), &DefaultTokenizer, "I pulled the pulley", "which summoned by bully").unwrap();
        assert_eq!(d, 0);
    }

    #[test]
    fn test_end_rhyme_distance_nonzero() {
        let d = end_rhyme_distance(&dict(), &DefaultTokenizer, "do you bleed", "Penelope").unwrap();
        let expected = crate::constants::CONSONANT_INDEL_PENALTY + crate::constants::VOWEL_STRESS_PENALTY;
        assert_eq!(d, expected);
    }

    #[test]
    fn test_unidentified_word_propagates() {
        let err = end_rhyme_distance(&dict(), &DefaultTokenizer, "a line ending xyzzy", "another bully").unwrap_err();
        assert_eq!(err.words(), &["XYZZY".to_string()]);
    }
}
