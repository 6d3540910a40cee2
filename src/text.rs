//! Cross-product combinator over per-word pronunciation variants, used to
//! compare two full texts by their minimum-scoring reading.

use crate::align::{align, Alignment};
use crate::dictionary::PronouncingDictionary;
use crate::edit_distance::levenshtein_distance;
use crate::error::UnidentifiedWords;
use crate::phoneme::{parse_sequence, PhonemeSequence};
use crate::tokenizer::Tokenizer;

/// Every full-line phoneme sequence obtainable by choosing one
/// pronunciation variant per word, in word order. Word boundaries are
/// flattened into a single sequence.
///
/// If any word is unidentified, every unidentified word in `text` (not
/// just the first) is collected and returned as a single error.
fn text_variants(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text: &str,
) -> Result<Vec<PhonemeSequence>, Vec<String>> {
    let words = tokenizer.tokenize(text);
    let mut per_word_variants: Vec<Vec<PhonemeSequence>> = Vec::with_capacity(words.len());
    let mut missing = Vec::new();

    for word in &words {
        match dict.word_to_phones(word) {
            Ok(phones) => {
                per_word_variants.push(phones.iter().map(|p| parse_sequence(p)).collect());
            }
            Err(e) => missing.push(e.word().to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(missing);
    }

    Ok(cartesian_product(&per_word_variants))
}

fn cartesian_product(per_word_variants: &[Vec<PhonemeSequence>]) -> Vec<PhonemeSequence> {
    per_word_variants.iter().fold(vec![Vec::new()], |acc, variants| {
        let mut next = Vec::with_capacity(acc.len() * variants.len().max(1));
        for prefix in &acc {
            for variant in variants {
                let mut combined = prefix.clone();
                combined.extend(variant.iter().cloned());
                next.push(combined);
            }
        }
        next
    })
}

fn both_texts_variants(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text1: &str,
    text2: &str,
) -> Result<(Vec<PhonemeSequence>, Vec<PhonemeSequence>), UnidentifiedWords> {
    let v1 = text_variants(dict, tokenizer, text1);
    let v2 = text_variants(dict, tokenizer, text2);

    match (v1, v2) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (a, b) => {
            let mut missing = Vec::new();
            if let Err(m) = a {
                missing.extend(m);
            }
            if let Err(m) = b {
                missing.extend(m);
            }
            Err(UnidentifiedWords(missing))
        }
    }
}

/// Minimum `levenshtein_distance` over the cross-product of `text1` and
/// `text2`'s pronunciation-variant readings.
pub fn minimum_text_distance(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text1: &str,
    text2: &str,
) -> Result<i32, UnidentifiedWords> {
    let (variants1, variants2) = both_texts_variants(dict, tokenizer, text1, text2)?;
    let min = variants1
        .iter()
        .flat_map(|a| variants2.iter().map(move |b| levenshtein_distance(a, b)))
        .min()
        .unwrap_or(0);
    Ok(min)
}

/// The alignment with the minimum score over the cross-product of
/// `text1` and `text2`'s pronunciation-variant readings. Ties: the first
/// pair encountered (in per-word variant order) wins.
pub fn minimum_text_alignment(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text1: &str,
    text2: &str,
) -> Result<Alignment, UnidentifiedWords> {
    let (variants1, variants2) = both_texts_variants(dict, tokenizer, text1, text2)?;

    let mut best: Option<Alignment> = None;
    for a in &variants1 {
        for b in &variants2 {
            let candidate = align(a, b);
            let replace = match &best {
                Some(current) => candidate.distance < current.distance,
                None => true,
            };
            if replace {
                best = Some(candidate);
            }
        }
    }

    Ok(best.unwrap_or(Alignment { first: Vec::new(), second: Vec::new(), distance: 0 }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::InMemoryDictionary;
    use crate::tokenizer::DefaultTokenizer;

    fn dict() -> InMemoryDictionary {
        InMemoryDictionary::new([
            ("read", vec!["R EH1 D"]),
            ("book", vec!["B UH1 K"]),
            ("cat", vec!["K AE1 T"]),
            ("hat", vec!["HH AE1 T"]),
        ])
    }

    #[test]
    fn test_minimum_text_distance_identical() {
        let d = minimum_text_distance(&dict(), &DefaultTokenizer, "cat", "cat").unwrap();
        assert_eq!(d, 0);
    }

    #[test]
    fn test_minimum_text_distance_single_consonant_swap() {
        let d = minimum_text_distance(&dict(), &DefaultTokenizer, "cat", "hat").unwrap();
        let expected = crate::consonant_distance::distance("K", "HH");
        assert_eq!(d, expected);
    }

    #[test]
    fn test_minimum_text_alignment_matches_distance() {
        let alignment = minimum_text_alignment(&dict(), &DefaultTokenizer, "cat", "hat").unwrap();
        let distance = minimum_text_distance(&dict(), &DefaultTokenizer, "cat", "hat").unwrap();
        assert_eq!(alignment.distance, distance);
    }

    #[test]
    fn test_unidentified_words_collected_from_both_sides() {
        let err = minimum_text_distance(&dict(), &DefaultTokenizer, "read xyzzy", "book rrrzzz").unwrap_err();
        assert!(err.words().contains(&"XYZZY".to_string()));
        assert!(err.words().contains(&"RRRZZZ".to_string()));
    }
}
