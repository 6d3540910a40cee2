//! Matches a line of text against a meter pattern by consuming candidate
//! stress-slot sequences word by word.

use super::parser::fuzzy_meter_to_binary_set;
use crate::dictionary::PronouncingDictionary;
use crate::phoneme::{parse_sequence, stress_pattern};
use crate::tokenizer::Tokenizer;
use log::warn;
use std::collections::HashSet;

/// Result of checking a line of text against a meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeterValidity {
    /// Whether the text fully matches some candidate reading of the meter.
    pub is_valid: bool,
    /// Words the dictionary didn't recognize; reported even when present,
    /// but forces `is_valid` false.
    pub unrecognized_words: Vec<String>,
}

fn digits_to_pattern(s: &str) -> Vec<u8> {
    s.chars().map(|c| c.to_digit(10).unwrap() as u8).collect()
}

/// Try to consume `pattern` from the front of `candidate`, applying the
/// monosyllabic and secondary-stress ambiguity rules. Returns the
/// remaining suffix on success.
fn try_consume(candidate: &[u8], pattern: &[u8]) -> Option<Vec<u8>> {
    if pattern.len() == 1 {
        if candidate.is_empty() {
            return None;
        }
        return Some(candidate[1..].to_vec());
    }

    if candidate.len() < pattern.len() {
        return None;
    }

    for (i, &digit) in pattern.iter().enumerate() {
        let slot = candidate[i];
        let matched = match digit {
            0 => slot == 0,
            1 => slot == 1,
            2 => {
                let next_is_primary = pattern.get(i + 1) == Some(&1);
                let prev_is_primary = i > 0 && pattern[i - 1] == 1;
                slot == 1 || next_is_primary || prev_is_primary
            }
            _ => false,
        };
        if !matched {
            return None;
        }
    }

    Some(candidate[pattern.len()..].to_vec())
}

/// Check whether `text` conforms to `meter`, allowing for each word's
/// pronunciation variants and the meter's optional groups.
pub fn check_meter_validity(
    dict: &dyn PronouncingDictionary,
    tokenizer: &dyn Tokenizer,
    text: &str,
    meter: &str,
) -> MeterValidity {
    let meter_set = match fuzzy_meter_to_binary_set(meter) {
        Ok(set) => set,
        Err(_) => {
            return MeterValidity { is_valid: false, unrecognized_words: Vec::new() };
        }
    };

    let mut candidates: Vec<Vec<u8>> = meter_set.into_iter().collect();
    let mut unrecognized_words = Vec::new();

    for word in tokenizer.tokenize(text) {
        let phones = match dict.word_to_phones(&word) {
            Ok(phones) => phones,
            Err(e) => {
                warn!("check_meter_validity: unrecognized word {word:?}");
                unrecognized_words.push(e.word().to_string());
                continue;
            }
        };

        let mut patterns: HashSet<Vec<u8>> = HashSet::new();
        for phone_str in &phones {
            let seq = parse_sequence(phone_str);
            patterns.insert(digits_to_pattern(&stress_pattern(&seq)));
        }

        let mut next_candidates: HashSet<Vec<u8>> = HashSet::new();
        for pattern in &patterns {
            for candidate in &candidates {
                if let Some(remaining) = try_consume(candidate, pattern) {
                    next_candidates.insert(remaining);
                }
            }
        }

        candidates = next_candidates.into_iter().collect();
        if candidates.is_empty() {
            return MeterValidity { is_valid: false, unrecognized_words };
        }
    }

    let is_valid = unrecognized_words.is_empty() && candidates.iter().any(Vec::is_empty);
    MeterValidity { is_valid, unrecognized_words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::InMemoryDictionary;
    use crate::tokenizer::DefaultTokenizer;

    fn dict() -> InMemoryDictionary {
        InMemoryDictionary::new([
            ("I", vec!["AY1"]),
            ("want", vec!["W AA1 N T"]),
            ("to", vec!["T UW1"]),
            ("suck", vec!["S AH1 K"]),
            ("your", vec!["Y AO1 R"]),
            ("blood", vec!["B L AH1 D"]),
            ("right", vec!["R AY1 T"]),
            ("now", vec!["N AW1"]),
            ("karaoke", vec!["K EH2 R IY0 OW1 K IY0"]),
            ("okey-dokey", vec!["OW1 K IY0 D OW1 K IY0"]),
        ])
    }

    fn check(text: &str, meter: &str) -> MeterValidity {
        check_meter_validity(&dict(), &DefaultTokenizer, text, meter)
    }

    #[test]
    fn test_simple_iambic_line() {
        assert!(check("I want to suck your blood right now", "x/x/x/x/").is_valid);
    }

    #[test]
    fn test_too_short_meter_fails() {
        assert!(!check("I want to suck your blood right now", "x/x/x/x").is_valid);
    }

    #[test]
    fn test_too_long_meter_fails() {
        assert!(!check("I want to suck your blood right now", "x/x/x/x/x").is_valid);
    }

    #[test]
    fn test_secondary_stress_words() {
        assert!(check("karaoke okey-dokey", "/x/x /x/x").is_valid);
        assert!(!check("karaoke okey-dokey", "x/x/ x/x/").is_valid);
    }

    #[test]
    fn test_unrecognized_word_reported_and_invalidates() {
        let result = check("I want xyzzy blood", "x/x/x/x/");
        assert!(!result.is_valid);
        assert_eq!(result.unrecognized_words, vec!["XYZZY"]);
    }

    #[test]
    fn test_monosyllabic_word_matches_either_slot() {
        // "I" and "want" are both monosyllabic; each consumes one slot
        // regardless of its value, so either a stressed or unstressed
        // 2-slot meter matches.
        assert!(check("I want", "x/").is_valid);
        assert!(check("I want", "//").is_valid);
    }
}
