//! Parses a meter pattern string into the set of concrete binary stress
//! sequences it denotes.
//!
//! `x` is an unstressed slot, `/` a stressed slot, and a parenthesized
//! group denotes both its inclusion and omission. Represented as a flat
//! list of `(sequence, active)` paths duplicated on `(`, never a tree;
//! final deduplication happens via a `HashSet`.

use crate::error::MeterError;
use std::collections::HashSet;

/// Parse a meter string into the set of binary (`0` = unstressed, `1` =
/// stressed) sequences it denotes.
pub fn fuzzy_meter_to_binary_set(meter: &str) -> Result<HashSet<Vec<u8>>, MeterError> {
    let mut paths: Vec<(Vec<u8>, bool)> = vec![(Vec::new(), false)];
    let mut in_optional = false;

    for c in meter.chars() {
        if c.is_whitespace() {
            continue;
        }
        match c {
            'x' | '/' => {
                let bit: u8 = if c == '/' { 1 } else { 0 };
                for (seq, active) in paths.iter_mut() {
                    if !in_optional || *active {
                        seq.push(bit);
                    }
                }
            }
            '(' => {
                if in_optional {
                    return Err(MeterError::NestedOptional);
                }
                let duplicates: Vec<(Vec<u8>, bool)> =
                    paths.iter().map(|(seq, _)| (seq.clone(), true)).collect();
                paths.extend(duplicates);
                in_optional = true;
            }
            ')' => {
                if !in_optional {
                    return Err(MeterError::UnclosedOptional);
                }
                for (_, active) in paths.iter_mut() {
                    *active = false;
                }
                in_optional = false;
            }
            other => return Err(MeterError::UnrecognizedCharacter(other)),
        }
    }

    if in_optional {
        return Err(MeterError::UnclosedOptional);
    }

    Ok(paths.into_iter().map(|(seq, _)| seq).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(seqs: &[&[u8]]) -> HashSet<Vec<u8>> {
        seqs.iter().map(|s| s.to_vec()).collect()
    }

    #[test]
    fn test_literal_spec_example() {
        let got = fuzzy_meter_to_binary_set("(x/)x/(x/)").unwrap();
        let expected = set(&[&[0, 1], &[0, 1, 0, 1], &[0, 1, 0, 1, 0, 1]]);
        assert_eq!(got, expected);
    }

    #[test]
    fn test_no_optionals() {
        let got = fuzzy_meter_to_binary_set("x/x/x/x/").unwrap();
        assert_eq!(got, set(&[&[0, 1, 0, 1, 0, 1, 0, 1]]));
    }

    #[test]
    fn test_whitespace_ignored() {
        let got = fuzzy_meter_to_binary_set("/x /x").unwrap();
        assert_eq!(got, set(&[&[1, 0, 1, 0]]));
    }

    #[test]
    fn test_nested_optional_is_error() {
        assert_eq!(fuzzy_meter_to_binary_set("(x(x))"), Err(MeterError::NestedOptional));
    }

    #[test]
    fn test_unclosed_optional_is_error() {
        assert_eq!(fuzzy_meter_to_binary_set("(x/x"), Err(MeterError::UnclosedOptional));
    }

    #[test]
    fn test_unmatched_close_paren_is_error() {
        assert_eq!(fuzzy_meter_to_binary_set("x/)"), Err(MeterError::UnclosedOptional));
    }

    #[test]
    fn test_unrecognized_character_is_error() {
        assert_eq!(
            fuzzy_meter_to_binary_set("x/q"),
            Err(MeterError::UnrecognizedCharacter('q'))
        );
    }

    #[test]
    fn test_empty_meter_yields_empty_sequence() {
        let got = fuzzy_meter_to_binary_set("").unwrap();
        assert_eq!(got, set(&[&[]]));
    }

    #[test]
    fn test_all_sequences_are_binary() {
        let got = fuzzy_meter_to_binary_set("(x/)x/(x/)").unwrap();
        for seq in &got {
            assert!(seq.iter().all(|&b| b == 0 || b == 1));
        }
    }
}
