//! Shared scoring functions used by both [`crate::edit_distance`] and
//! [`crate::align`]. Kept as a pure, dependency-free leaf so the two
//! dynamic-programming algorithms can both depend on it without either
//! one depending on the other.

use crate::consonant_distance;
use crate::constants::*;
use crate::phoneme::Phoneme;

/// Cost of substituting phoneme `a` for phoneme `b` (order doesn't
/// matter; this is symmetric).
pub fn substitution_score(a: &Phoneme, b: &Phoneme) -> i32 {
    if a == b {
        return 0;
    }

    match (a.is_vowel(), b.is_vowel()) {
        (true, true) => {
            let (bare_a, bare_b) = (a.bare_vowel(), b.bare_vowel());
            if bare_a == bare_b {
                // Same bare vowel, differing stress only (if stress also
                // matched, a == b above would already have returned).
                VOWEL_STRESS_PENALTY
            } else {
                let stress_penalty = if a.stress() != b.stress() { VOWEL_STRESS_PENALTY } else { 0 };
                crate::vowel_graph::distance(bare_a, bare_b) * VOWEL_COEFFICIENT + stress_penalty
            }
        }
        (false, false) => consonant_distance::distance(a.as_str(), b.as_str()),
        _ => VOWEL_TO_CONSONANT_MISMATCH,
    }
}

/// Cost of inserting/deleting `phoneme`, given the phoneme immediately
/// before it in its own sequence (`None` if `phoneme` is first).
///
/// Vowel indels are costlier (they change syllable count). An immediate
/// repeat of the previous consonant is nearly free, so that re-segmenting
/// shared consonants across word boundaries (e.g. "pulley" vs. "full
/// lee") isn't penalized as a true insertion.
pub fn gap_penalty(phoneme: &Phoneme, prev: Option<&Phoneme>) -> i32 {
    if phoneme.is_vowel() {
        return VOWEL_INDEL_PENALTY;
    }
    match prev {
        Some(p) if p == phoneme => REPEATED_CONSONANT_PENALTY,
        _ => CONSONANT_INDEL_PENALTY,
    }
}

/// Per-position gap weight for every phoneme in `seq`, fixed once from
/// `seq`'s own forward order (`weights[i]` is `gap_penalty(seq[i],
/// seq.get(i - 1))`).
///
/// This is what [`crate::edit_distance`] and [`crate::align`] both consume
/// instead of recomputing a "previous phoneme" from local array position:
/// `gap_penalty`'s context is defined relative to a phoneme's true
/// predecessor in its *own* sequence, and that relationship does not
/// survive naive re-derivation once a subsequence has been reversed or
/// split (as Hirschberg's divide step does). Precomputing the weights once
/// up front and threading them through in lockstep with the phonemes keeps
/// every gap cost tied to its original context no matter how the sequence
/// is later sliced or reversed.
pub fn gap_weights(seq: &[Phoneme]) -> Vec<i32> {
    let mut weights = Vec::with_capacity(seq.len());
    let mut prev: Option<&Phoneme> = None;
    for p in seq {
        weights.push(gap_penalty(p, prev));
        prev = Some(p);
    }
    weights
}
