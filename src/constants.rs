//! Tunable distance and penalty constants.
//!
//! This crate does not read configuration from the environment or from
//! files. Every calibrated number used by scoring, consonant distance, and
//! the vowel graph lives here, so a caller who wants different calibration
//! can fork these constants rather than thread a config object through
//! every call.

/// Per-bare-vowel-distance-unit weight applied when substituting between
/// two different vowels. See [`crate::scoring::substitution_score`].
pub const VOWEL_COEFFICIENT: i32 = 5;

/// Extra penalty added when two vowel phonemes share a bare vowel but
/// differ in stress.
pub const VOWEL_STRESS_PENALTY: i32 = 1;

/// Penalty for substituting a vowel for a consonant or vice versa. Kept
/// high enough that the edit-distance/aligner will always prefer an
/// indel over this kind of cross-category substitution.
pub const VOWEL_TO_CONSONANT_MISMATCH: i32 = 100;

/// Gap penalty charged for inserting or deleting a vowel phoneme. Vowel
/// indels are costlier than consonant indels because they change
/// syllable count.
pub const VOWEL_INDEL_PENALTY: i32 = 20;

/// Gap penalty charged for inserting or deleting a consonant phoneme that
/// is not an immediate repetition of the previous phoneme in its own
/// sequence.
pub const CONSONANT_INDEL_PENALTY: i32 = 5;

/// Gap penalty charged when the consonant being inserted/deleted is an
/// immediate repeat of the phoneme before it in the same sequence. Treated
/// as near-free to allow cross-word re-segmentation, e.g. "pulley" vs.
/// "full lee".
pub const REPEATED_CONSONANT_PENALTY: i32 = 1;

/// Consonant-distance constants, used by [`crate::consonant_distance`].
pub mod consonant {
    /// Distance assigned between W and V in either order, an opinionated
    /// placement acknowledging their perceptual closeness.
    pub const W_V_DISTANCE: i32 = 2;
    /// Distance assigned between R and L.
    pub const R_L_DISTANCE: i32 = 1;
    /// Added when two same-manner consonants differ in voicing.
    pub const VOICED_PENALTY: i32 = 1;
    /// Added when comparing an affricate to a sibilant fricative.
    pub const AFFRICATE_SIBILANT_FRICATIVE_PENALTY: i32 = 1;
    /// Added when comparing an affricate to a plosive.
    pub const AFFRICATE_PLOSIVE_PENALTY: i32 = 2;
    /// Added when comparing an affricate to a non-sibilant fricative.
    pub const AFFRICATE_NON_SIBILANT_FRICATIVE_PENALTY: i32 = 2;
    /// Distance assigned to consonant pairs with unrelated manners
    /// (e.g. nasal vs. fricative) that no other rule covers.
    pub const UNRELATED_PENALTY: i32 = 10;
}
