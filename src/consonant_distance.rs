//! Consonant distance: an integer distance between two consonants derived
//! from their articulatory features, with a handful of enumerated
//! cross-manner exceptions.

use crate::constants::consonant as k;
use crate::taxonomy::{consonant, Manner};

/// Distance between two consonant phonemes, identified by their bare
/// ARPABET symbols (e.g. `"S"`, `"SH"`).
///
/// The decision procedure tries each rule in order and returns on the
/// first match.
///
/// # Panics
///
/// Panics if either symbol is not one of the 24 fixed consonants.
pub fn distance(sym1: &str, sym2: &str) -> i32 {
    if sym1 == sym2 {
        return 0;
    }

    let c1 = consonant(sym1);
    let c2 = consonant(sym2);

    // W and V, in either order, are treated as unusually close.
    if matches!(sym1, "W" | "V") && matches!(sym2, "W" | "V") {
        return k::W_V_DISTANCE;
    }

    let approximant_like =
        |m: Manner| matches!(m, Manner::Approximant | Manner::LateralApproximant);

    if approximant_like(c1.manner) && approximant_like(c2.manner) {
        return if matches!(sym1, "R" | "L") && matches!(sym2, "R" | "L") {
            k::R_L_DISTANCE
        } else {
            (c1.place - c2.place).abs()
        };
    }

    let voiced_penalty = if c1.voiced == c2.voiced { 0 } else { k::VOICED_PENALTY };

    if c1.manner == c2.manner {
        return (c1.place - c2.place).abs() + voiced_penalty;
    }

    let (affricate, other) = match (c1.manner, c2.manner) {
        (Manner::Affricate, _) => (Some(c1), Some(c2)),
        (_, Manner::Affricate) => (Some(c2), Some(c1)),
        _ => (None, None),
    };

    if let (Some(affricate), Some(other)) = (affricate, other) {
        let base = (affricate.place - other.place).abs() + voiced_penalty;
        // Exhaustive over (Manner, sibilant) with no wildcard arm: a
        // manner pairing with no named rule still gets an explicit
        // decision (unrelated), not a silently-matched default.
        return match (other.manner, other.sibilant) {
            (Manner::Fricative, true) => base + k::AFFRICATE_SIBILANT_FRICATIVE_PENALTY,
            (Manner::Fricative, false) => base + k::AFFRICATE_NON_SIBILANT_FRICATIVE_PENALTY,
            (Manner::Plosive, true) => base + k::AFFRICATE_PLOSIVE_PENALTY,
            (Manner::Plosive, false) => base + k::AFFRICATE_PLOSIVE_PENALTY,
            (Manner::Approximant, true) => k::UNRELATED_PENALTY,
            (Manner::Approximant, false) => k::UNRELATED_PENALTY,
            (Manner::LateralApproximant, true) => k::UNRELATED_PENALTY,
            (Manner::LateralApproximant, false) => k::UNRELATED_PENALTY,
            (Manner::Nasal, true) => k::UNRELATED_PENALTY,
            (Manner::Nasal, false) => k::UNRELATED_PENALTY,
            (Manner::Affricate, _) => unreachable!("same-manner case already returned above"),
        };
    }

    k::UNRELATED_PENALTY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert_eq!(distance("S", "S"), 0);
    }

    #[test]
    fn test_symmetry() {
        let symbols = [
            "CH", "JH", "R", "W", "Y", "DH", "F", "HH", "S", "SH", "TH", "V", "Z", "ZH", "L", "M",
            "N", "NG", "B", "D", "G", "K", "P", "T",
        ];
        for &a in &symbols {
            for &b in &symbols {
                assert_eq!(distance(a, b), distance(b, a), "asymmetric for ({a}, {b})");
            }
        }
    }

    #[test]
    fn test_w_v_distance() {
        assert_eq!(distance("W", "V"), k::W_V_DISTANCE);
    }

    #[test]
    fn test_r_l_distance() {
        assert_eq!(distance("R", "L"), k::R_L_DISTANCE);
    }

    #[test]
    fn test_same_manner_voicing_penalty() {
        // P and B: same place, same manner, differ only in voicing.
        assert_eq!(distance("P", "B"), 0 + k::VOICED_PENALTY);
    }

    #[test]
    fn test_same_manner_no_voicing_penalty() {
        // B and D: both plosive, both voiced, differ only in place.
        let p = consonant("B").place;
        let t = consonant("D").place;
        assert_eq!(distance("B", "D"), (p - t).abs());
    }

    #[test]
    fn test_affricate_vs_sibilant_fricative() {
        let ch = consonant("CH");
        let s = consonant("S");
        let voiced_penalty = if ch.voiced == s.voiced { 0 } else { 1 };
        let expected = (ch.place - s.place).abs() + voiced_penalty + k::AFFRICATE_SIBILANT_FRICATIVE_PENALTY;
        assert_eq!(distance("CH", "S"), expected);
    }

    #[test]
    fn test_affricate_vs_plosive() {
        let ch = consonant("CH");
        let t = consonant("T");
        let voiced_penalty = if ch.voiced == t.voiced { 0 } else { 1 };
        let expected = (ch.place - t.place).abs() + voiced_penalty + k::AFFRICATE_PLOSIVE_PENALTY;
        assert_eq!(distance("CH", "T"), expected);
    }

    #[test]
    fn test_affricate_vs_non_sibilant_fricative() {
        let ch = consonant("CH");
        let f = consonant("F");
        let voiced_penalty = if ch.voiced == f.voiced { 0 } else { 1 };
        let expected = (ch.place - f.place).abs() + voiced_penalty + k::AFFRICATE_NON_SIBILANT_FRICATIVE_PENALTY;
        assert_eq!(distance("CH", "F"), expected);
    }

    #[test]
    fn test_unrelated_manners() {
        assert_eq!(distance("M", "S"), k::UNRELATED_PENALTY);
    }
}
