//! Phoneme taxonomy: the fixed vowel set and consonant feature table.
//!
//! These are process-wide immutable constants. [`CONSONANTS`] and
//! [`VOWELS`] are initialized lazily on first access and are read-only
//! thereafter; concurrent readers from multiple threads are safe.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Manner of articulation for a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Manner {
    /// A stop immediately released into a fricative, e.g. `CH`, `JH`.
    Affricate,
    /// A continuant sonorant, e.g. `R`, `W`, `Y`.
    Approximant,
    /// Turbulent continuant airflow, e.g. `S`, `F`, `HH`.
    Fricative,
    /// Air passes laterally around the tongue, e.g. `L`.
    LateralApproximant,
    /// Airflow through the nasal tract, e.g. `M`, `N`, `NG`.
    Nasal,
    /// Full closure followed by release, e.g. `P`, `B`, `T`.
    Plosive,
}

/// A consonant's fixed articulatory feature record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConsonantRecord {
    /// The ARPABET symbol, e.g. `"CH"`.
    pub symbol: &'static str,
    /// Manner of articulation.
    pub manner: Manner,
    /// Whether the consonant has a concentrated high-frequency hiss.
    pub sibilant: bool,
    /// Whether the vocal folds vibrate during articulation.
    pub voiced: bool,
    /// Place of articulation, encoded as a small front-to-back integer.
    pub place: i32,
}

lazy_static! {
    /// The 24 ARPABET consonants and their fixed articulatory features,
    /// keyed by symbol.
    pub static ref CONSONANTS: HashMap<&'static str, ConsonantRecord> = {
        use Manner::*;
        let records = [
            ConsonantRecord { symbol: "CH", manner: Affricate, sibilant: true, voiced: false, place: 5 },
            ConsonantRecord { symbol: "JH", manner: Affricate, sibilant: true, voiced: true, place: 5 },
            ConsonantRecord { symbol: "R", manner: Approximant, sibilant: false, voiced: true, place: 4 },
            ConsonantRecord { symbol: "W", manner: Approximant, sibilant: false, voiced: true, place: 9 },
            ConsonantRecord { symbol: "Y", manner: Approximant, sibilant: false, voiced: true, place: 6 },
            ConsonantRecord { symbol: "DH", manner: Fricative, sibilant: false, voiced: true, place: 3 },
            ConsonantRecord { symbol: "F", manner: Fricative, sibilant: false, voiced: false, place: 2 },
            ConsonantRecord { symbol: "HH", manner: Fricative, sibilant: false, voiced: false, place: 8 },
            ConsonantRecord { symbol: "S", manner: Fricative, sibilant: true, voiced: false, place: 4 },
            ConsonantRecord { symbol: "SH", manner: Fricative, sibilant: true, voiced: false, place: 5 },
            ConsonantRecord { symbol: "TH", manner: Fricative, sibilant: false, voiced: false, place: 3 },
            ConsonantRecord { symbol: "V", manner: Fricative, sibilant: false, voiced: true, place: 2 },
            ConsonantRecord { symbol: "Z", manner: Fricative, sibilant: true, voiced: true, place: 4 },
            ConsonantRecord { symbol: "ZH", manner: Fricative, sibilant: true, voiced: true, place: 5 },
            ConsonantRecord { symbol: "L", manner: LateralApproximant, sibilant: false, voiced: true, place: 4 },
            ConsonantRecord { symbol: "M", manner: Nasal, sibilant: false, voiced: true, place: 1 },
            ConsonantRecord { symbol: "N", manner: Nasal, sibilant: false, voiced: true, place: 4 },
            ConsonantRecord { symbol: "NG", manner: Nasal, sibilant: false, voiced: true, place: 7 },
            ConsonantRecord { symbol: "B", manner: Plosive, sibilant: false, voiced: true, place: 1 },
            ConsonantRecord { symbol: "D", manner: Plosive, sibilant: false, voiced: true, place: 4 },
            ConsonantRecord { symbol: "G", manner: Plosive, sibilant: false, voiced: true, place: 7 },
            ConsonantRecord { symbol: "K", manner: Plosive, sibilant: false, voiced: false, place: 7 },
            ConsonantRecord { symbol: "P", manner: Plosive, sibilant: false, voiced: false, place: 1 },
            ConsonantRecord { symbol: "T", manner: Plosive, sibilant: false, voiced: false, place: 4 },
        ];
        let mut map = HashMap::with_capacity(records.len());
        for r in records {
            map.insert(r.symbol, r);
        }
        map
    };

    /// The 10 monophthongs and 5 diphthongs that make up the ARPABET
    /// vowel inventory (bare symbols, no stress digit).
    pub static ref VOWELS: HashSet<&'static str> = {
        maplit::hashset! {
            "AA", "AE", "AH", "AO", "EH",
            "ER", "IH", "IY", "UH", "UW",
            "AW", "AY", "EY", "OW", "OY",
        }
    };
}

/// Look up a consonant's feature record by its bare ARPABET symbol.
///
/// # Panics
///
/// Panics if `symbol` is not one of the 24 fixed consonants. Querying the
/// table with an unknown symbol is a programmer error, not a recoverable
/// condition.
pub fn consonant(symbol: &str) -> &'static ConsonantRecord {
    CONSONANTS
        .get(symbol)
        .unwrap_or_else(|| panic!("not a known consonant: {symbol:?}"))
}

/// Whether `bare_symbol` (a phoneme symbol with any stress digit already
/// stripped) names one of the 15 fixed ARPABET vowels.
pub fn is_vowel_symbol(bare_symbol: &str) -> bool {
    VOWELS.contains(bare_symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vowel_set_size() {
        assert_eq!(VOWELS.len(), 15);
    }

    #[test]
    fn test_consonant_table_size() {
        assert_eq!(CONSONANTS.len(), 24);
    }

    #[test]
    fn test_consonant_lookup() {
        let ch = consonant("CH");
        assert_eq!(ch.manner, Manner::Affricate);
        assert!(ch.sibilant);
        assert!(!ch.voiced);
        assert_eq!(ch.place, 5);
    }

    #[test]
    #[should_panic]
    fn test_consonant_lookup_panics_on_unknown() {
        consonant("ZZ");
    }

    #[test]
    fn test_is_vowel_symbol() {
        assert!(is_vowel_symbol("IH"));
        assert!(!is_vowel_symbol("K"));
    }
}
