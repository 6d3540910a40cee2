//! Vowel-space graph: an undirected adjacency over the 15 ARPABET vowels,
//! with shortest-path distances computed once by BFS and memoized.
//!
//! The adjacency is hand-authored; it is not derived from any acoustic
//! measurement, and diphthongs are deliberately given their own nodes
//! rather than decomposed into their component monophthongs. This is
//! opinionated and intentional: do not substitute a derived metric.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet, VecDeque};

const EDGES: &[(&str, &str)] = &[
    ("AE", "AA"),
    ("AE", "AH"),
    ("AE", "EH"),
    ("AA", "AO"),
    ("AA", "AH"),
    ("EH", "AH"),
    ("EH", "IH"),
    ("EH", "IY"),
    ("AH", "AO"),
    ("AH", "UH"),
    ("AH", "IH"),
    ("AO", "UW"),
    ("AO", "UH"),
    ("IY", "IH"),
    ("IH", "UH"),
    ("UH", "UW"),
    // Opinionated placement of the rhotic vowel.
    ("ER", "AH"),
    // Diphthong adjacencies.
    ("AW", "UH"),
    ("AW", "OW"),
    ("AW", "AH"),
    ("AY", "IH"),
    ("AY", "EY"),
    ("AY", "AH"),
    ("EY", "IH"),
    ("EY", "EH"),
    ("EY", "IY"),
    ("OW", "OY"),
    ("OW", "UH"),
    ("OW", "UW"),
    ("OW", "AO"),
    ("OY", "IH"),
];

fn build_adjacency() -> HashMap<&'static str, Vec<&'static str>> {
    let mut adjacency: HashMap<&'static str, Vec<&'static str>> = HashMap::new();
    for &(a, b) in EDGES {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }
    adjacency
}

fn shortest_distance(
    adjacency: &HashMap<&'static str, Vec<&'static str>>,
    from: &str,
    to: &str,
) -> i32 {
    if from == to {
        return 0;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<(&str, i32)> = VecDeque::new();
    queue.push_back((from, 0));
    visited.insert(from);

    while let Some((current, distance)) = queue.pop_front() {
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for &neighbor in neighbors {
            if neighbor == to {
                return distance + 1;
            }
            if visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    unreachable!("vowel graph is connected over its 15-vowel vocabulary")
}

lazy_static! {
    static ref ADJACENCY: HashMap<&'static str, Vec<&'static str>> = build_adjacency();

    /// All pairwise shortest-path distances between the 15 ARPABET
    /// vowels, keyed by an ordered pair with the lexicographically
    /// smaller symbol first (lookup is symmetric).
    static ref DISTANCES: HashMap<(&'static str, &'static str), i32> = {
        let vowels: Vec<&'static str> = crate::taxonomy::VOWELS.iter().copied().collect();
        let mut map = HashMap::new();
        for (i, &v1) in vowels.iter().enumerate() {
            for &v2 in &vowels[i..] {
                let key = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
                map.insert(key, shortest_distance(&ADJACENCY, v1, v2));
            }
        }
        map
    };
}

/// Shortest-path distance between two bare (stress-stripped) vowel
/// symbols in the hand-authored vowel-space graph. `0` if equal;
/// otherwise `>= 1` (the maximum observed distance is about 4).
///
/// # Panics
///
/// Panics if either symbol is not one of the 15 fixed ARPABET vowels.
/// Querying this function with a non-vowel symbol is a programmer error.
pub fn distance(v1: &str, v2: &str) -> i32 {
    let key = if v1 <= v2 { (v1, v2) } else { (v2, v1) };
    *DISTANCES
        .get(&key)
        .unwrap_or_else(|| panic!("not a known vowel pair: ({v1:?}, {v2:?})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for &v in crate::taxonomy::VOWELS.iter() {
            assert_eq!(distance(v, v), 0);
        }
    }

    #[test]
    fn test_symmetry() {
        for &v1 in crate::taxonomy::VOWELS.iter() {
            for &v2 in crate::taxonomy::VOWELS.iter() {
                assert_eq!(distance(v1, v2), distance(v2, v1));
            }
        }
    }

    #[test]
    fn test_adjacent_vowels_distance_one() {
        assert_eq!(distance("AE", "AA"), 1);
        assert_eq!(distance("ER", "AH"), 1);
    }

    #[test]
    fn test_two_hops() {
        // AE -> AA -> AO
        assert_eq!(distance("AE", "AO"), 2);
    }

    #[test]
    fn test_all_pairs_nonnegative() {
        for (_, &d) in DISTANCES.iter() {
            assert!(d >= 0);
        }
    }

    #[test]
    #[should_panic]
    fn test_panics_on_non_vowel() {
        distance("K", "AH");
    }
}
