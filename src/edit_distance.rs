//! Weighted edit distance over phoneme sequences.
//!
//! A classic two-row dynamic-programming Levenshtein variant, but scored
//! by [`crate::scoring`] instead of unit costs, with gap costs that
//! depend on the phoneme immediately preceding the gap in its own
//! sequence.

use crate::phoneme::Phoneme;
use crate::scoring::{gap_weights, substitution_score};
use log::debug;

/// Minimum total score over all alignments of `x` and `y`.
///
/// Runs in O(n·m) time and O(min(n,m)) space.
pub fn levenshtein_distance(x: &[Phoneme], y: &[Phoneme]) -> i32 {
    debug!("levenshtein_distance: |x|={} |y|={}", x.len(), y.len());

    // Operate with the shorter sequence as columns to minimize row width.
    // Scoring is symmetric, so swapping which side is "x" vs. "y" here
    // does not change the resulting scalar.
    let (x, y) = if x.len() <= y.len() { (x, y) } else { (y, x) };

    let n = x.len();
    let m = y.len();
    let wx = gap_weights(x);
    let wy = gap_weights(y);

    let mut prev = vec![0; m + 1];
    for j in 1..=m {
        prev[j] = prev[j - 1] + wy[j - 1];
    }

    let mut curr = vec![0; m + 1];
    for i in 1..=n {
        curr[0] = prev[0] + wx[i - 1];
        for j in 1..=m {
            let delete = prev[j] + wx[i - 1];
            let insert = curr[j - 1] + wy[j - 1];
            let substitute = prev[j - 1] + substitution_score(&x[i - 1], &y[j - 1]);
            curr[j] = delete.min(insert).min(substitute);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
