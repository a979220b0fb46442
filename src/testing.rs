//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It holds deliberately naive reference implementations that the property
//! and differential tests compare the engine against.

#![doc(hidden)]

use crate::cost::{CostModel, Transposition};
use crate::engine::compute_distance;
use std::collections::HashMap;

/// Collect a `&str` into code points.
pub fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Build a cost model, panicking on invalid weights.
pub fn costs(insertion: f64, deletion: f64, substitution: f64, transposition: f64, mode: Transposition) -> CostModel {
    CostModel::new(insertion, deletion, substitution, transposition, mode)
        .unwrap_or_else(|e| panic!("test cost model rejected: {}", e))
}

/// Top-down memoised edit distance written straight from the definition.
///
/// Handles plain Levenshtein and OSA. Exponential without the memo, so keep
/// inputs short.
pub fn reference_distance(source: &[char], target: &[char], costs: &CostModel) -> f64 {
    assert!(
        costs.mode() != Transposition::Unrestricted,
        "reference_distance only models Levenshtein and OSA"
    );
    let mut memo = HashMap::new();
    reference_inner(source, target, source.len(), target.len(), costs, &mut memo)
}

fn reference_inner(
    source: &[char],
    target: &[char],
    i: usize,
    j: usize,
    costs: &CostModel,
    memo: &mut HashMap<(usize, usize), f64>,
) -> f64 {
    if let Some(&d) = memo.get(&(i, j)) {
        return d;
    }
    let d = if i == 0 {
        j as f64 * costs.insertion()
    } else if j == 0 {
        i as f64 * costs.deletion()
    } else {
        let sub = if source[i - 1] == target[j - 1] {
            0.0
        } else {
            costs.substitution()
        };
        let mut best = (reference_inner(source, target, i - 1, j - 1, costs, memo) + sub)
            .min(reference_inner(source, target, i - 1, j, costs, memo) + costs.deletion())
            .min(reference_inner(source, target, i, j - 1, costs, memo) + costs.insertion());
        if costs.mode() == Transposition::Restricted
            && i > 1
            && j > 1
            && source[i - 1] == target[j - 2]
            && source[i - 2] == target[j - 1]
        {
            best = best.min(
                reference_inner(source, target, i - 2, j - 2, costs, memo) + costs.transposition(),
            );
        }
        best
    };
    memo.insert((i, j), d);
    d
}

/// Cheapest plain distance from `pattern` to any substring of `haystack`.
///
/// Tries every `(start, end)` pair. Returns `(distance, start, end)` for the
/// leftmost end, then leftmost start, among minima.
pub fn brute_force_substring(pattern: &[char], haystack: &[char], costs: &CostModel) -> (f64, usize, usize) {
    let mut best = (f64::INFINITY, 0, 0);
    for end in 0..=haystack.len() {
        for start in 0..=end {
            let d = compute_distance(pattern, &haystack[start..end], costs);
            if d < best.0 {
                best = (d, start, end);
            }
        }
    }
    best
}
