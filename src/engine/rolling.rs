// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rolling-row evaluation for plain Levenshtein and OSA.
//!
//! O(m) memory: two rows, or three when OSA needs to look back two rows for
//! a swap. Unrestricted transpositions can't use this since they may jump
//! back to any earlier row.

use super::{is_adjacent_swap, Candidates};
use crate::cost::{CostModel, Transposition};
use crate::types::EditStep;

/// Final cost `D[n][m]` without keeping the matrix.
///
/// # Panics (debug builds only)
/// Panics if called with an unrestricted model.
pub fn distance(source: &[char], target: &[char], costs: &CostModel) -> f64 {
    debug_assert!(
        costs.mode() != Transposition::Unrestricted,
        "rolling evaluation cannot express unrestricted transpositions"
    );
    let osa = costs.mode() == Transposition::Restricted;
    let m = target.len();

    let mut prev: Vec<f64> = Vec::with_capacity(m + 1);
    prev.push(0.0);
    for j in 1..=m {
        prev.push(prev[j - 1] + costs.insertion());
    }
    if source.is_empty() {
        return prev[m];
    }

    let mut curr = vec![0.0; m + 1];
    // Only touched when OSA needs D[i-2][..]
    let mut prev2 = if osa { vec![0.0; m + 1] } else { Vec::new() };

    for i in 1..=source.len() {
        curr[0] = prev[0] + costs.deletion();
        let sc = source[i - 1];

        for j in 1..=m {
            let mut best = Candidates::new();
            if osa && is_adjacent_swap(source, target, i, j) {
                best.offer(
                    prev2[j - 2] + costs.transposition(),
                    EditStep::Transpose { rows: 2, cols: 2 },
                );
            }
            best.offer_classical(prev[j - 1], prev[j], curr[j - 1], sc == target[j - 1], costs);
            curr[j] = best.cost();
        }

        if osa {
            std::mem::swap(&mut prev2, &mut prev);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}
