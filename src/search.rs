// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Infix search: the cheapest contiguous run of a haystack to align a pattern to.
//!
//! Same recurrence as plain distance with one boundary change: row 0 is all
//! zeros, so the alignment may begin at any haystack column for free. The
//! pattern side keeps `D[i][0] = i * deletion` because every pattern code
//! point must be consumed. Haystack code points after the end column are
//! skipped for free by reading the minimum off the bottom row.
//!
//! ```text
//!            x   x   a   b   c   x   x
//!        0   0   0   0   0   0   0   0   ← free start
//!    a   1   1   1   0   1   1   1   1
//!    b   2   2   2   1   0   1   2   2
//!    c   3   3   3   2   1   0   1   2
//!                                ↑ leftmost minimum, backtrace → column 2
//! ```

use crate::contracts::{check_cost_model_valid, check_match_well_formed};
use crate::cost::CostModel;
use crate::engine::{Boundary, DistanceMatrix};
use crate::types::{CodePoints, SubstringMatch};
use tracing::trace;

/// Find the substring of `haystack` that `pattern` aligns to most cheaply.
///
/// The end is the leftmost bottom-row minimum; the start is recovered by
/// replaying the forward pass's choices (see the tie order in
/// [`crate::engine`]). `distance` equals
/// `compute_distance(pattern, matched, costs)`.
pub fn compute_best_substring(
    pattern: &[char],
    haystack: &[char],
    costs: &CostModel,
) -> SubstringMatch {
    check_cost_model_valid(costs);
    let matrix = DistanceMatrix::build(pattern, haystack, costs, Boundary::FreeStart);
    let (end, distance) = matrix.best_end();
    let offset = matrix.trace_start(pattern.len(), end);
    trace!(offset, end, distance, "best substring");

    let result = SubstringMatch {
        matched: CodePoints::from(&haystack[offset..end]),
        distance,
        offset,
    };
    check_match_well_formed(&result, haystack.len());
    result
}
