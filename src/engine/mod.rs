// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance engine: the weighted edit-distance recurrence.
//!
//! Two evaluation strategies share one cell rule ([`Candidates`]):
//!
//! - [`rolling`] keeps two rows (three for OSA) and only returns the final
//!   cost. Used for plain distance whenever the recurrence only looks back a
//!   fixed number of rows.
//! - [`matrix`] keeps every cell plus the step that produced it, for search
//!   mode where we backtrace afterwards. Unrestricted transpositions can jump
//!   arbitrarily far back, so plain unrestricted distance runs the same pass
//!   over a cost-only table ([`matrix::final_cost`]).
//!
//! Because both go through the same `Candidates` ordering with the same
//! additions, they agree bit-for-bit on every input. The oracle tests lean on
//! that.
//!
//! # Tie-breaking
//!
//! Candidates are offered in a fixed order and an offer only wins if it is
//! strictly cheaper, so on equal cost the earlier one sticks:
//!
//! ```text
//! transposition > substitution (or match) > deletion > insertion
//! ```
//!
//! This never changes a reported distance. It only decides which of several
//! equally cheap alignments a backtrace reports.

mod last_seen;
pub mod matrix;
pub mod rolling;

pub use last_seen::LastSeen;
pub use matrix::{Boundary, Cell, DistanceMatrix};

use crate::cost::{CostModel, Transposition};
use crate::types::EditStep;

/// Weighted edit distance between `source` and `target`.
///
/// `D[0][j] = j * insertion`, `D[i][0] = i * deletion`, and the result is
/// `D[n][m]`. Picks the cheapest strategy for the model's transposition mode.
pub fn compute_distance(source: &[char], target: &[char], costs: &CostModel) -> f64 {
    crate::contracts::check_cost_model_valid(costs);
    let distance = match costs.mode() {
        Transposition::Disabled | Transposition::Restricted => {
            rolling::distance(source, target, costs)
        }
        Transposition::Unrestricted => matrix::final_cost(source, target, costs),
    };
    crate::contracts::check_distance_valid(distance);
    distance
}

/// Running minimum over one cell's candidate predecessors.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidates {
    cost: f64,
    step: EditStep,
}

impl Candidates {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            cost: f64::INFINITY,
            step: EditStep::Origin,
        }
    }

    /// Strictly-cheaper wins; on a tie the earlier offer is kept.
    #[inline]
    pub(crate) fn offer(&mut self, cost: f64, step: EditStep) {
        if cost < self.cost {
            self.cost = cost;
            self.step = step;
        }
    }

    /// Offer the three classical moves in priority order.
    ///
    /// Transposition, if any, must already have been offered.
    #[inline]
    pub(crate) fn offer_classical(
        &mut self,
        diagonal: f64,
        up: f64,
        left: f64,
        same: bool,
        costs: &CostModel,
    ) {
        if same {
            self.offer(diagonal, EditStep::Match);
        } else {
            self.offer(diagonal + costs.substitution(), EditStep::Substitute);
        }
        self.offer(up + costs.deletion(), EditStep::Delete);
        self.offer(left + costs.insertion(), EditStep::Insert);
    }

    #[inline]
    pub(crate) fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub(crate) fn into_cell(self) -> Cell {
        Cell {
            cost: self.cost,
            step: self.step,
        }
    }
}

/// `source[i-2..i]` is `target[j-2..j]` reversed (1-based `i`, `j`).
#[inline]
pub(crate) fn is_adjacent_swap(source: &[char], target: &[char], i: usize, j: usize) -> bool {
    i > 1 && j > 1 && source[i - 1] == target[j - 2] && source[i - 2] == target[j - 1]
}
