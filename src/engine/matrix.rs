// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full distance matrix with per-cell provenance.
//!
//! `(n + 1) × (m + 1)` cells, row-major, each holding the accumulated cost and
//! the [`EditStep`] that achieved it. Owned by the call that built it and
//! dropped once the result is extracted.

use super::{is_adjacent_swap, Candidates, LastSeen};
use crate::cost::{CostModel, Transposition};
use crate::types::EditStep;

/// How row 0 is initialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `D[0][j] = j * insertion`: the whole target must be produced.
    Anchored,
    /// `D[0][j] = 0`: an alignment may start at any target column for free.
    FreeStart,
}

/// One matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cell {
    pub cost: f64,
    pub step: EditStep,
}

#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl DistanceMatrix {
    /// Run the forward pass over `source` (rows) and `target` (columns).
    pub fn build(source: &[char], target: &[char], costs: &CostModel, boundary: Boundary) -> Self {
        let rows = source.len() + 1;
        let cols = target.len() + 1;
        let mut cells = vec![Cell::default(); rows * cols];
        fill(source, target, costs, boundary, cells.as_mut_slice());
        Self { rows, cols, cells }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    #[inline]
    pub fn cost(&self, row: usize, col: usize) -> f64 {
        self.cell(row, col).cost
    }

    /// `n + 1`
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// `m + 1`
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `D[n][m]`
    pub fn final_cost(&self) -> f64 {
        self.cost(self.rows - 1, self.cols - 1)
    }

    /// The bottom row: costs of consuming the whole source, ending at each column.
    pub fn last_row(&self) -> &[Cell] {
        let start = self.index(self.rows - 1, 0);
        &self.cells[start..start + self.cols]
    }

    /// Leftmost column of the bottom row with the smallest cost.
    pub fn best_end(&self) -> (usize, f64) {
        let mut end = 0;
        let mut best = f64::INFINITY;
        for (col, cell) in self.last_row().iter().enumerate() {
            if cell.cost < best {
                best = cell.cost;
                end = col;
            }
        }
        (end, best)
    }

    /// Replay stored steps from `(row, col)` back to row 0 and return the
    /// column the path started from.
    pub fn trace_start(&self, mut row: usize, mut col: usize) -> usize {
        while row > 0 {
            let step = self.cell(row, col).step;
            debug_assert_ne!(
                step,
                EditStep::Origin,
                "origin step at interior cell ({}, {})",
                row,
                col
            );
            if step == EditStep::Origin {
                break;
            }
            let (up, left) = step.delta();
            row -= up;
            col -= left;
        }
        col
    }

    /// Every step on the path from `(row, col)` back to row 0, last step first.
    pub fn trace_path(&self, mut row: usize, mut col: usize) -> Vec<EditStep> {
        let mut path = Vec::new();
        while row > 0 {
            let step = self.cell(row, col).step;
            if step == EditStep::Origin {
                break;
            }
            path.push(step);
            let (up, left) = step.delta();
            row -= up;
            col -= left;
        }
        path
    }
}

/// Anchored distance keeping costs only, for callers that never backtrace.
///
/// Same forward pass as [`DistanceMatrix::build`] over a flat `f64` table, so
/// the result is bit-identical to `build(..).final_cost()`.
pub fn final_cost(source: &[char], target: &[char], costs: &CostModel) -> f64 {
    let cols = target.len() + 1;
    let mut table = vec![0.0; (source.len() + 1) * cols];
    fill(source, target, costs, Boundary::Anchored, table.as_mut_slice());
    table[table.len() - 1]
}

/// Storage the forward pass writes into: full cells or bare costs.
trait Table {
    fn cost_at(&self, idx: usize) -> f64;
    fn store(&mut self, idx: usize, cell: Cell);
}

impl Table for [Cell] {
    #[inline]
    fn cost_at(&self, idx: usize) -> f64 {
        self[idx].cost
    }

    #[inline]
    fn store(&mut self, idx: usize, cell: Cell) {
        self[idx] = cell;
    }
}

impl Table for [f64] {
    #[inline]
    fn cost_at(&self, idx: usize) -> f64 {
        self[idx]
    }

    #[inline]
    fn store(&mut self, idx: usize, cell: Cell) {
        self[idx] = cell.cost;
    }
}

/// Forward pass over a zeroed `(n + 1) × (m + 1)` row-major table.
fn fill<T: Table + ?Sized>(
    source: &[char],
    target: &[char],
    costs: &CostModel,
    boundary: Boundary,
    table: &mut T,
) {
    let n = source.len();
    let m = target.len();
    let cols = m + 1;
    let at = |row: usize, col: usize| row * cols + col;

    if boundary == Boundary::Anchored {
        for j in 1..=m {
            let cost = table.cost_at(at(0, j - 1)) + costs.insertion();
            table.store(at(0, j), Cell { cost, step: EditStep::Insert });
        }
    }
    for i in 1..=n {
        let cost = table.cost_at(at(i - 1, 0)) + costs.deletion();
        table.store(at(i, 0), Cell { cost, step: EditStep::Delete });
    }

    let restricted = costs.mode() == Transposition::Restricted;
    let unrestricted = costs.mode() == Transposition::Unrestricted;
    let mut last_row = LastSeen::new();

    for i in 1..=n {
        let sc = source[i - 1];
        // Last column in this row whose target code point equals `sc`
        let mut last_col = 0;

        for j in 1..=m {
            let tc = target[j - 1];
            let mut best = Candidates::new();

            if unrestricted {
                let i1 = last_row.get(tc);
                let j1 = last_col;
                if i1 > 0 && j1 > 0 {
                    let gap_rows = (i - i1 - 1) as f64;
                    let gap_cols = (j - j1 - 1) as f64;
                    let cost = table.cost_at(at(i1 - 1, j1 - 1))
                        + gap_rows * costs.deletion()
                        + gap_cols * costs.insertion()
                        + costs.transposition();
                    best.offer(
                        cost,
                        EditStep::Transpose {
                            rows: i - i1 + 1,
                            cols: j - j1 + 1,
                        },
                    );
                }
            } else if restricted && is_adjacent_swap(source, target, i, j) {
                best.offer(
                    table.cost_at(at(i - 2, j - 2)) + costs.transposition(),
                    EditStep::Transpose { rows: 2, cols: 2 },
                );
            }

            best.offer_classical(
                table.cost_at(at(i - 1, j - 1)),
                table.cost_at(at(i - 1, j)),
                table.cost_at(at(i, j - 1)),
                sc == tc,
                costs,
            );
            table.store(at(i, j), best.into_cell());

            if sc == tc {
                last_col = j;
            }
        }

        if unrestricted {
            last_row.record(sc, i);
        }
    }
}
