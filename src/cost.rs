// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cost model: validated per-operation weights plus the transposition mode.
//!
//! Callers hand us an [`Options`] bag (every field optional, unit weights by
//! default) and get back a [`CostModel`] that is
//! guaranteed to hold only finite, non-negative weights. The engine never
//! re-checks; validation happens exactly once, here.

use crate::error::{InvalidCostError, Operation};
use serde::Deserialize;

/// How adjacent transpositions are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transposition {
    /// Plain Levenshtein. A swap costs two substitutions (or an insert + delete).
    #[default]
    Disabled,
    /// Optimal string alignment: a swapped pair must not be edited again.
    Restricted,
    /// Lowrance–Wagner Damerau-Levenshtein: swaps may straddle other edits.
    Unrestricted,
}

impl Transposition {
    pub fn from_flags(damerau: bool, restricted: bool) -> Self {
        match (damerau, restricted) {
            (false, _) => Transposition::Disabled,
            (true, true) => Transposition::Restricted,
            (true, false) => Transposition::Unrestricted,
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Transposition::Disabled
    }
}

/// Validated weights. Every field is finite and `>= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    insertion: f64,
    deletion: f64,
    substitution: f64,
    transposition: f64,
    mode: Transposition,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            insertion: 1.0,
            deletion: 1.0,
            substitution: 1.0,
            transposition: 1.0,
            mode: Transposition::Disabled,
        }
    }
}

fn check(operation: Operation, value: f64) -> Result<f64, InvalidCostError> {
    // NaN fails both comparisons, so test finiteness first
    if !value.is_finite() || value < 0.0 {
        return Err(InvalidCostError { operation, value });
    }
    Ok(value)
}

impl CostModel {
    /// Build a model, rejecting negative or non-finite weights.
    pub fn new(
        insertion: f64,
        deletion: f64,
        substitution: f64,
        transposition: f64,
        mode: Transposition,
    ) -> Result<Self, InvalidCostError> {
        Ok(Self {
            insertion: check(Operation::Insertion, insertion)?,
            deletion: check(Operation::Deletion, deletion)?,
            substitution: check(Operation::Substitution, substitution)?,
            transposition: check(Operation::Transposition, transposition)?,
            mode,
        })
    }

    /// Unit costs with the given transposition mode.
    pub fn unit(mode: Transposition) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(self, mode: Transposition) -> Self {
        Self { mode, ..self }
    }

    #[inline]
    pub fn insertion(&self) -> f64 {
        self.insertion
    }

    #[inline]
    pub fn deletion(&self) -> f64 {
        self.deletion
    }

    #[inline]
    pub fn substitution(&self) -> f64 {
        self.substitution
    }

    /// Only meaningful when [`Self::mode`] has transpositions enabled.
    #[inline]
    pub fn transposition(&self) -> f64 {
        self.transposition
    }

    #[inline]
    pub fn mode(&self) -> Transposition {
        self.mode
    }

    /// Insertion and deletion weigh the same, so swapping the arguments
    /// leaves plain and OSA distances unchanged.
    pub fn is_symmetric(&self) -> bool {
        self.insertion == self.deletion
    }

    /// Lowrance–Wagner exactness condition: `2T >= I + D`.
    ///
    /// When it fails the unrestricted recurrence still returns the cost of a
    /// real edit sequence, just not necessarily the cheapest.
    pub fn satisfies_lowrance_wagner(&self) -> bool {
        2.0 * self.transposition >= self.insertion + self.deletion
    }
}

/// Caller-facing option bag.
///
/// Deserializes from JSON with every field optional; `useTransposition` is
/// accepted as another name for `damerau`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Weight of inserting a character (default: 1)
    pub insertion_cost: f64,
    /// Weight of deleting a character (default: 1)
    pub deletion_cost: f64,
    /// Weight of replacing a character (default: 1)
    pub substitution_cost: f64,
    /// Weight of swapping adjacent characters (default: 1)
    pub transposition_cost: f64,
    /// Count adjacent swaps as one edit (default: false)
    #[serde(alias = "useTransposition")]
    pub damerau: bool,
    /// Use OSA instead of unrestricted transpositions (default: false)
    pub restricted: bool,
    /// Return the best-matching substring of the target (default: false)
    pub search: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            insertion_cost: 1.0,
            deletion_cost: 1.0,
            substitution_cost: 1.0,
            transposition_cost: 1.0,
            damerau: false,
            restricted: false,
            search: false,
        }
    }
}

impl Options {
    pub fn transposition(&self) -> Transposition {
        Transposition::from_flags(self.damerau, self.restricted)
    }

    /// Validate into a [`CostModel`].
    ///
    /// The transposition weight is checked even when transpositions are off;
    /// a negative value is a caller bug either way.
    pub fn cost_model(&self) -> Result<CostModel, InvalidCostError> {
        CostModel::new(
            self.insertion_cost,
            self.deletion_cost,
            self.substitution_cost,
            self.transposition_cost,
            self.transposition(),
        )
    }
}

impl From<CostModel> for Options {
    fn from(model: CostModel) -> Self {
        Self {
            insertion_cost: model.insertion,
            deletion_cost: model.deletion,
            substitution_cost: model.substitution,
            transposition_cost: model.transposition,
            damerau: model.mode.is_enabled(),
            restricted: model.mode == Transposition::Restricted,
            search: false,
        }
    }
}
