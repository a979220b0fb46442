// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for engine results.
//!
//! Debug-mode assertions that every value leaving the engine satisfies the
//! properties callers rely on. These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Catch a broken recurrence at the call that produced it, not three
//!    layers up in a caller's ranking code
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_cost_model_valid`     | every weight finite and `>= 0`                  |
//! | `check_distance_valid`       | distance finite and `>= 0`                      |
//! | `check_match_well_formed`    | `offset + len <= haystack.len()`, valid distance|
//!
//! # Usage
//!
//! ```ignore
//! // In debug builds, this panics if the invariant is violated
//! check_match_well_formed(&result, haystack.len());
//!
//! // In release builds, this is a no-op
//! ```

use crate::cost::CostModel;
use crate::types::SubstringMatch;

// ============================================================================
// COST MODEL CONTRACTS
// ============================================================================

/// Check that a cost model only carries usable weights.
///
/// `CostModel::new` already enforces this, so a failure here means a model
/// was assembled some other way.
///
/// # Panics (debug builds only)
/// Panics if any weight is negative, NaN or infinite.
#[inline]
pub fn check_cost_model_valid(costs: &CostModel) {
    for (name, value) in [
        ("insertion", costs.insertion()),
        ("deletion", costs.deletion()),
        ("substitution", costs.substitution()),
        ("transposition", costs.transposition()),
    ] {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "Contract violation: CostModel.Valid - {} cost {} is not a finite non-negative number",
            name,
            value
        );
    }
}

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that a distance is a finite, non-negative number.
///
/// # Panics (debug builds only)
/// Panics on NaN, infinity or a negative value.
#[inline]
pub fn check_distance_valid(distance: f64) {
    debug_assert!(
        distance.is_finite() && distance >= 0.0,
        "Contract violation: Distance.NonNegative - got {}",
        distance
    );
}

/// Check that a search result lies inside its haystack.
///
/// # Panics (debug builds only)
/// Panics if `offset + matched.len() > haystack_len` or the distance is invalid.
#[inline]
pub fn check_match_well_formed(result: &SubstringMatch, haystack_len: usize) {
    debug_assert!(
        result.end() <= haystack_len,
        "Contract violation: SubstringMatch.InBounds - range {:?} exceeds haystack length {}",
        result.range(),
        haystack_len
    );
    check_distance_valid(result.distance);
}
