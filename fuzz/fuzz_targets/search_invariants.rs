// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for infix search.
//!
//! The reported substring must lie inside the haystack, and its plain
//! distance to the pattern must equal the reported distance.

#![no_main]

use arbitrary::Arbitrary;
use damlev::{compute_best_substring, compute_distance, CostModel, Transposition};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    pattern: String,
    haystack: String,
    weights: [u8; 4],
    mode: u8,
}

fuzz_target!(|input: SearchInput| {
    let pattern: Vec<char> = input.pattern.chars().take(24).collect();
    let haystack: Vec<char> = input.haystack.chars().take(96).collect();

    let mode = match input.mode % 3 {
        0 => Transposition::Disabled,
        1 => Transposition::Restricted,
        _ => Transposition::Unrestricted,
    };
    // Quarter steps keep every sum exact, so equality below is safe
    let [i, d, s, t] = input.weights.map(|w| f64::from(w % 16) / 4.0);
    let Ok(costs) = CostModel::new(i, d, s, t, mode) else {
        return;
    };

    let found = compute_best_substring(&pattern, &haystack, &costs);

    // INVARIANT 1: the match is a real slice of the haystack
    assert!(found.end() <= haystack.len(), "match {:?} past haystack end", found.range());
    assert_eq!(&haystack[found.range()], found.matched.as_slice());

    // INVARIANT 2: reported distance is the matched substring's distance
    let plain = compute_distance(&pattern, &found.matched, &costs);
    assert_eq!(found.distance, plain, "search distance disagrees for {:?}", found);

    // INVARIANT 3: never worse than aligning against the whole haystack
    assert!(found.distance <= compute_distance(&pattern, &haystack, &costs));
});
