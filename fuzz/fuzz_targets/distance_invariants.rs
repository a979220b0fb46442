// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for weighted edit distance.
//!
//! Arbitrary UTF-16 buffers (lone surrogates included) and arbitrary weights
//! go through the public front door. Invalid input must come back as an
//! error, never a panic, and valid input must respect the distance bounds.

#![no_main]

use arbitrary::Arbitrary;
use damlev::{distance_utf16, Distance, Error, Options};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    source: Vec<u16>,
    target: Vec<u16>,
    /// Weights as small integers in quarters, plus raw bits for the odd NaN
    weights: [u8; 4],
    raw_weight: Option<u64>,
    damerau: bool,
    restricted: bool,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let source = &input.source[..input.source.len().min(64)];
    let target = &input.target[..input.target.len().min(64)];

    let [i, d, s, t] = input.weights.map(|w| f64::from(w) / 4.0);
    let options = Options {
        insertion_cost: i,
        deletion_cost: d,
        substitution_cost: input.raw_weight.map_or(s, f64::from_bits),
        transposition_cost: t,
        damerau: input.damerau,
        restricted: input.restricted,
        search: false,
    };

    let result = match distance_utf16(source, target, &options) {
        Ok(result) => result,
        // INVARIANT 1: bad weights and lone surrogates are reported, not panics
        Err(Error::InvalidCost(_)) | Err(Error::Encoding(_)) => return,
    };
    let Distance::Scalar(value) = result else {
        panic!("plain mode returned a substring match: {:?}", result);
    };

    let n = char::decode_utf16(source.iter().copied()).count() as f64;
    let m = char::decode_utf16(target.iter().copied()).count() as f64;
    let sub = options.substitution_cost;

    // INVARIANT 2: finite and non-negative
    assert!(value.is_finite() && value >= 0.0, "distance {} out of range", value);

    // INVARIANT 3: never worse than deleting everything and inserting everything
    assert!(
        value <= n * d + m * i,
        "distance {} exceeds delete-all/insert-all bound {}",
        value,
        n * d + m * i
    );

    // INVARIANT 4: identical inputs cost nothing
    if source == target {
        assert_eq!(value, 0.0, "identical inputs gave {}", value);
    }

    // INVARIANT 5: with unit weights, at least the length difference
    if i == 1.0 && d == 1.0 && sub == 1.0 {
        assert!(value >= (n - m).abs(), "distance {} below length difference", value);
    }
});
