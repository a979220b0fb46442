//! Weighted Levenshtein and Damerau-Levenshtein distance, with infix search.
//!
//! Computes edit distance between two code-point sequences under per-operation
//! costs, in three transposition modes (none, OSA, unrestricted), and can
//! locate the cheapest-aligned substring of a haystack for a pattern.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │   cost.rs   │────▶│    engine/       │────▶│  search.rs  │
//! │ (Options,   │     │ (rolling rows,   │     │ (free-start │
//! │  CostModel) │     │  full matrix)    │     │  backtrace) │
//! └─────────────┘     └──────────────────┘     └─────────────┘
//!        │                     │                      │
//!        ▼                     ▼                      ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      contracts.rs                       │
//! │   (debug-only checks on every value leaving the engine) │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `types`     | `CodePoints`, `Distance`, `SubstringMatch`        |
//! | `cost`      | Option bag and validated `CostModel`              |
//! | `engine`    | The recurrence, rolling and full-matrix variants  |
//! | `search`    | Infix search and backtrace                        |
//! | `contracts` | Result invariants                                 |
//!
//! # Usage
//!
//! ```
//! use damlev::{distance, Distance, Options};
//!
//! let opts = Options { damerau: true, restricted: true, ..Options::default() };
//! assert_eq!(distance("ab", "ba", &opts).unwrap(), Distance::Scalar(1.0));
//!
//! let opts = Options { search: true, ..Options::default() };
//! let found = distance("abc", "xxabcxx", &opts).unwrap();
//! let m = found.as_match().unwrap();
//! assert_eq!((m.matched.to_string().as_str(), m.distance, m.offset), ("abc", 0.0, 2));
//! ```

pub mod contracts;
pub mod cost;
pub mod engine;
mod error;
mod search;
pub mod testing;
mod types;

pub use cost::{CostModel, Options, Transposition};
pub use engine::compute_distance;
pub use error::{
    CostViolation, EncodingError, EncodingErrorKind, Error, InvalidCostError, Operation,
};
pub use search::compute_best_substring;
pub use types::{CodePoints, Distance, EditStep, SubstringMatch};

use tracing::debug;

/// Distance between two strings under `options`.
///
/// Returns [`Distance::Scalar`] normally, or [`Distance::Substring`] when
/// `options.search` is set (best-aligned substring of `target`). Costs are
/// validated before any work is done.
pub fn distance(source: &str, target: &str, options: &Options) -> Result<Distance, InvalidCostError> {
    let source = CodePoints::from(source);
    let target = CodePoints::from(target);
    distance_code_points(&source, &target, options)
}

/// [`distance`] over already-decoded code points.
pub fn distance_code_points(
    source: &[char],
    target: &[char],
    options: &Options,
) -> Result<Distance, InvalidCostError> {
    let costs = options.cost_model()?;
    debug!(
        source_len = source.len(),
        target_len = target.len(),
        mode = ?costs.mode(),
        search = options.search,
        "computing distance"
    );
    if options.search {
        Ok(Distance::Substring(compute_best_substring(source, target, &costs)))
    } else {
        Ok(Distance::Scalar(compute_distance(source, target, &costs)))
    }
}

/// [`distance`] over UTF-16 buffers, as handed over by JS-style hosts.
///
/// Surrogate pairs decode to one code point each; a lone surrogate is an
/// [`EncodingError`].
pub fn distance_utf16(source: &[u16], target: &[u16], options: &Options) -> Result<Distance, Error> {
    let source = CodePoints::from_utf16(source)?;
    let target = CodePoints::from_utf16(target)?;
    Ok(distance_code_points(&source, &target, options)?)
}

/// Plain Levenshtein: forces transpositions off, other options kept.
pub fn levenshtein(source: &str, target: &str, options: &Options) -> Result<Distance, InvalidCostError> {
    let options = Options {
        damerau: false,
        ..*options
    };
    distance(source, target, &options)
}

/// Damerau-Levenshtein: forces transpositions on. `options.restricted`
/// still picks OSA versus unrestricted.
pub fn damerau_levenshtein(
    source: &str,
    target: &str,
    options: &Options,
) -> Result<Distance, InvalidCostError> {
    let options = Options {
        damerau: true,
        ..*options
    };
    distance(source, target, &options)
}
