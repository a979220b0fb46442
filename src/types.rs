// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: code-point sequences, per-cell edit steps, results.

use crate::error::{EncodingError, EncodingErrorKind};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::{Deref, Range};

/// An immutable sequence of Unicode scalar values.
///
/// Everything the engine indexes is a code point, never a byte or a UTF-16
/// unit, so `"héllo"` has length 5 and `"😀"` has length 1.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodePoints(Vec<char>);

impl CodePoints {
    pub fn new(chars: Vec<char>) -> Self {
        Self(chars)
    }

    /// Decode UTF-16, pairing surrogates. Lone surrogates are an error.
    pub fn from_utf16(units: &[u16]) -> Result<Self, EncodingError> {
        let mut chars = Vec::with_capacity(units.len());
        let mut index = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            match decoded {
                Ok(c) => {
                    index += c.len_utf16();
                    chars.push(c);
                }
                Err(e) => {
                    return Err(EncodingError {
                        index,
                        kind: EncodingErrorKind::UnpairedSurrogate(e.unpaired_surrogate()),
                    });
                }
            }
        }
        Ok(Self(chars))
    }

    /// Decode a raw UTF-8 buffer.
    pub fn from_utf8(bytes: &[u8]) -> Result<Self, EncodingError> {
        std::str::from_utf8(bytes)
            .map(Self::from)
            .map_err(|e| EncodingError {
                index: e.valid_up_to(),
                kind: EncodingErrorKind::InvalidUtf8,
            })
    }

    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// Copy out a sub-range (in code points).
    pub fn slice(&self, range: Range<usize>) -> CodePoints {
        Self(self.0[range].to_vec())
    }

    pub fn into_inner(self) -> Vec<char> {
        self.0
    }
}

impl Deref for CodePoints {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl From<&str> for CodePoints {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl From<String> for CodePoints {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&[char]> for CodePoints {
    fn from(chars: &[char]) -> Self {
        Self(chars.to_vec())
    }
}

impl FromIterator<char> for CodePoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for CodePoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.0 {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}

impl PartialEq<&str> for CodePoints {
    fn eq(&self, other: &&str) -> bool {
        self.0.iter().copied().eq(other.chars())
    }
}

impl Serialize for CodePoints {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The operation that produced a matrix cell's minimum.
///
/// Stored per cell in full-matrix mode so the backtrace can replay exactly
/// what the forward pass chose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditStep {
    /// Boundary cell with no predecessor: `(0, 0)`, or row 0 in search mode.
    #[default]
    Origin,
    /// Diagonal move where both code points are equal.
    Match,
    /// Diagonal move replacing one code point.
    Substitute,
    /// Up: consume a source code point.
    Delete,
    /// Left: consume a target code point.
    Insert,
    /// Jump back to `(i - rows, j - cols)`.
    ///
    /// OSA always jumps `(2, 2)`. Unrestricted jumps cover the swapped pair
    /// plus any deletions/insertions between the two halves.
    Transpose { rows: usize, cols: usize },
}

impl EditStep {
    /// `(rows, cols)` to step back. `Origin` stays put.
    #[inline]
    pub fn delta(self) -> (usize, usize) {
        match self {
            EditStep::Origin => (0, 0),
            EditStep::Match | EditStep::Substitute => (1, 1),
            EditStep::Delete => (1, 0),
            EditStep::Insert => (0, 1),
            EditStep::Transpose { rows, cols } => (rows, cols),
        }
    }
}

/// Best-aligned substring of the haystack.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstringMatch {
    #[serde(rename = "substring")]
    pub matched: CodePoints,
    pub distance: f64,
    /// Start of the match, in code points.
    pub offset: usize,
}

impl SubstringMatch {
    /// End of the match (exclusive), in code points.
    pub fn end(&self) -> usize {
        self.offset + self.matched.len()
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// What [`crate::distance`] returns: a bare number, or a match in search mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Distance {
    Scalar(f64),
    Substring(SubstringMatch),
}

impl Distance {
    /// The distance value, whichever variant this is.
    pub fn value(&self) -> f64 {
        match self {
            Distance::Scalar(d) => *d,
            Distance::Substring(m) => m.distance,
        }
    }

    pub fn as_match(&self) -> Option<&SubstringMatch> {
        match self {
            Distance::Scalar(_) => None,
            Distance::Substring(m) => Some(m),
        }
    }
}
