// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Two things can go wrong, and both happen before any matrix is allocated:
//! a cost that isn't a usable weight, or an input buffer that doesn't decode
//! to code points. Once inputs are validated the recurrence is total.

use std::fmt;

/// The four weighted edit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Insertion,
    Deletion,
    Substitution,
    Transposition,
}

impl Operation {
    /// Option name as it appears in the option bag.
    pub fn option_name(self) -> &'static str {
        match self {
            Operation::Insertion => "insertion_cost",
            Operation::Deletion => "deletion_cost",
            Operation::Substitution => "substitution_cost",
            Operation::Transposition => "transposition_cost",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option_name())
    }
}

/// Why a cost was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostViolation {
    /// Strictly below zero.
    Negative,
    /// NaN or infinite.
    NonFinite,
}

/// A supplied cost was negative, infinite or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvalidCostError {
    pub operation: Operation,
    pub value: f64,
}

impl InvalidCostError {
    pub fn reason(&self) -> CostViolation {
        if self.value.is_finite() {
            CostViolation::Negative
        } else {
            CostViolation::NonFinite
        }
    }
}

impl fmt::Display for InvalidCostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason() {
            CostViolation::Negative => {
                write!(f, "{} must be >= 0, got {}", self.operation, self.value)
            }
            CostViolation::NonFinite => {
                write!(f, "{} must be a finite number, got {}", self.operation, self.value)
            }
        }
    }
}

impl std::error::Error for InvalidCostError {}

/// What the decoder tripped over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingErrorKind {
    /// A UTF-16 surrogate without its partner.
    UnpairedSurrogate(u16),
    /// A byte sequence that isn't valid UTF-8.
    InvalidUtf8,
}

/// An input buffer could not be decoded into code points.
///
/// `index` counts code units of the input (u16 for UTF-16, bytes for UTF-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingError {
    pub index: usize,
    pub kind: EncodingErrorKind,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EncodingErrorKind::UnpairedSurrogate(unit) => {
                write!(f, "unpaired surrogate 0x{:04X} at code unit {}", unit, self.index)
            }
            EncodingErrorKind::InvalidUtf8 => {
                write!(f, "invalid UTF-8 sequence at byte {}", self.index)
            }
        }
    }
}

impl std::error::Error for EncodingError {}

/// Any error the crate can return.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidCost(InvalidCostError),
    Encoding(EncodingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCost(e) => write!(f, "invalid cost: {}", e),
            Error::Encoding(e) => write!(f, "encoding error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidCost(e) => Some(e),
            Error::Encoding(e) => Some(e),
        }
    }
}

impl From<InvalidCostError> for Error {
    fn from(e: InvalidCostError) -> Self {
        Error::InvalidCost(e)
    }
}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Self {
        Error::Encoding(e)
    }
}
