// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Last-occurrence table for unrestricted transpositions.

use std::collections::HashMap;

const DIRECT: usize = 256;

/// Maps a code point to the last 1-based row it was seen in. `0` means never.
///
/// Latin-1 code points hit a flat array; everything else falls back to a
/// hash map. Lives for one invocation only.
#[derive(Debug, Clone)]
pub struct LastSeen {
    direct: [usize; DIRECT],
    other: HashMap<char, usize>,
}

impl Default for LastSeen {
    fn default() -> Self {
        Self::new()
    }
}

impl LastSeen {
    pub fn new() -> Self {
        Self {
            direct: [0; DIRECT],
            other: HashMap::new(),
        }
    }

    #[inline]
    pub fn get(&self, c: char) -> usize {
        let code = c as usize;
        if code < DIRECT {
            self.direct[code]
        } else {
            self.other.get(&c).copied().unwrap_or(0)
        }
    }

    #[inline]
    pub fn record(&mut self, c: char, row: usize) {
        let code = c as usize;
        if code < DIRECT {
            self.direct[code] = row;
        } else {
            self.other.insert(c, row);
        }
    }
}
