// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the damlev command-line interface.
//!
//! Three subcommands: `distance` for a single number, `search` to locate the
//! best-matching substring, and `batch` to run JSON-lines requests through
//! the engine (handy for diffing against another implementation's vectors).

pub mod display;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use damlev::Options;
use std::fs;

#[derive(Parser)]
#[command(
    name = "damlev",
    about = "Weighted Levenshtein / Damerau-Levenshtein distance and infix search",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Edit distance between two strings
    Distance {
        source: String,
        target: String,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Find the substring of HAYSTACK that PATTERN aligns to most cheaply
    Search {
        pattern: String,
        haystack: String,

        #[command(flatten)]
        costs: CostArgs,
    },

    /// Evaluate JSON-lines requests: {"source": .., "target": .., "options": {..}}
    ///
    /// Writes one JSON result per input line. Per-line options are layered
    /// over the command-line ones.
    Batch {
        /// Input file (reads stdin when omitted)
        file: Option<String>,

        #[command(flatten)]
        costs: CostArgs,
    },
}

/// Cost and mode flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct CostArgs {
    /// JSON file with default options (flags below override it)
    #[arg(long)]
    pub config: Option<String>,

    /// Weight of inserting a character [default: 1]
    #[arg(long)]
    pub insertion_cost: Option<f64>,

    /// Weight of deleting a character [default: 1]
    #[arg(long)]
    pub deletion_cost: Option<f64>,

    /// Weight of replacing a character [default: 1]
    #[arg(long)]
    pub substitution_cost: Option<f64>,

    /// Weight of swapping adjacent characters [default: 1]
    #[arg(long)]
    pub transposition_cost: Option<f64>,

    /// Count adjacent transpositions as a single edit
    #[arg(long, overrides_with = "no_damerau")]
    pub damerau: bool,

    /// Turn transpositions off, even if the config file enables them
    #[arg(long, overrides_with = "damerau")]
    pub no_damerau: bool,

    /// Use optimal string alignment instead of unrestricted transpositions
    #[arg(long, overrides_with = "no_restricted")]
    pub restricted: bool,

    /// Use unrestricted transpositions, even if the config file says restricted
    #[arg(long, overrides_with = "restricted")]
    pub no_restricted: bool,

    /// Print machine-readable JSON
    #[arg(long)]
    pub json: bool,
}

impl CostArgs {
    /// Merge the config file (if any) with the flags.
    ///
    /// `restricted` only means something once transpositions are on, so it
    /// is checked after the merge: either source may supply `damerau`.
    pub fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config {}", path))?;
                serde_json::from_str::<Options>(&text)
                    .with_context(|| format!("invalid options in {}", path))?
            }
            None => Options::default(),
        };
        self.apply(&mut options);
        if options.restricted && !options.damerau {
            bail!("restricted transpositions need damerau (pass --damerau or set it in the config)");
        }
        Ok(options)
    }

    fn apply(&self, options: &mut Options) {
        if let Some(v) = self.insertion_cost {
            options.insertion_cost = v;
        }
        if let Some(v) = self.deletion_cost {
            options.deletion_cost = v;
        }
        if let Some(v) = self.substitution_cost {
            options.substitution_cost = v;
        }
        if let Some(v) = self.transposition_cost {
            options.transposition_cost = v;
        }
        if self.damerau {
            options.damerau = true;
        }
        if self.no_damerau {
            options.damerau = false;
        }
        if self.restricted {
            options.restricted = true;
        }
        if self.no_restricted {
            options.restricted = false;
        }
    }
}
