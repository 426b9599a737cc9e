// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the ordex command-line interface.
//!
//! One subcommand per query operation. Values are given inline
//! (space- or comma-separated integers) or, with `--stdin`, as a JSON
//! array on standard input. `--json` switches the output from
//! human-readable text to a JSON object.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ordex",
    about = "Logarithmic queries over sorted, rotated, and unimodal arrays",
    version
)]
pub struct Cli {
    /// Emit results as JSON instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Read the array as a JSON array of integers from stdin
    #[arg(long, global = true)]
    pub stdin: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Floor and ceiling of a value in a sorted array
    FloorCeil {
        /// Probe value
        #[arg(short, long)]
        target: i64,

        /// Array elements, sorted in non-decreasing order
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// First and last index of a value in a sorted array
    Occurrences {
        /// Value to locate
        #[arg(short, long)]
        target: i64,

        /// Array elements, sorted in non-decreasing order
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// Number of copies of a value in a sorted array
    Count {
        /// Value to count
        #[arg(short, long)]
        target: i64,

        /// Array elements, sorted in non-decreasing order
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// Minimum element and rotation count of a rotated sorted array
    Minimum {
        /// Array elements: a rotated sorted array with distinct values
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// Index of a value in a rotated sorted array with distinct elements
    Search {
        /// Value to locate
        #[arg(short, long)]
        target: i64,

        /// Array elements: a rotated sorted array with distinct values
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// Presence of a value in a rotated sorted array that may hold duplicates
    SearchAny {
        /// Value to test for
        #[arg(short, long)]
        target: i64,

        /// Array elements: a rotated sorted array, duplicates allowed
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// The value appearing once in a sorted array where all others appear twice
    Single {
        /// Use the linear XOR fallback (no sortedness assumed)
        #[arg(long)]
        unsorted: bool,

        /// Array elements
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },

    /// An index strictly greater than both of its neighbors
    Peak {
        /// Array elements with at least one strict local maximum
        #[arg(value_delimiter = ',')]
        values: Vec<i64>,
    },
}

impl Commands {
    /// The inline values given on the command line.
    pub fn values(&self) -> &[i64] {
        match self {
            Commands::FloorCeil { values, .. }
            | Commands::Occurrences { values, .. }
            | Commands::Count { values, .. }
            | Commands::Minimum { values }
            | Commands::Search { values, .. }
            | Commands::SearchAny { values, .. }
            | Commands::Single { values, .. }
            | Commands::Peak { values } => values,
        }
    }
}
