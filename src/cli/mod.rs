// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the search-widget command-line interface.
//!
//! Three subcommands: `normalize` to resolve a single raw link, `filter` to run
//! a query over a payload file the way the widget would, and `inspect` to see
//! how every payload entry resolved.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "search-widget",
    about = "Inspect site-search widget payloads: link normalization and ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve one raw link value into its canonical form
    Normalize {
        /// Raw link: JSON (object, string, null) or bare text such as a URL
        link: String,

        /// Print the canonical link as JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter and rank a payload's items for a query
    Filter {
        /// Payload file with a `pageList` array
        #[arg(short, long)]
        input: String,

        /// Query text (empty lists every item)
        #[arg(short, long, default_value = "")]
        query: String,

        /// Ignore descriptions when matching (overrides payload options)
        #[arg(long)]
        no_description: bool,

        /// Print results as JSON instead of a table
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Print results as widget list markup
        #[arg(long)]
        html: bool,
    },

    /// Show how each payload entry normalized
    Inspect {
        /// Payload file with a `pageList` array
        input: String,
    },
}
