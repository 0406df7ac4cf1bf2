//! CLI argument definitions for verso.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "verso",
    version,
    about = "Resolve a version range against the available versions of a runtime",
    long_about = "verso picks the version to install for a requested range. Even-minor \
                  (stable) releases are preferred; odd-minor releases are chosen only when \
                  no stable release satisfies the range."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Print status lines on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the version to install for a range; an empty range selects the default
    Resolve {
        /// Requested range, e.g. `>=0.10`, `~0.9.0`, `0.10.x` or `""`
        range: String,
        /// Version used when the range is empty
        #[arg(short, long, env = "VERSO_DEFAULT_VERSION")]
        default: Option<String>,
        #[command(flatten)]
        manifest: ManifestArgs,
    },

    /// Check whether a version satisfies a range (exit status 1 if not, 2 on error)
    Satisfies {
        /// Version to test
        version: String,
        /// Range to test against
        range: String,
    },

    /// Print the normalised comparator sets of a range
    Range {
        /// Range to parse
        range: String,
    },

    /// List the manifest in the order candidates are tried
    Candidates {
        #[command(flatten)]
        manifest: ManifestArgs,
    },
}

/// Where the list of available versions comes from.
#[derive(Args, Debug, Default)]
pub struct ManifestArgs {
    /// JSON manifest file: an array of versions or `{"stable": .., "all": [..]}`
    #[arg(short, long, env = "VERSO_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Inline JSON manifest, same shapes as --manifest
    #[arg(long, conflicts_with = "manifest")]
    pub versions_json: Option<String>,

    /// An available version (repeatable); added to any manifest given
    #[arg(short, long = "available", value_name = "VERSION")]
    pub available: Vec<String>,
}

pub fn parse() -> Cli {
    Cli::parse()
}
