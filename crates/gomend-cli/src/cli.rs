//! CLI argument definitions for gomend.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gomend",
    version,
    about = "Repair go.mod files left behind by a conflicted merge",
    long_about = "gomend removes merge-conflict markers from go.mod, keeps the highest \
                  version of every module required more than once, and runs `go mod tidy`. \
                  Without a subcommand it runs `fix`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repair the manifest in place, then run the tidy command
    Fix {
        /// Path to the manifest (default: go.mod in this or a parent directory)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Do not run the tidy command afterwards
        #[arg(long)]
        no_tidy: bool,
    },

    /// Show what `fix` would remove without changing anything
    Check {
        /// Path to the manifest (default: go.mod in this or a parent directory)
        #[arg(long)]
        manifest: Option<PathBuf>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn parse() -> Cli {
    Cli::parse()
}
