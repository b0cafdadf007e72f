//! Command-line surface for the ti binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// TaxIntegrity demo configuration and simulation CLI.
#[derive(Parser, Debug)]
#[command(name = "ti", version, about)]
pub struct Cli {
    /// Override slot file (defaults to the user config directory)
    #[arg(long, env = "TI_OVERRIDES_FILE", global = true)]
    pub overrides_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// ti subcommands, mirroring the demo page's edit-mode actions.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a dotted key path
    Get {
        /// Dotted key path, e.g. audit.heading
        path: String,
    },
    /// Set the value at a dotted key path and persist the change
    Set {
        /// Dotted key path, e.g. site.tagline
        path: String,
        /// New value; parsed as JSON when possible, stored as a string otherwise
        value: String,
        /// Always store VALUE as a string, even if it parses as JSON
        #[arg(long)]
        raw: bool,
    },
    /// Print the active configuration document
    Show,
    /// Print the minimal override document (same shape as the persisted slot)
    Export,
    /// Merge an override document file onto a fresh copy of the defaults
    Import {
        /// Path to a JSON override document
        file: PathBuf,
    },
    /// Discard all edits and clear the persisted slot
    Reset,
    /// Run the impact simulation for an adoption level (0-100)
    Simulate {
        /// Adoption level
        adoption: f64,
    },
    /// Build the exportable demo report for an adoption level (0-100)
    Report {
        /// Adoption level
        adoption: f64,
    },
}
