//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Day grid renderer.
///
/// Lays out a single day's events side by side and renders them as an
/// SVG time grid.
#[derive(Debug, Parser)]
#[command(name = "dg", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a day's events as an SVG time grid.
    Render {
        /// Path to the events JSON file (stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Path to write the SVG document (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the computed column layout without rendering.
    Columns {
        /// Path to the events JSON file (stdin when omitted).
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}
