use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;

/// Deterministic ordered bulk renaming of files
#[derive(Parser, Debug)]
#[command(name = "ordename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rename files in each directory to the target names, in sort order
    ///
    /// Files matching the extension filter are sorted lexicographically
    /// (raw byte order, no numeric awareness) and the i-th file is renamed
    /// to the i-th target name. Files beyond the target list keep their
    /// names; an occupied target name is an error, never an overwrite.
    Run {
        /// Directories to process (the full target list applies to each)
        #[arg(required = true, value_name = "DIR")]
        dirs: Vec<PathBuf>,

        /// Target basenames in order, without extension (comma-separated)
        #[arg(
            long,
            value_delimiter = ',',
            required_unless_present = "suit",
            conflicts_with = "suit"
        )]
        names: Vec<String>,

        /// Generate card-rank target names with this prefix (A, 2-11, J, Q, K)
        #[arg(long, value_name = "PREFIX")]
        suit: Option<String>,

        /// Extension filter; only matching files are considered
        #[arg(long, default_value = "png", value_name = "EXT")]
        ext: String,

        /// Show what would be renamed without touching any file
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,

        /// Suppress progress lines and summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print version information
    Version {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
}
