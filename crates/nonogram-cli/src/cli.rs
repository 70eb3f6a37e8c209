use std::path::PathBuf;

use clap::{Parser, Subcommand};
use nonogram_core::Layout;

#[derive(Parser)]
#[command(name = "nonoconv")]
#[command(about = "Convert packed nonogram records into clue text")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to nonoconv.toml, then the user config directory)
    #[arg(short, long, global = true, env = "NONOCONV_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a packed record stream and print its clues
    Convert {
        /// Record file, or - for stdin
        input: PathBuf,

        /// Clue text layout
        #[arg(short, long)]
        layout: Option<Layout>,

        /// Print the decoded puzzle as JSON
        #[arg(long, conflicts_with = "layout")]
        json: bool,

        /// Also draw the decoded grid
        #[arg(short, long)]
        preview: bool,
    },

    /// Dump header, palette and segments as JSON
    Inspect {
        /// Record file, or - for stdin
        input: PathBuf,
    },

    /// Convert a 0/1 bitmap into clue text
    Bitmap {
        /// Bitmap file, or - for stdin
        input: PathBuf,

        /// Clue text layout
        #[arg(short, long)]
        layout: Option<Layout>,
    },

    /// Solve a clue sheet in either layout
    Solve {
        /// Clue text file, or - for stdin
        input: PathBuf,

        /// Stop after this many solutions
        #[arg(short = 'n', long)]
        max_solutions: Option<usize>,

        /// Give up after visiting this many search nodes
        #[arg(long)]
        node_limit: Option<u64>,
    },
}
