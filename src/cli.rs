//! Command-line interface for strictly_boxes.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Boxes - roll, open and stamp your way to the target letter
#[derive(Parser, Debug)]
#[command(name = "strictly_boxes")]
#[command(about = "Box top side matching puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a five-turn game on the console
    Play {
        /// Path to the game configuration file (defaults apply if missing)
        #[arg(short, long, default_value = "strictly_boxes.toml")]
        config: PathBuf,

        /// Seed for a reproducible grid and target
        #[arg(long)]
        seed: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Write a JSON summary of the game to this path
        #[arg(long)]
        summary: Option<PathBuf>,
    },

    /// Print a freshly generated grid and target, then exit
    Preview {
        /// Seed for a reproducible grid and target
        #[arg(long)]
        seed: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}
