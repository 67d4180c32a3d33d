//! Strictly Boxes - console front end for the box puzzle
//!
//! Wires the puzzle engine to a terminal.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Console**: line prompter and text renderer for the engine's driver
//! - **Summary**: JSON report of a finished game

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod summary;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig};
pub use console::{ConsolePrompter, ConsoleRenderer, cube_diagram, grid_table};
pub use summary::write_summary;
