//! Strictly Boxes - Unified CLI
//!
//! Plays the box puzzle on the console or previews a generated grid.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use strictly_box_puzzle::{Driver, GameEvent, GameSetup, Renderer};
use strictly_boxes::{Cli, Command, ConsolePrompter, ConsoleRenderer, GameConfig, write_summary};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing to stderr (stdout is for the game)
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            no_color,
            summary,
        } => run_play(config, seed, no_color, summary),
        Command::Preview { seed, no_color } => run_preview(seed, no_color),
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Play a full game on the console
#[instrument(skip_all, fields(config_path = %config_path.display()))]
fn run_play(
    config_path: PathBuf,
    seed: Option<u64>,
    no_color: bool,
    summary: Option<PathBuf>,
) -> Result<()> {
    let config = GameConfig::load(&config_path)
        .context("Failed to load game configuration")?
        .with_overrides(seed, no_color, summary);

    let setup = GameSetup::random(&mut rng_for(*config.seed()));

    let stdin = io::stdin();
    let prompter = ConsolePrompter::new(stdin.lock(), io::stdout());
    let renderer = ConsoleRenderer::new(io::stdout(), *config.color());
    let mut driver = Driver::new(prompter, renderer).with_initial_grid(*config.show_initial_grid());

    let finished = driver.play(setup).context("Game session aborted")?;
    info!(score = finished.score(), "Game over");

    if let Some(path) = config.summary_path() {
        write_summary(path, &finished.summary())?;
    }
    Ok(())
}

/// Print a generated grid without playing
#[instrument]
fn run_preview(seed: Option<u64>, no_color: bool) -> Result<()> {
    let setup = GameSetup::random(&mut rng_for(seed));
    let mut renderer = ConsoleRenderer::new(io::stdout(), !no_color);
    renderer.event(&GameEvent::Welcome {
        target: setup.state().target(),
    })?;
    renderer.grid(&setup.state().grid().snapshot())?;
    Ok(())
}
