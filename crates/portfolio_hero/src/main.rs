//! Portfolio hero - terminal front end
//!
//! Typed intro, tic-tac-toe, and board analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hero_tictactoe::Board;
use portfolio_hero::{HeroConfig, PlayOptions, analyze, run_games, run_intro, seeded_rng};
use std::io::Write;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HeroConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Intro { no_clear } => run_intro_command(&config, !no_clear).await,
        Command::Play { first, seed } => run_play(&config, first.into(), seed).await,
        Command::Analyze { board, json, seed } => run_analyze(&config, &board, json, seed),
    }
}

/// Play the typed terminal intro
#[instrument(skip(config))]
async fn run_intro_command(config: &HeroConfig, clear: bool) -> Result<()> {
    let mut stdout = std::io::stdout();
    run_intro(config, &mut stdout, clear).await?;
    Ok(())
}

/// Play games on stdin/stdout
#[instrument(skip(config))]
async fn run_play(
    config: &HeroConfig,
    first: hero_tictactoe::Player,
    seed: Option<u64>,
) -> Result<()> {
    let mut rng = seeded_rng(seed.or(*config.seed()));
    let mut input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let options = PlayOptions {
        first,
        think: config.opponent_think(),
    };

    let score = run_games(&mut input, &mut stdout, &mut rng, options).await?;
    info!(games = score.games(), "Session ended");
    writeln!(stdout, "\nThanks for playing. {}", score)?;
    Ok(())
}

/// Analyze a single board
#[instrument(skip(config))]
fn run_analyze(config: &HeroConfig, notation: &str, json: bool, seed: Option<u64>) -> Result<()> {
    let board: Board = notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))?;
    let mut rng = seeded_rng(seed.or(*config.seed()));
    let report = analyze(&board, &mut rng);

    let mut stdout = std::io::stdout();
    if json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        write!(stdout, "{}", report.render(&board))?;
    }
    Ok(())
}
