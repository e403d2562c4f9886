//! Command-line interface for portfolio_hero.

use clap::{Parser, Subcommand, ValueEnum};
use hero_tictactoe::Player;
use std::path::PathBuf;

/// Portfolio hero - typed terminal and tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "portfolio_hero")]
#[command(about = "Terminal edition of the portfolio hero", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the typed terminal intro
    Intro {
        /// Append frames instead of redrawing in place
        #[arg(long)]
        no_clear: bool,
    },

    /// Play tic-tac-toe against the opponent
    Play {
        /// Who opens each game
        #[arg(long, value_enum, default_value = "human")]
        first: FirstPlayer,

        /// Seed for the opponent's random moves (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Evaluate a board such as "OO.XX...." and show the opponent's reply
    Analyze {
        /// Nine cells: X (you), O (opponent), '.' (empty)
        board: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Seed for the opponent's random moves (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Who moves first.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayer {
    /// You open.
    Human,
    /// The opponent opens.
    Opponent,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::Human => Player::Human,
            FirstPlayer::Opponent => Player::Opponent,
        }
    }
}
