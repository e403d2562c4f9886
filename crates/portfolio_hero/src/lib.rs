//! Terminal edition of the portfolio hero.
//!
//! - **Intro**: the typed terminal from the landing hero
//! - **Play**: tic-tac-toe against the hero's one-ply opponent
//! - **Analyze**: what the engine makes of a given board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analyze;
mod config;
mod intro;
mod play;
mod typer;

pub use analyze::{Analysis, analyze};
pub use config::{ConfigError, HeroConfig, MAX_HISTORY_LIMIT};
pub use intro::run_intro;
pub use play::{PlayOptions, Scoreboard, run_games, seeded_rng};
pub use typer::{ScriptLine, Typer, TyperStep, WORKING_DIR};
