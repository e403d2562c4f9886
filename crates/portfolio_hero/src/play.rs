//! Interactive tic-tac-toe against the hero's opponent.

use anyhow::Result;
use hero_tictactoe::{GameSession, Outcome, Player, Position};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, instrument};

/// Builds the opponent's random source, seeded when `seed` is given.
#[instrument]
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Running totals across games in one sitting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    /// Games won by the human.
    pub human_wins: u32,
    /// Games won by the opponent.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Records a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::Human) => self.human_wins += 1,
            Outcome::Win(Player::Opponent) => self.opponent_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.opponent_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You {} · Opponent {} · Draws {}",
            self.human_wins, self.opponent_wins, self.draws
        )
    }
}

/// Settings for one sitting.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    /// Who opens each game.
    pub first: Player,
    /// Pause before the opponent answers.
    pub think: Duration,
}

/// Reads one trimmed line; `None` at end of input.
async fn read_command<I>(input: &mut I) -> Result<Option<String>>
where
    I: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    if input.read_line(&mut line).await? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_lowercase()))
}

fn is_quit(command: &str) -> bool {
    matches!(command, "q" | "quit" | "exit")
}

/// Plays games until the human quits or input ends.
///
/// Moves the engine rejects (occupied or out-of-range cells) are ignored
/// and the prompt is shown again.
#[instrument(skip(input, out, rng))]
pub async fn run_games<I, W, R>(
    input: &mut I,
    out: &mut W,
    rng: &mut R,
    options: PlayOptions,
) -> Result<Scoreboard>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: Rng + ?Sized,
{
    let mut score = Scoreboard::default();
    let mut session = GameSession::new(options.first);
    info!("Game started");

    loop {
        if session.is_over() {
            let outcome = session.outcome();
            score.record(outcome);
            writeln!(out, "\n{}", session.board().display())?;
            match session.winning_line() {
                Some(line) => writeln!(out, "{} ({})", outcome, line)?,
                None => writeln!(out, "{}", outcome)?,
            }
            writeln!(out, "Score: {}", score)?;
            write!(out, "[n]ew game or [q]uit: ")?;
            out.flush()?;

            match read_command(input).await? {
                Some(command) if command == "n" || command == "new" => {
                    session = GameSession::new(options.first);
                    info!(games = score.games(), "New game started");
                }
                _ => return Ok(score),
            }
            continue;
        }

        match session.to_move() {
            Player::Opponent => {
                writeln!(out, "Opponent is thinking...")?;
                out.flush()?;
                if !options.think.is_zero() {
                    tokio::time::sleep(options.think).await;
                }
                let (choice, _) = session.play_opponent(rng)?;
                let label = Position::from_index(choice.index)
                    .map(|pos| pos.label())
                    .unwrap_or("?");
                writeln!(out, "Opponent plays {} ({})", label, choice.tactic)?;
            }
            Player::Human => {
                writeln!(out, "\n{}", session.board().display())?;
                write!(out, "Your move (1-9 or a label, q to quit): ")?;
                out.flush()?;

                let Some(command) = read_command(input).await? else {
                    return Ok(score);
                };
                if is_quit(&command) {
                    return Ok(score);
                }
                let Some(position) = Position::from_label_or_number(&command) else {
                    writeln!(out, "Pick a cell number from 1 to 9.")?;
                    continue;
                };
                match session.play_human(position.to_index()) {
                    Ok(_) => {}
                    Err(err) if err.is_invalid_move() => {
                        debug!(%err, "Ignoring invalid move");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }
    }
}
