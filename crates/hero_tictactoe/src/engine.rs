//! Move application and the opponent's move policy.
//!
//! The opponent looks exactly one ply ahead. Tiers are tried in order:
//!
//! 1. win now, lowest index first
//! 2. block a human line, lowest index first
//! 3. take the center
//! 4. any empty square, uniformly at random
//!
//! It is intentionally beatable; two simultaneous human threats can only
//! have one of them blocked.

use crate::action::{InvalidMove, MoveError};
use crate::rules::{Outcome, evaluate};
use crate::types::{BOARD_SIZE, CENTER};
use crate::{Board, Player};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which tier of the policy produced an opponent move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tactic {
    /// Completes an opponent line.
    Win,
    /// Occupies the square the human needs to complete a line.
    Block,
    /// Takes index 4.
    Center,
    /// Random empty square.
    Random,
}

impl std::fmt::Display for Tactic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tactic::Win => write!(f, "win"),
            Tactic::Block => write!(f, "block"),
            Tactic::Center => write!(f, "center"),
            Tactic::Random => write!(f, "random"),
        }
    }
}

/// An opponent decision: the chosen index and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Choice {
    /// Board index the opponent plays.
    pub index: usize,
    /// Policy tier that selected it.
    pub tactic: Tactic,
}

/// Places a human mark at `index`.
///
/// Does not re-evaluate the resulting board; call [`evaluate`] afterwards.
///
/// # Errors
///
/// [`MoveError::InvalidMove`] if the index is out of range, the square is
/// occupied, or the board already has a terminal outcome.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn human_move(board: &Board, index: usize) -> Result<Board, MoveError> {
    let outcome = evaluate(board);
    if outcome.is_terminal() {
        return Err(InvalidMove::GameOver(outcome).into());
    }
    if index >= BOARD_SIZE {
        return Err(InvalidMove::OutOfBounds(index).into());
    }
    if !board.is_empty(index) {
        return Err(InvalidMove::SquareOccupied(index).into());
    }
    Ok(board.with(index, Player::Human))
}

/// Picks the opponent's move without applying it.
///
/// # Errors
///
/// [`MoveError::NoLegalMove`] if the board is full or already decided.
#[instrument(skip(board, rng), fields(board = %board.notation()))]
pub fn choose_opponent_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Choice, MoveError> {
    if evaluate(board).is_terminal() {
        return Err(MoveError::NoLegalMove);
    }
    let empty = board.empty_indices();
    if empty.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    let completes = |player: Player| {
        empty
            .iter()
            .copied()
            .find(|&i| evaluate(&board.with(i, player)) == Outcome::Win(player))
    };

    let (index, tactic) = if let Some(index) = completes(Player::Opponent) {
        (index, Tactic::Win)
    } else if let Some(index) = completes(Player::Human) {
        (index, Tactic::Block)
    } else if board.is_empty(CENTER) {
        (CENTER, Tactic::Center)
    } else {
        let index = *empty.choose(rng).ok_or(MoveError::NoLegalMove)?;
        (index, Tactic::Random)
    };
    let choice = Choice { index, tactic };

    debug!(index = choice.index, tactic = %choice.tactic, "Opponent chose move");
    Ok(choice)
}

/// Index the opponent would play on this board.
///
/// # Errors
///
/// See [`choose_opponent_move`].
pub fn choose_opponent_index<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<usize, MoveError> {
    choose_opponent_move(board, rng).map(|choice| choice.index)
}

/// Plays the opponent's move and returns the new board.
///
/// # Errors
///
/// See [`choose_opponent_move`].
pub fn opponent_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Board, MoveError> {
    let choice = choose_opponent_move(board, rng)?;
    Ok(board.with(choice.index, Player::Opponent))
}
