//! Moves and move errors.
//!
//! Moves are domain events, not side effects. A session records every
//! accepted move so front ends can replay or print the game.

use super::rules::Outcome;
use super::{Player, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8) where the mark was placed.
    pub index: usize,
}

impl Move {
    /// Named position of this move.
    pub fn position(&self) -> Option<Position> {
        Position::from_index(self.index)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            Some(pos) => write!(f, "{} -> {}", self.player, pos),
            None => write!(f, "{} -> #{}", self.player, self.index),
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Index outside `0..9`.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The board already has a terminal outcome.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),

    /// The session expected the other player to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),
}

/// Error returned by engine and session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The requested move is not legal on this board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// The opponent was asked to move on a full or finished board.
    #[display("No legal move available")]
    NoLegalMove,
}

impl MoveError {
    /// True for [`MoveError::InvalidMove`]; front ends ignore these silently.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::InvalidMove(_))
    }

    /// True for [`MoveError::NoLegalMove`].
    pub fn is_no_legal_move(&self) -> bool {
        matches!(self, MoveError::NoLegalMove)
    }
}

impl From<InvalidMove> for MoveError {
    fn from(reason: InvalidMove) -> Self {
        MoveError::InvalidMove(reason)
    }
}

impl std::error::Error for MoveError {}
