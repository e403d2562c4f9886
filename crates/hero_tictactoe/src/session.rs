//! One playthrough from an empty board to a terminal outcome.

use crate::action::{InvalidMove, Move, MoveError};
use crate::engine::{Choice, choose_opponent_move, human_move};
use crate::rules::{Line, Outcome, evaluate, winning_line};
use crate::types::BOARD_SIZE;
use crate::{Board, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A game session owned by the front end.
///
/// The outcome is derived from the board on every query. Once it is
/// terminal no further moves are accepted; start a new session instead.
///
/// Deserialized sessions are replayed from their history and rejected
/// unless the board and turn agree with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct GameSession {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl GameSession {
    /// Starts a new game on an empty board.
    #[instrument]
    pub fn new(first: Player) -> Self {
        info!(%first, "Starting new game session");
        Self {
            board: Board::new(),
            to_move: first,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player expected to move next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Current outcome, derived from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.board)
    }

    /// True once the outcome is terminal.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Applies the human's move at `index`.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidMove`] when it is the opponent's turn, the game is
    /// over, or the move itself is illegal.
    #[instrument(skip(self), fields(board = %self.board.notation()))]
    pub fn play_human(&mut self, index: usize) -> Result<Outcome, MoveError> {
        self.ensure_turn(Player::Human)?;
        let board = human_move(&self.board, index)?;
        Ok(self.accept(board, Move::new(Player::Human, index)))
    }

    /// Lets the opponent pick and play its move.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidMove`] when it is the human's turn or the game is
    /// over; [`MoveError::NoLegalMove`] if the engine finds no square.
    #[instrument(skip(self, rng), fields(board = %self.board.notation()))]
    pub fn play_opponent<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Choice, Outcome), MoveError> {
        self.ensure_turn(Player::Opponent)?;
        let choice = choose_opponent_move(&self.board, rng)?;
        let board = self.board.with(choice.index, Player::Opponent);
        let outcome = self.accept(board, Move::new(Player::Opponent, choice.index));
        Ok((choice, outcome))
    }

    fn ensure_turn(&self, player: Player) -> Result<(), MoveError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            warn!(%outcome, "Move rejected: game is over");
            return Err(InvalidMove::GameOver(outcome).into());
        }
        if self.to_move != player {
            warn!(%player, "Move rejected: out of turn");
            return Err(InvalidMove::WrongTurn(player).into());
        }
        Ok(())
    }

    fn accept(&mut self, board: Board, action: Move) -> Outcome {
        self.board = board;
        self.history.push(action);
        self.to_move = action.player.opponent();

        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        outcome
    }
}

/// Wire form of a [`GameSession`] before validation.
#[derive(Deserialize)]
struct SessionSnapshot {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

/// Why a session snapshot was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SnapshotError {
    /// A recorded move could not have been played at that point.
    #[display("Move {} in history is illegal: {}", _0, _1)]
    IllegalMove(usize, MoveError),

    /// Two consecutive moves by the same player.
    #[display("Move {} in history is out of turn", _0)]
    OutOfTurn(usize),

    /// The board differs from the replayed history.
    #[display("Board {} does not match history (expected {})", found, expected)]
    BoardMismatch {
        /// Board in the snapshot.
        found: String,
        /// Board produced by replaying the history.
        expected: String,
    },

    /// The next player does not follow the last recorded move.
    #[display("Expected {} to move after the last recorded move", _0)]
    WrongTurn(Player),
}

impl std::error::Error for SnapshotError {}

impl TryFrom<SessionSnapshot> for GameSession {
    type Error = SnapshotError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        let mut board = Board::new();
        for (n, action) in snapshot.history.iter().enumerate() {
            if n > 0 && snapshot.history[n - 1].player == action.player {
                return Err(SnapshotError::OutOfTurn(n));
            }
            let outcome = evaluate(&board);
            if outcome.is_terminal() {
                return Err(SnapshotError::IllegalMove(
                    n,
                    InvalidMove::GameOver(outcome).into(),
                ));
            }
            if action.index >= BOARD_SIZE {
                return Err(SnapshotError::IllegalMove(
                    n,
                    InvalidMove::OutOfBounds(action.index).into(),
                ));
            }
            if !board.is_empty(action.index) {
                return Err(SnapshotError::IllegalMove(
                    n,
                    InvalidMove::SquareOccupied(action.index).into(),
                ));
            }
            board = board.with(action.index, action.player);
        }

        if board != snapshot.board {
            return Err(SnapshotError::BoardMismatch {
                found: snapshot.board.notation(),
                expected: board.notation(),
            });
        }
        if let Some(last) = snapshot.history.last() {
            let expected = last.player.opponent();
            if snapshot.to_move != expected {
                return Err(SnapshotError::WrongTurn(expected));
            }
        }

        Ok(Self {
            board: snapshot.board,
            to_move: snapshot.to_move,
            history: snapshot.history,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Player::Human)
    }
}
