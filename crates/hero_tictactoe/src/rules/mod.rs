//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Nothing here holds state between
//! calls; the outcome is always derived from the board it is handed.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_winner, completed_line};

use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Outcome of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A player completed a line.
    Win(Player),
    /// Board full with no completed line.
    Draw,
}

impl Outcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Evaluates a board.
///
/// Lines are scanned rows first, then columns, then diagonals; on a board
/// with several completed lines the first one in that order decides.
#[instrument(skip(board), fields(board = %board.notation()))]
pub fn evaluate(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Win(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    };
    trace!(?outcome, "Evaluated board");
    outcome
}

/// The line that decided a win, for highlighting.
pub fn winning_line(board: &Board) -> Option<Line> {
    completed_line(board).map(|(line, _)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        let board: Board = "XO.......".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_win_and_line() {
        let board: Board = "X.OXO.X..".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::Human));
        assert_eq!(winning_line(&board), Some(Line::LeftColumn));
    }

    #[test]
    fn test_evaluate_draw() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Draw);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board: Board = "OOOXXOXXO".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::Win(Player::Opponent));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Win(Player::Human).winner(), Some(Player::Human));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
