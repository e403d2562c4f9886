//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight winning index-triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Indices 0, 1, 2.
    TopRow,
    /// Indices 3, 4, 5.
    MiddleRow,
    /// Indices 6, 7, 8.
    BottomRow,
    /// Indices 0, 3, 6.
    LeftColumn,
    /// Indices 1, 4, 7.
    CenterColumn,
    /// Indices 2, 5, 8.
    RightColumn,
    /// Indices 0, 4, 8.
    Diagonal,
    /// Indices 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Every line in scan order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::CenterColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// Board indices covered by this line.
    pub fn indices(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Line::TopRow => "top row",
            Line::MiddleRow => "middle row",
            Line::BottomRow => "bottom row",
            Line::LeftColumn => "left column",
            Line::CenterColumn => "center column",
            Line::RightColumn => "right column",
            Line::Diagonal => "diagonal",
            Line::AntiDiagonal => "anti-diagonal",
        }
    }

    /// Returns the player holding all three squares of this line.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.indices();
        let sq = board.get(a)?;
        if sq != Square::Empty && Some(sq) == board.get(b) && Some(sq) == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Returns the first completed line in [`Line::ALL`] order and its owner.
#[instrument(skip(board))]
pub fn completed_line(board: &Board) -> Option<(Line, Player)> {
    Line::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    completed_line(board).map(|(_, player)| player)
}
