//! Named board positions for front ends.

use super::types::Board;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Shortest input accepted as a partial label.
pub const MIN_PARTIAL_LABEL: usize = 3;

/// A position on the tic-tac-toe board (0-8).
///
/// The engine itself works on raw indices; this enum gives front ends
/// labels to show and to parse from typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a label or a 1-based cell number (as shown by [`Board::display`]).
    ///
    /// Labels match case-insensitively; an exact label wins over a partial
    /// one so that `center` does not resolve to `Top-center`. A partial
    /// label needs at least [`MIN_PARTIAL_LABEL`] characters and must match
    /// exactly one position.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let s_lower = s.to_lowercase();
        if let Some(exact) = Self::iter().find(|pos| pos.label().to_lowercase() == s_lower) {
            return Some(exact);
        }
        if s_lower.chars().count() < MIN_PARTIAL_LABEL {
            return None;
        }

        let mut partial =
            Self::iter().filter(|pos| pos.label().to_lowercase().contains(&s_lower));
        match (partial.next(), partial.next()) {
            (Some(pos), None) => Some(pos),
            _ => None,
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Positions whose squares are still empty.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::iter()
            .filter(|pos| board.is_empty(pos.to_index()))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
