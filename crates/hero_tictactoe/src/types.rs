//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// Index of the center square.
pub const CENTER: usize = 4;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The visitor clicking cells.
    Human,
    /// The computer opponent.
    Opponent,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Opponent,
            Player::Opponent => Player::Human,
        }
    }

    /// Mark drawn for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Opponent => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Opponent => write!(f, "Opponent"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values: engine operations take one and hand back
/// a new one rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Creates a board from explicit squares.
    pub fn from_squares(squares: [Square; BOARD_SIZE]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Indices of empty squares in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..BOARD_SIZE).filter(|&i| self.is_empty(i)).collect()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns a copy of this board with `player` placed at `index`.
    ///
    /// Callers must have validated the index and that the square is empty.
    pub(crate) fn with(mut self, index: usize, player: Player) -> Self {
        self.squares[index] = Square::Occupied(player);
        self
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => char::from_digit(pos as u32 + 1, 10).unwrap_or('?'),
                    Square::Occupied(player) => player.mark(),
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }

    /// Compact notation accepted by [`FromStr`], e.g. `OO.XX....`.
    pub fn notation(&self) -> String {
        self.squares
            .iter()
            .map(|s| match s {
                Square::Empty => '.',
                Square::Occupied(player) => player.mark(),
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Error parsing board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A cell symbol was not recognised.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses `X` (human), `O` (opponent) and `.`, `_` or `-` (empty).
    /// Whitespace and `|` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c.to_ascii_uppercase() {
                'X' => Ok(Square::Occupied(Player::Human)),
                'O' => Ok(Square::Occupied(Player::Opponent)),
                '.' | '_' | '-' => Ok(Square::Empty),
                other => Err(BoardParseError::UnknownSymbol(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; BOARD_SIZE] = cells
            .as_slice()
            .try_into()
            .map_err(|_| BoardParseError::WrongLength(cells.len()))?;

        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_indices().len(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_out_of_range_is_not_empty() {
        let board = Board::new();
        assert!(!board.is_empty(9));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_parse_notation() {
        let board: Board = "OO.|XX.|...".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::Opponent)));
        assert_eq!(board.get(3), Some(Square::Occupied(Player::Human)));
        assert_eq!(board.empty_indices(), vec![2, 5, 6, 7, 8]);
        assert_eq!(board.notation(), "OO.XX....");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
        assert_eq!(
            "XO.XO.XO?".parse::<Board>(),
            Err(BoardParseError::UnknownSymbol('?'))
        );
    }

    #[test]
    fn test_display_shows_cell_numbers() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
