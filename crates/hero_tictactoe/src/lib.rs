//! Tic-tac-toe engine for the portfolio hero game.
//!
//! The engine is a set of pure functions over a [`Board`]:
//!
//! - [`evaluate`] derives the [`Outcome`]
//! - [`human_move`] places the visitor's mark
//! - [`opponent_move`] plays the computer's reply using a one-ply policy
//!
//! [`GameSession`] wraps those calls for a front end that wants turn order
//! and a terminal lock handled for it.
//!
//! # Example
//!
//! ```
//! use hero_tictactoe::{Board, Outcome, evaluate, human_move, opponent_move};
//! use rand::SeedableRng;
//!
//! # fn main() -> Result<(), hero_tictactoe::MoveError> {
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let board = human_move(&Board::new(), 0)?;
//! let board = opponent_move(&board, &mut rng)?;
//! assert_eq!(board.notation(), "X...O....");
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod position;
mod session;
mod types;

pub mod rules;

pub use action::{InvalidMove, Move, MoveError};
pub use engine::{
    Choice, Tactic, choose_opponent_index, choose_opponent_move, human_move, opponent_move,
};
pub use position::{MIN_PARTIAL_LABEL, Position};
pub use rules::{Line, Outcome, evaluate, winning_line};
pub use session::{GameSession, SnapshotError};
pub use types::{BOARD_SIZE, Board, BoardParseError, CENTER, Player, Square};
