//! One-shot board analysis.

use hero_tictactoe::{
    Board, Choice, Line, Outcome, Position, choose_opponent_move, evaluate, winning_line,
};
use rand::Rng;
use serde::Serialize;
use tracing::instrument;

/// Everything the engine says about a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Evaluated outcome.
    pub outcome: Outcome,
    /// Completed line on a win.
    pub winning_line: Option<Line>,
    /// Empty indices (0-8).
    pub empty: Vec<usize>,
    /// What the opponent would play, if it can move.
    pub opponent: Option<Choice>,
}

/// Analyzes `board`, drawing on `rng` only if the opponent falls back to a
/// random square.
#[instrument(skip(board, rng), fields(board = %board.notation()))]
pub fn analyze<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Analysis {
    Analysis {
        board: board.notation(),
        outcome: evaluate(board),
        winning_line: winning_line(board),
        empty: board.empty_indices(),
        opponent: choose_opponent_move(board, rng).ok(),
    }
}

impl Analysis {
    /// Human-readable report, with the board drawn from `board`.
    pub fn render(&self, board: &Board) -> String {
        let mut report = format!("{}\n\nOutcome: {}\n", board.display(), self.outcome);
        if let Some(line) = self.winning_line {
            report.push_str(&format!("Winning line: {}\n", line));
        }
        match self.opponent {
            Some(choice) => {
                let label = Position::from_index(choice.index)
                    .map(|pos| pos.label())
                    .unwrap_or("?");
                report.push_str(&format!(
                    "Opponent would play: {} (cell {}, {})\n",
                    label,
                    choice.index + 1,
                    choice.tactic
                ));
            }
            None => report.push_str("Opponent has no legal move\n"),
        }
        report
    }
}
