//! Tests for the engine operations on hand-built boards.

use hero_tictactoe::{
    Board, InvalidMove, Line, MoveError, Outcome, Player, Tactic, choose_opponent_index,
    choose_opponent_move, evaluate, human_move, opponent_move, winning_line,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn board(notation: &str) -> Board {
    notation.parse().expect("valid board notation")
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

#[test]
fn test_opponent_takes_immediate_win() {
    let before = board("OO.XX....");
    let after = opponent_move(&before, &mut rng()).expect("opponent can move");
    assert_eq!(after.notation(), "OOOXX....");
    assert_eq!(evaluate(&after), Outcome::Win(Player::Opponent));
    assert_eq!(winning_line(&after), Some(Line::TopRow));
}

#[test]
fn test_opponent_blocks_row() {
    let after = opponent_move(&board("XX.O....."), &mut rng()).expect("opponent can move");
    assert_eq!(after.notation(), "XXOO.....");
}

#[test]
fn test_double_threat_blocks_lowest_index() {
    // X threatens index 2 (top row) and index 6 (left column).
    let before = board("XX.X.O.O.");
    let choice = choose_opponent_move(&before, &mut rng()).expect("opponent can move");
    assert_eq!(choice.tactic, Tactic::Block);
    assert_eq!(choice.index, 2);
}

#[test]
fn test_lowest_winning_index_preferred() {
    // O can win at 2 (top row) or at 6 (left column).
    let before = board("OO.O...XX");
    let choice = choose_opponent_move(&before, &mut rng()).expect("opponent can move");
    assert_eq!(choice.tactic, Tactic::Win);
    assert_eq!(choice.index, 2);
}

#[test]
fn test_opponent_takes_center_when_no_threats() {
    let after = opponent_move(&board("X........"), &mut rng()).expect("opponent can move");
    assert_eq!(after.notation(), "X...O....");
}

#[test]
fn test_random_move_is_deterministic_for_a_seed() {
    let before = board("X...O...X");
    let first = opponent_move(&before, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    let second = opponent_move(&before, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.empty_indices().len(), before.empty_indices().len() - 1);
}

#[test]
fn test_terminal_board_locks_both_players() {
    let won = board("XXXOO....");
    assert_eq!(
        human_move(&won, 5),
        Err(MoveError::InvalidMove(InvalidMove::GameOver(Outcome::Win(
            Player::Human
        ))))
    );
    assert_eq!(opponent_move(&won, &mut rng()), Err(MoveError::NoLegalMove));

    let drawn = board("XOXXOOOXX");
    assert!(human_move(&drawn, 0).unwrap_err().is_invalid_move());
    assert!(opponent_move(&drawn, &mut rng()).unwrap_err().is_no_legal_move());
}

#[test]
fn test_human_move_leaves_other_squares_untouched() {
    let before = board("O...X....");
    let after = human_move(&before, 8).expect("square 8 is free");
    assert_eq!(after.notation(), "O...X...X");
    assert_eq!(before.notation(), "O...X....");
}

#[test]
fn test_error_messages() {
    let err = human_move(&Board::new(), 12).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid move: Position 12 is out of bounds (must be 0-8)"
    );
    assert_eq!(MoveError::NoLegalMove.to_string(), "No legal move available");
}

#[test]
fn test_choose_opponent_index_matches_applied_move() {
    let before = board("XX.O.....");
    assert_eq!(choose_opponent_index(&before, &mut rng()), Ok(2));

    let before = board("X...O...X");
    let index = choose_opponent_index(&before, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    let after = opponent_move(&before, &mut ChaCha8Rng::seed_from_u64(5)).unwrap();
    assert_eq!(after.get(index), Some(hero_tictactoe::Square::Occupied(Player::Opponent)));

    assert_eq!(
        choose_opponent_index(&board("XXXOO...."), &mut rng()),
        Err(MoveError::NoLegalMove)
    );
}
