//! Tests for board analysis reports.

use hero_tictactoe::{Board, Line, Outcome, Player, Tactic};
use portfolio_hero::{analyze, seeded_rng};

#[test]
fn test_analysis_of_winning_chance() {
    let board: Board = "OO.XX....".parse().unwrap();
    let report = analyze(&board, &mut seeded_rng(Some(0)));
    assert_eq!(report.outcome, Outcome::InProgress);
    assert_eq!(report.empty, vec![2, 5, 6, 7, 8]);
    let choice = report.opponent.expect("opponent can move");
    assert_eq!((choice.index, choice.tactic), (2, Tactic::Win));
    assert!(report.render(&board).contains("Opponent would play: Top-right (cell 3, win)"));
}

#[test]
fn test_analysis_of_finished_board() {
    let board: Board = "XXXOO....".parse().unwrap();
    let report = analyze(&board, &mut seeded_rng(Some(0)));
    assert_eq!(report.outcome, Outcome::Win(Player::Human));
    assert_eq!(report.winning_line, Some(Line::TopRow));
    assert_eq!(report.opponent, None);

    let text = report.render(&board);
    assert!(text.contains("Winning line: top row"));
    assert!(text.contains("Opponent has no legal move"));
}

#[test]
fn test_analysis_json() {
    let board: Board = ".........".parse().unwrap();
    let report = analyze(&board, &mut seeded_rng(Some(0)));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["board"], ".........");
    assert_eq!(json["outcome"], "InProgress");
    assert_eq!(json["opponent"]["index"], 4);
    assert_eq!(json["opponent"]["tactic"], "Center");
}
