//! Tests for the interactive game loop.

use hero_tictactoe::{Outcome, Player};
use portfolio_hero::{PlayOptions, Scoreboard, run_games, seeded_rng};
use std::time::Duration;

fn options(first: Player) -> PlayOptions {
    PlayOptions {
        first,
        think: Duration::ZERO,
    }
}

async fn play(script: &str, first: Player) -> (Scoreboard, String) {
    let mut input = script.as_bytes();
    let mut out = Vec::new();
    let mut rng = seeded_rng(Some(1));
    let score = run_games(&mut input, &mut out, &mut rng, options(first))
        .await
        .expect("game loop runs");
    (score, String::from_utf8(out).expect("utf-8 output"))
}

#[tokio::test]
async fn test_opponent_wins_scripted_game() {
    // Human: 1, 2, 9. Opponent: center, block at 3, anti-diagonal at 7.
    let (score, out) = play("1\n2\n9\nq\n", Player::Human).await;
    assert_eq!(score.opponent_wins, 1);
    assert_eq!(score.games(), 1);
    assert!(out.contains("Opponent plays Center (center)"));
    assert!(out.contains("Opponent plays Top-right (block)"));
    assert!(out.contains("Opponent wins (anti-diagonal)"));
    assert!(out.contains("Score: You 0 · Opponent 1 · Draws 0"));
}

#[tokio::test]
async fn test_invalid_moves_are_ignored() {
    // "1" twice: second is occupied and silently re-prompted.
    let (score, out) = play("1\n1\nzzz\nq\n", Player::Human).await;
    assert_eq!(score.games(), 0);
    assert!(!out.contains("Invalid move"));
    assert!(out.contains("Pick a cell number from 1 to 9."));
}

#[tokio::test]
async fn test_end_of_input_stops() {
    let (score, out) = play("", Player::Opponent).await;
    assert_eq!(score, Scoreboard::default());
    assert!(out.contains("Opponent is thinking..."));
    assert!(out.contains("O"));
}

#[tokio::test]
async fn test_new_game_after_finish() {
    let (score, out) = play("1\n2\n9\nn\nq\n", Player::Human).await;
    assert_eq!(score.games(), 1);
    assert_eq!(out.matches("[n]ew game or [q]uit").count(), 1);
}

#[test]
fn test_scoreboard_records_outcomes() {
    let mut score = Scoreboard::default();
    score.record(Outcome::Win(Player::Human));
    score.record(Outcome::Draw);
    score.record(Outcome::InProgress);
    assert_eq!(score.games(), 2);
    assert_eq!(score.to_string(), "You 1 · Opponent 0 · Draws 1");
}

#[tokio::test]
async fn test_stray_letter_reprompts_without_moving() {
    let (score, out) = play("n\nq\n", Player::Human).await;
    assert_eq!(score.games(), 0);
    assert!(out.contains("Pick a cell number from 1 to 9."));
    assert!(!out.contains("Opponent is thinking..."));
}
