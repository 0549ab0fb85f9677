//! Menu loop behavior.

use grid_games::{Hub, HubConfig, LineInput};
use std::io::Cursor;

fn run(script: &str, config: HubConfig) -> String {
    let mut hub = Hub::new(config, LineInput::new(Cursor::new(script.to_string())), Vec::new());
    hub.run_menu().unwrap();
    String::from_utf8(hub.console().output().clone()).unwrap()
}

#[test]
fn test_zero_quits() {
    let text = run("0\n", HubConfig::default());
    assert!(text.contains("1- Classic Tic-Tac-Toe"));
    assert!(text.contains("14- Ultimate Tic-Tac-Toe"));
    assert!(text.contains("Goodbye!"));
}

#[test]
fn test_invalid_choice_shows_menu_again() {
    let text = run("42\nq\n", HubConfig::default());
    assert!(text.contains("Invalid Option"));
    assert_eq!(text.matches("Welcome to Game Hub").count(), 2);
}

#[test]
fn test_plays_a_match_then_returns_to_menu() {
    let text = run("1\nA\n2\nB\n2\n0\n", HubConfig::default().with_seed(Some(5)));
    assert!(text.contains("Classic Tic-Tac-Toe"));
    assert!(text.contains("wins!") || text.contains("It's a draw!"));
    assert_eq!(text.matches("Welcome to Game Hub").count(), 2);
}

#[test]
fn test_missing_dictionary_returns_to_menu() {
    let config = HubConfig::default().with_dictionary(Some("/no/such/dic.txt".into()));
    let text = run("4\n0\n", config);
    assert!(text.contains("Cannot start Word Tic-Tac-Toe"));
    assert!(text.contains("Goodbye!"));
}

#[test]
fn test_end_of_input_leaves_quietly() {
    let text = run("", HubConfig::default());
    assert!(text.contains("Choose a game: "));
}
