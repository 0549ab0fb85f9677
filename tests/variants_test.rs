//! Rule checks for the variants and full computer-vs-computer matches.

use grid_games::{
    Board, Coord, Dictionary, FiveByFiveBoard, GameStatus, Hub, HubConfig, HubError, LineInput,
    MisereBoard, Move, Outcome, Player, PlayerKind, SusBoard, UltimateBoard, Variant,
};
use std::io::Cursor;
use std::io::Write as _;
use strum::IntoEnumIterator;

fn player(symbol: char) -> Player<char> {
    Player::new(symbol.to_string(), symbol, PlayerKind::Human)
}

// Scenario: the mover completes their own line in misère.
#[test]
fn test_misere_self_completion_loses_for_mover_and_wins_for_opponent() {
    let (x, o) = (player('X'), player('O'));
    let mut board = MisereBoard::new();
    for (r, c, s) in [(0, 0, 'X'), (1, 0, 'O'), (0, 1, 'X'), (2, 2, 'O'), (0, 2, 'X')] {
        assert!(board.update_board(&Move::new(r, c, s)));
    }
    assert!(board.is_lose(&x));
    assert!(!board.is_win(&x));
    assert!(board.is_win(&o));
    assert!(!board.is_lose(&o));
    assert_eq!(board.status(&x), GameStatus::Lost);
    assert_eq!(board.status(&o), GameStatus::Won);
}

fn win_sub_board(board: &mut UltimateBoard, br: usize, bc: usize, symbol: char) {
    for c in 0..3 {
        assert!(board.update_board(&Move::new(br * 3, bc * 3 + c, symbol)));
    }
}

// Scenario: sub-board wins feed the meta-board, which decides the match.
#[test]
fn test_ultimate_meta_line_wins() {
    let (x, o) = (player('X'), player('O'));
    let mut board = UltimateBoard::new();

    win_sub_board(&mut board, 0, 0, 'X');
    assert_eq!(board.meta().get(0, 0), Some('X'));
    assert!(!board.game_is_over(&x));

    win_sub_board(&mut board, 1, 1, 'X');
    assert!(!board.is_win(&x));
    // O's sub-board win in between does not end the match either.
    win_sub_board(&mut board, 0, 2, 'O');
    assert!(!board.game_is_over(&o));

    win_sub_board(&mut board, 2, 2, 'X');
    assert!(board.is_win(&x));
    assert!(board.is_lose(&o));
    assert!(!board.is_draw(&x));
    assert_eq!(board.meta().move_count(), 4);
}

#[test]
fn test_ultimate_rejects_moves_into_decided_sub_board() {
    let mut board = UltimateBoard::new();
    win_sub_board(&mut board, 2, 0, 'O');
    assert!(!board.update_board(&Move::new(7, 1, 'X')));
    assert!(!board.playable_cells().contains(&Coord::new(8, 2)));
    assert_eq!(board.playable_cells().len(), 81 - 9);
}

fn hub(script: &str, config: HubConfig) -> Hub<LineInput<Cursor<String>>, Vec<u8>> {
    Hub::new(config, LineInput::new(Cursor::new(script.to_string())), Vec::new())
}

fn dictionary_file(words: &[&str]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for word in words {
        writeln!(file, "{}", word).unwrap();
    }
    file
}

#[test]
fn test_every_variant_finishes_between_computers() {
    let dictionary = dictionary_file(&["cat", "dog", "sun", "top", "map"]);
    for variant in Variant::iter() {
        for seed in [1, 7, 42] {
            let config = HubConfig::default()
                .with_seed(Some(seed))
                .with_dictionary(Some(dictionary.path().to_path_buf()));
            let mut hub = hub("A\n2\nB\n2\n", config);
            let outcome = hub
                .play(variant)
                .unwrap_or_else(|e| panic!("{} with seed {} failed: {}", variant, seed, e));
            if let Some(winner) = outcome.winner() {
                assert!(winner < 2);
            }
        }
    }
}

#[test]
fn test_same_seed_same_match() {
    let play = |variant: Variant| {
        let mut hub = hub("A\n2\nB\n2\n", HubConfig::default().with_seed(Some(99)));
        let outcome = hub.play(variant).unwrap();
        (outcome, hub.console().output().clone())
    };
    for variant in [Variant::Obstacles, Variant::Ultimate, Variant::ConnectFour] {
        assert_eq!(play(variant), play(variant));
    }
}

#[test]
fn test_word_needs_its_dictionary() {
    let config = HubConfig::default().with_dictionary(Some("/no/such/words.txt".into()));
    let mut hub = hub("A\n2\nB\n2\n", config);
    let err = hub.play(Variant::Word).unwrap_err();
    assert!(matches!(err, HubError::Dictionary(_)));
}

#[test]
fn test_empty_dictionary_is_rejected() {
    let file = dictionary_file(&["", "  "]);
    assert!(Dictionary::load(file.path()).is_err());
}

#[test]
fn test_word_match_with_scripted_letters() {
    let file = dictionary_file(&["cat"]);
    let config = HubConfig::default().with_dictionary(Some(file.path().to_path_buf()));
    let script = "Ann\n1\nBob\n1\n0 0\nc\n0 1\na\n0 2\nt\n";
    let mut hub = hub(script, config);
    assert_eq!(hub.play(Variant::Word).unwrap(), Outcome::Won(0));
}

fn play_sus(board: &mut SusBoard, moves: &[(usize, usize, char)]) {
    for &(r, c, s) in moves {
        assert!(board.update_board(&Move::new(r, c, s)));
    }
}

#[test]
fn test_sus_result_waits_for_a_full_board() {
    let (s, u) = (player('S'), player('U'));
    let mut board = SusBoard::new();
    play_sus(&mut board, &[(0, 0, 'S'), (0, 1, 'U'), (0, 2, 'S')]);
    assert_eq!(board.score('S'), 1);
    assert_eq!(board.status(&s), GameStatus::InProgress);
    assert_eq!(board.status(&u), GameStatus::InProgress);

    // The remaining U marks complete nothing.
    play_sus(
        &mut board,
        &[(1, 0, 'U'), (1, 1, 'U'), (1, 2, 'U'), (2, 0, 'U'), (2, 1, 'U'), (2, 2, 'U')],
    );
    assert_eq!(board.score('U'), 0);
    assert!(board.is_win(&s));
    assert!(board.is_lose(&u));
    assert!(!board.is_win(&u));
    assert!(!board.is_draw(&u));
    assert_eq!(board.status(&s), GameStatus::Won);
    assert_eq!(board.status(&u), GameStatus::Lost);
}

#[test]
fn test_sus_equal_scores_draw() {
    let (s, u) = (player('S'), player('U'));
    let mut board = SusBoard::new();
    play_sus(
        &mut board,
        &[
            (0, 0, 'S'),
            (0, 1, 'U'),
            (0, 2, 'S'),
            (1, 0, 'S'),
            (1, 1, 'S'),
            (1, 2, 'S'),
            (2, 0, 'S'),
            (2, 2, 'S'),
            (2, 1, 'U'),
        ],
    );
    assert_eq!(board.score('S'), 1);
    assert_eq!(board.score('U'), 1);
    assert_eq!(board.status(&s), GameStatus::Drawn);
    assert_eq!(board.status(&u), GameStatus::Drawn);
}

/// Fills a 5×5 board row by row from text, skipping `.` cells.
fn five_by_five(rows: [&str; 5]) -> FiveByFiveBoard {
    let mut board = FiveByFiveBoard::new();
    for (r, line) in rows.iter().enumerate() {
        for (c, s) in line.chars().enumerate().filter(|&(_, s)| s != '.') {
            assert!(board.update_board(&Move::new(r, c, s)));
        }
    }
    board
}

#[test]
fn test_five_by_five_undecided_before_24_moves() {
    let (x, o) = (player('X'), player('O'));
    let board = five_by_five(["XXXOO", "OOXXO", "XOOXX", "OXXOO", "XOO.."]);
    assert_eq!(board.move_count(), 23);
    assert!(board.sequences('X') > 0);
    assert_eq!(board.status(&x), GameStatus::InProgress);
    assert_eq!(board.status(&o), GameStatus::InProgress);
}

#[test]
fn test_five_by_five_more_sequences_wins() {
    let (x, o) = (player('X'), player('O'));
    let board = five_by_five(["XXXOO", "OOXXO", "XOOXX", "OXXOO", "XOOX."]);
    assert_eq!(board.move_count(), 24);
    assert_eq!(board.sequences('X'), 3);
    assert_eq!(board.sequences('O'), 1);
    assert_eq!(board.status(&x), GameStatus::Won);
    assert_eq!(board.status(&o), GameStatus::Lost);
}

#[test]
fn test_five_by_five_equal_sequences_draw() {
    let (x, o) = (player('X'), player('O'));
    let board = five_by_five(["XXOXO", "OOXOX", "XXOXO", "OOXOX", "XXOO."]);
    assert_eq!(board.sequences('X'), 5);
    assert_eq!(board.sequences('O'), 5);
    assert_eq!(board.status(&x), GameStatus::Drawn);
    assert_eq!(board.status(&o), GameStatus::Drawn);
}
