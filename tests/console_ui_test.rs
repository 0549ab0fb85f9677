//! Console UI behavior for individual variants.

use grid_games::{
    Board, ClassicBoard, ConnectFourBoard, ConsolePlay, ConsoleUi, GameUi, LineInput, MatchRng,
    MisereBoard, Move, NumericBoard, Player, PlayerKind, SlidingBoard, SusBoard, UiError, UiSettings,
};
use grid_games::ui::Console;
use std::io::Cursor;

fn console(script: &str) -> Console<LineInput<Cursor<String>>, Vec<u8>> {
    Console::new(LineInput::new(Cursor::new(script.to_string())), Vec::new())
}

fn human(symbol: char) -> Player<char> {
    Player::new("Hu", symbol, PlayerKind::Human)
}

#[test]
fn test_default_human_move_reads_row_and_column() {
    let board = ClassicBoard::new();
    let mut console = console("2 1\n");
    let mv = board.human_move(&mut console, &human('X')).unwrap();
    assert_eq!(mv, Move::new(2, 1, 'X'));
}

#[test]
fn test_connect_four_asks_for_a_column() {
    let mut board = ConnectFourBoard::new();
    for _ in 0..6 {
        let row = board.landing_row(0).unwrap();
        assert!(board.update_board(&Move::new(row, 0, if row % 2 == 0 { 'X' } else { 'O' })));
    }
    let mut console = console("0\n9\n4\n");
    let mv = board.human_move(&mut console, &human('X')).unwrap();
    assert_eq!(mv, Move::new(5, 4, 'X'));
    let (_, out) = console.into_parts();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("column is full"));
    assert!(text.contains("Out of range"));
}

#[test]
fn test_misere_human_confirms_losing_move() {
    let mut board = MisereBoard::new();
    for (r, c, s) in [(0, 0, 'X'), (1, 0, 'O'), (0, 1, 'X'), (1, 1, 'O')] {
        assert!(board.update_board(&Move::new(r, c, s)));
    }
    let mut console = console("0 2\nn\n2 2\n");
    let mv = board.human_move(&mut console, &human('X')).unwrap();
    assert_eq!(mv.target(), grid_games::Coord::new(2, 2));

    let mut console = self::console("0 2\ny\n");
    let mv = board.human_move(&mut console, &human('X')).unwrap();
    assert_eq!(mv.target(), grid_games::Coord::new(0, 2));
}

#[test]
fn test_numeric_human_picks_an_available_number() {
    let board = NumericBoard::new();
    let mut console = console("1 1\n4\n5\n");
    let mv = board.human_move(&mut console, &human('O')).unwrap();
    assert_eq!(mv, Move::new(1, 1, '5'));
}

#[test]
fn test_sliding_human_enters_source_and_destination() {
    let board = SlidingBoard::new();
    let mut console = console("0 1\n1 1\n");
    let mv = board.human_move(&mut console, &human('X')).unwrap();
    assert_eq!(mv.from(), Some(grid_games::Coord::new(0, 1)));
    assert_eq!(mv.target(), grid_games::Coord::new(1, 1));
}

#[test]
fn test_variant_symbols_are_assigned_by_slot() {
    let mut ui = ConsoleUi::<SusBoard, _, _>::new(
        LineInput::new(Cursor::new("S-player\n2\nU-player\n1\n".to_string())),
        Vec::new(),
        MatchRng::new(0),
    );
    let players = ui.setup_players().unwrap();
    assert_eq!(players[0].symbol(), 'S');
    assert!(players[0].is_computer());
    assert_eq!(players[1].symbol(), 'U');
    assert_eq!(players[1].kind(), PlayerKind::Human);
}

#[test]
fn test_blank_name_falls_back_to_slot_label() {
    let mut ui = ConsoleUi::<NumericBoard, _, _>::new(
        LineInput::new(Cursor::new("\n1\n\n2\n".to_string())),
        Vec::new(),
        MatchRng::new(0),
    );
    let players = ui.setup_players().unwrap();
    assert_eq!(players[0].name(), "Player 1");
    assert_eq!(players[0].symbol(), 'O');
    assert_eq!(players[1].name(), "Player 2");
}

#[test]
fn test_single_slot_adds_a_computer_opponent() {
    let settings = UiSettings::new("solo", 1, 3, false);
    let mut ui = ConsoleUi::<ClassicBoard, _, _>::with_settings(
        settings,
        LineInput::new(Cursor::new("Solo\n1\n".to_string())),
        Vec::new(),
        MatchRng::new(0),
    );
    let players = ui.setup_players().unwrap();
    assert_eq!(players[0].name(), "Solo");
    assert!(players[1].is_computer());
}

#[test]
fn test_computer_without_candidates_is_an_error() {
    let mut board = ClassicBoard::new();
    for (r, row) in ["XOX", "XOO", "OXX"].iter().enumerate() {
        for (c, s) in row.chars().enumerate() {
            assert!(board.update_board(&Move::new(r, c, s)));
        }
    }
    let mut ui = ConsoleUi::<ClassicBoard, _, _>::new(
        LineInput::new(Cursor::new(String::new())),
        Vec::new(),
        MatchRng::new(0),
    );
    let cpu = Player::new("Cpu", 'X', PlayerKind::Computer);
    let result = ui.get_move(&cpu, &board);
    assert!(matches!(result, Err(UiError::NoCandidateMoves(name)) if name == "Cpu"));
}

#[test]
fn test_computer_moves_stay_on_playable_cells() {
    let board = ConnectFourBoard::new();
    let mut rng = MatchRng::new(11);
    let cpu = Player::new("Cpu", 'O', PlayerKind::Computer);
    for _ in 0..30 {
        let mv = board.computer_move(&mut rng, &cpu).unwrap();
        assert_eq!(mv.row(), 5);
    }
}
