//! Grid Games library - two-player grid games in the tic-tac-toe family
//!
//! A small generic core drives fourteen rule variants through one turn
//! loop.
//!
//! # Architecture
//!
//! - **Framework**: `Board` contract, `Player`, `Move` and the `GameManager` turn loop
//! - **UI**: the `GameUi` contract, injected input, seeded randomness and console rendering
//! - **Games**: one board per rule variant plus its console policy
//! - **Hub**: variant menu and match setup
//!
//! # Example
//!
//! ```no_run
//! use grid_games::{ClassicBoard, ConsoleUi, GameManager, GameUi, LineInput, MatchRng};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut board = ClassicBoard::new();
//! let input = LineInput::new(std::io::stdin().lock());
//! let mut ui = ConsoleUi::<ClassicBoard, _, _>::new(input, std::io::stdout(), MatchRng::new(7));
//! let players = ui.setup_players()?;
//! let outcome = GameManager::new(&mut board, &players, &mut ui).run()?;
//! println!("{:?}", outcome);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Module declarations
pub mod cli;
pub mod config;
pub mod framework;
pub mod games;
pub mod hub;
pub mod ui;

// Crate-level exports - Framework
pub use framework::{Board, Coord, GameManager, GameStatus, Grid, Move, Outcome, Player, PlayerKind, Symbol};

// Crate-level exports - UI
pub use ui::{
    Console, ConsolePlay, ConsoleUi, GameUi, InputSource, LineInput, MatchRng, UiError, UiSettings,
};

// Crate-level exports - Games
pub use games::{
    ClassicBoard, ConnectFourBoard, DiamondBoard, Dictionary, DictionaryError, FiveByFiveBoard,
    InfinityBoard, MemoryBoard, MisereBoard, NumericBoard, ObstaclesBoard, PyramidBoard,
    SlidingBoard, SusBoard, UltimateBoard, Variant, WordBoard,
};

// Crate-level exports - Hub and configuration
pub use config::{ConfigError, HubConfig};
pub use hub::{Hub, HubError, MenuChoice, parse_menu_choice};
