//! Interaction contract between a match and the outside world.
//!
//! The board and manager never perform I/O; everything that prompts,
//! reads, renders or rolls dice for a computer player lives here.

mod console;
mod input;
mod render;
mod rng;

pub use console::{Console, ConsolePlay, ConsoleUi};
pub use input::{InputSource, LineInput};
pub use render::{render_grid, render_masked};
pub use rng::MatchRng;

use crate::framework::{Board, Move, Player, PlayerKind};
use derive_more::{Display, Error, From};
use tracing::{info, instrument};

/// Static configuration of a UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiSettings {
    /// Banner shown at the start of a match.
    pub title: String,
    /// Number of player slots configured by `setup_players`.
    pub player_slots: usize,
    /// Rendering width of one cell.
    pub cell_width: usize,
    /// Render occupied cells as `#` instead of their mark.
    pub hidden: bool,
}

impl UiSettings {
    /// Creates settings.
    #[instrument(skip(title), fields(title = %title.as_ref()))]
    pub fn new(title: impl AsRef<str>, player_slots: usize, cell_width: usize, hidden: bool) -> Self {
        Self {
            title: title.as_ref().to_string(),
            player_slots,
            cell_width,
            hidden,
        }
    }
}

/// Failures that end interaction with the outside world.
///
/// Malformed human input is not an error; it is re-prompted.
#[derive(Debug, Display, Error, From)]
pub enum UiError {
    /// The input source has no more lines.
    #[display("Input closed before a move was entered")]
    InputClosed,

    /// Reading input or writing output failed.
    #[display("Console I/O failed: {}", _0)]
    #[from]
    Io(#[error(source)] std::io::Error),

    /// A computer player had nothing to choose from.
    #[display("No candidate moves for {}", _0)]
    NoCandidateMoves(#[error(not(source))] String),
}

/// Interaction policy for one variant.
pub trait GameUi<B: Board> {
    /// Static configuration.
    fn settings(&self) -> &UiSettings;

    /// Builds both players, assigning the variant's symbols.
    fn setup_players(&mut self) -> Result<[Player<B::Cell>; 2], UiError>;

    /// Builds and announces one player. Any combination is accepted.
    fn create_player(&mut self, name: &str, symbol: B::Cell, kind: PlayerKind) -> Player<B::Cell> {
        info!(name, %symbol, %kind, "Creating player");
        Player::new(name, symbol, kind)
    }

    /// Produces a structurally valid move for `player` on `board`.
    ///
    /// The move may still be refused by [`Board::update_board`], in which
    /// case the manager asks again.
    fn get_move(&mut self, player: &Player<B::Cell>, board: &B) -> Result<Move<B::Cell>, UiError>;

    /// Renders a board snapshot.
    fn display_board_matrix(&mut self, matrix: &[Vec<B::Cell>]) -> Result<(), UiError>;

    /// Shows a message such as the final result.
    fn announce(&mut self, message: &str) -> Result<(), UiError>;
}
