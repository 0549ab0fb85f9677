//! Turn loop driving one match to a terminal outcome.

use super::board::Board;
use super::player::Player;
use crate::ui::{GameUi, UiError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// How a match ended, indexed by player slot.
///
/// The index names the player whose terminal check ended the match,
/// which is always the player who moved last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mover won.
    Won(usize),
    /// The mover lost, so the other player won.
    Lost(usize),
    /// Nobody won.
    Drawn,
}

impl Outcome {
    /// Slot of the winning player, if any.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Outcome::Won(i) => Some(*i),
            Outcome::Lost(i) => Some(1 - *i),
            Outcome::Drawn => None,
        }
    }

    /// Returns true if the match was drawn.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Drawn)
    }

    /// Announcement text using the players' names.
    pub fn describe<C>(&self, players: &[Player<C>; 2]) -> String
    where
        C: super::action::Symbol,
    {
        match *self {
            Outcome::Won(i) => format!("{} wins!", players[i].name()),
            Outcome::Lost(i) => format!(
                "{} loses. {} wins!",
                players[i].name(),
                players[1 - i].name()
            ),
            Outcome::Drawn => "It's a draw!".to_string(),
        }
    }
}

/// Orchestrates one match between two players on one board.
///
/// The manager borrows everything it drives; building and dropping the
/// board, players and UI is the caller's job.
pub struct GameManager<'m, B, U>
where
    B: Board,
    U: GameUi<B>,
{
    board: &'m mut B,
    players: &'m [Player<B::Cell>; 2],
    ui: &'m mut U,
    current: usize,
    turns: usize,
    rejected: usize,
}

impl<'m, B, U> GameManager<'m, B, U>
where
    B: Board,
    U: GameUi<B>,
{
    /// Creates a manager with player 0 to move.
    pub fn new(board: &'m mut B, players: &'m [Player<B::Cell>; 2], ui: &'m mut U) -> Self {
        Self {
            board,
            players,
            ui,
            current: 0,
            turns: 0,
            rejected: 0,
        }
    }

    /// Slot of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player<B::Cell> {
        &self.players[self.current]
    }

    /// Accepted moves so far.
    pub fn turns_played(&self) -> usize {
        self.turns
    }

    /// Moves the board refused so far.
    pub fn rejected_moves(&self) -> usize {
        self.rejected
    }

    /// Read access to the board being played.
    pub fn board(&self) -> &B {
        self.board
    }

    /// Runs the match until a terminal state.
    ///
    /// A rejected move is discarded and the same player is asked again;
    /// the turn only passes after an accepted, non-terminal move.
    #[instrument(skip(self), fields(title = %self.ui.settings().title))]
    pub fn run(&mut self) -> Result<Outcome, UiError> {
        info!(
            player_0 = %self.players[0].name(),
            player_1 = %self.players[1].name(),
            "Match started"
        );
        self.ui.display_board_matrix(&self.board.board_matrix())?;

        let players = self.players;
        loop {
            let player = &players[self.current];
            let mv = self.ui.get_move(player, self.board)?;

            if !self.board.update_board(&mv) {
                self.rejected += 1;
                warn!(player = %player.name(), %mv, "Move rejected");
                continue;
            }
            self.turns += 1;
            debug!(player = %player.name(), %mv, turn = self.turns, "Move applied");

            self.ui.display_board_matrix(&self.board.board_matrix())?;

            if self.board.game_is_over(player) {
                let outcome = self.resolve(player);
                info!(?outcome, turns = self.turns, rejected = self.rejected, "Match over");
                self.ui.announce(&outcome.describe(players))?;
                return Ok(outcome);
            }

            self.current = 1 - self.current;
        }
    }

    /// Fixed precedence: win, then lose, then draw.
    fn resolve(&self, player: &Player<B::Cell>) -> Outcome {
        if self.board.is_win(player) {
            Outcome::Won(self.current)
        } else if self.board.is_lose(player) {
            Outcome::Lost(self.current)
        } else {
            Outcome::Drawn
        }
    }
}
