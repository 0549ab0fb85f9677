//! Player identity records.

use super::action::Symbol;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who chooses a player's moves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves are read from the input source.
    Human,
    /// Moves are chosen at random among playable cells.
    Computer,
}

/// A participant in one match.
///
/// The symbol is fixed for the player's lifetime. The board a player acts
/// on is lent alongside the player whenever a move is requested, so a
/// player never owns or stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player<C> {
    name: String,
    symbol: C,
    kind: PlayerKind,
}

impl<C: Symbol> Player<C> {
    /// Creates a player.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, symbol: C, kind: PlayerKind) -> Self {
        Self {
            name: name.as_ref().to_string(),
            symbol,
            kind,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's assigned mark.
    pub fn symbol(&self) -> C {
        self.symbol
    }

    /// Human or computer.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Returns true for computer-controlled players.
    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }
}
