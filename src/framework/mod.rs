//! Generic two-player grid game core.
//!
//! A [`Board`] owns the grid and answers terminal-state questions, a
//! [`Player`] is an identity record, and [`GameManager`] drives one match
//! through any [`GameUi`](crate::ui::GameUi).

mod action;
mod board;
mod grid;
pub mod lines;
mod manager;
mod player;

pub use action::{Coord, Move, Symbol};
pub use board::{Board, GameStatus};
pub use grid::Grid;
pub use manager::{GameManager, Outcome};
pub use player::{Player, PlayerKind};
