//! The rule variants and their catalogue.
//!
//! Every variant pairs a [`Board`] with a [`ConsolePlay`] policy. Boards
//! use `char` cells and [`EMPTY`] as the empty marker.

mod classic;
mod connect_four;
mod diamond;
mod five_by_five;
mod infinity;
mod memory;
mod misere;
mod numeric;
mod obstacles;
mod pyramid;
mod sliding;
mod sus;
mod ultimate;
mod word;

pub use classic::ClassicBoard;
pub use connect_four::ConnectFourBoard;
pub use diamond::DiamondBoard;
pub use five_by_five::FiveByFiveBoard;
pub use infinity::InfinityBoard;
pub use memory::MemoryBoard;
pub use misere::MisereBoard;
pub use numeric::NumericBoard;
pub use obstacles::ObstaclesBoard;
pub use pyramid::PyramidBoard;
pub use sliding::SlidingBoard;
pub use sus::SusBoard;
pub use ultimate::UltimateBoard;
pub use word::{Dictionary, DictionaryError, WordBoard};

use crate::framework::{Grid, Move};
use crate::ui::ConsolePlay;
use serde::{Deserialize, Serialize};

/// Empty marker shared by every variant.
pub const EMPTY: char = '.';

/// Every playable rule set, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Three in a row on 3×3.
    Classic,
    /// Completing your own line loses.
    Misere,
    /// Marks expire after three per symbol.
    Infinity,
    /// Spell a dictionary word along a line.
    Word,
    /// Random obstacles on 6×6, four in a row.
    Obstacles,
    /// Odd against even, lines summing to 15.
    Numeric,
    /// Score `SUS` lines.
    Sus,
    /// Slide tokens on 4×4.
    Sliding,
    /// Count three-in-a-row sequences on 5×5.
    FiveByFive,
    /// Classic with hidden marks.
    Memory,
    /// Diamond-shaped grid needing a 3-line and a 4-line.
    Diamond,
    /// Pyramid-shaped grid.
    Pyramid,
    /// Gravity, four in a row.
    ConnectFour,
    /// 3×3 of 3×3 sub-boards.
    Ultimate,
}

impl Variant {
    /// Banner shown in the menu and at match start.
    pub fn title(self) -> &'static str {
        match self {
            Variant::Classic => ClassicBoard::TITLE,
            Variant::Misere => MisereBoard::TITLE,
            Variant::Infinity => InfinityBoard::TITLE,
            Variant::Word => WordBoard::TITLE,
            Variant::Obstacles => ObstaclesBoard::TITLE,
            Variant::Numeric => NumericBoard::TITLE,
            Variant::Sus => SusBoard::TITLE,
            Variant::Sliding => SlidingBoard::TITLE,
            Variant::FiveByFive => FiveByFiveBoard::TITLE,
            Variant::Memory => MemoryBoard::TITLE,
            Variant::Diamond => DiamondBoard::TITLE,
            Variant::Pyramid => PyramidBoard::TITLE,
            Variant::ConnectFour => ConnectFourBoard::TITLE,
            Variant::Ultimate => UltimateBoard::TITLE,
        }
    }
}

/// Applies a placement, or an undo when the move carries the erase sentinel.
pub(crate) fn place_or_erase(grid: &mut Grid<char>, mv: &Move<char>) -> bool {
    if mv.is_erase() {
        grid.erase(mv.row(), mv.col())
    } else {
        grid.place(mv.row(), mv.col(), mv.symbol())
    }
}

/// The symbol of the other slot.
pub(crate) fn opponent(symbols: [char; 2], symbol: char) -> char {
    if symbol == symbols[0] {
        symbols[1]
    } else {
        symbols[0]
    }
}
