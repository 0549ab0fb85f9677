//! Word: spell a dictionary word along a line.

use super::{EMPTY, place_or_erase};
use crate::framework::lines::{Line, segments};
use crate::framework::{Board, Grid, Move, Player};
use crate::ui::{Console, ConsolePlay, InputSource, MatchRng, UiError};
use derive_more::{Display, Error};
use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
// Dictionary
// ─────────────────────────────────────────────────────────────

/// Failure to obtain the word list.
#[derive(Debug, Display, Error)]
pub enum DictionaryError {
    /// The file could not be read.
    #[display("Cannot read dictionary {}: {}", path.display(), source)]
    Unreadable {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[error(source)]
        source: std::io::Error,
    },

    /// The file held no words.
    #[display("Dictionary {} contains no words", _0.display())]
    Empty(#[error(not(source))] PathBuf),
}

/// Upper-cased word set loaded once per match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads a newline-delimited word list.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            warn!(error = %source, "Dictionary unavailable");
            DictionaryError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;
        let dictionary = Self::from_words(content.lines());
        if dictionary.is_empty() {
            return Err(DictionaryError::Empty(path.to_path_buf()));
        }
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Builds a dictionary from words, ignoring blanks and case.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Exact, case-insensitive lookup.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true when there are no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────
// Board
// ─────────────────────────────────────────────────────────────

/// Placeholder symbol both players share.
pub const SHARED_SYMBOL: char = '-';

/// 3×3 board of letters.
#[derive(Debug, Clone)]
pub struct WordBoard {
    grid: Grid<char>,
    dictionary: Dictionary,
    lines: Vec<Line>,
}

impl WordBoard {
    /// Creates an empty board checking lines against `dictionary`.
    #[instrument(skip(dictionary), fields(words = dictionary.len()))]
    pub fn new(dictionary: Dictionary) -> Self {
        let grid = Grid::new(3, 3, EMPTY);
        let lines = segments(&grid, 3, |_| true);
        Self {
            grid,
            dictionary,
            lines,
        }
    }

    /// Every complete line reading as a word in either direction.
    pub fn spelled_words(&self) -> Vec<String> {
        self.lines
            .iter()
            .filter_map(|line| line.contents(&self.grid))
            .filter(|cells| cells.iter().all(|&c| c != EMPTY))
            .filter_map(|cells| {
                let forward: String = cells.iter().collect();
                let backward: String = cells.iter().rev().collect();
                if self.dictionary.contains(&forward) {
                    Some(forward)
                } else if self.dictionary.contains(&backward) {
                    Some(backward)
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Board for WordBoard {
    type Cell = char;

    fn grid(&self) -> &Grid<char> {
        &self.grid
    }

    fn update_board(&mut self, mv: &Move<char>) -> bool {
        if !mv.is_erase() && !mv.symbol().is_ascii_alphabetic() {
            return false;
        }
        let mv = if mv.is_erase() {
            *mv
        } else {
            Move::new(mv.row(), mv.col(), mv.symbol().to_ascii_uppercase())
        };
        place_or_erase(&mut self.grid, &mv)
    }

    /// Any line spells a word; the mover claims it.
    fn is_win(&self, _player: &Player<char>) -> bool {
        !self.spelled_words().is_empty()
    }

    fn is_lose(&self, _player: &Player<char>) -> bool {
        false
    }

    fn is_draw(&self, player: &Player<char>) -> bool {
        self.grid.is_full() && !self.is_win(player)
    }
}

impl ConsolePlay for WordBoard {
    const TITLE: &'static str = "Word Tic-Tac-Toe";

    fn symbols() -> [char; 2] {
        [SHARED_SYMBOL, SHARED_SYMBOL]
    }

    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        let at = console.ask_coords(
            &format!("{}, enter your move as row col: ", player.name()),
            self.rows(),
            self.columns(),
        )?;
        let letter = console.ask_char("Letter (A-Z): ", |c| c.is_ascii_uppercase())?;
        Ok(Move::new(at.row, at.col, letter))
    }

    fn computer_move(&self, rng: &mut MatchRng, _player: &Player<char>) -> Option<Move<char>> {
        let at = rng.pick(&self.playable_cells())?;
        let letter = char::from(b'A' + (rng.below(26) as u8));
        debug!(%at, %letter, "Computer letter");
        Some(Move::new(at.row, at.col, letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::PlayerKind;

    fn board() -> WordBoard {
        WordBoard::new(Dictionary::from_words(["cat", "dog", " "]))
    }

    #[test]
    fn test_dictionary_ignores_case_and_blanks() {
        let dictionary = Dictionary::from_words(["cat", "", "Dog"]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("DOG"));
        assert!(dictionary.contains("cat"));
    }

    #[test]
    fn test_word_spelled_backwards_wins() {
        let player = Player::new("p", SHARED_SYMBOL, PlayerKind::Human);
        let mut board = board();
        for (c, letter) in [(0, 'T'), (1, 'a'), (2, 'C')] {
            assert!(board.update_board(&Move::new(1, c, letter)));
        }
        assert_eq!(board.cell(1, 1), Some('A'));
        assert!(board.is_win(&player));
        assert_eq!(board.spelled_words(), vec!["CAT".to_string()]);
    }

    #[test]
    fn test_rejects_non_letters() {
        let mut board = board();
        assert!(!board.update_board(&Move::new(0, 0, '7')));
        assert!(!board.update_board(&Move::new(0, 0, SHARED_SYMBOL)));
        assert_eq!(board.move_count(), 0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Dictionary::load("/definitely/not/here/dic.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Unreadable { .. }));
        assert!(err.to_string().contains("dic.txt"));
        let source = std::error::Error::source(&err).expect("io error as source");
        assert!(source.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_empty_dictionary_has_no_source() {
        let err = DictionaryError::Empty(PathBuf::from("dic.txt"));
        assert!(std::error::Error::source(&err).is_none());
    }
}
