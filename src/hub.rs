//! Match setup and the variant menu.

use crate::config::HubConfig;
use crate::framework::{GameManager, Outcome};
use crate::games::{
    ClassicBoard, ConnectFourBoard, DiamondBoard, Dictionary, DictionaryError, FiveByFiveBoard,
    InfinityBoard, MemoryBoard, MisereBoard, NumericBoard, ObstaclesBoard, PyramidBoard,
    SlidingBoard, SusBoard, UltimateBoard, Variant, WordBoard,
};
use crate::ui::{Console, ConsolePlay, ConsoleUi, GameUi, InputSource, MatchRng, UiError};
use derive_more::{Display, Error, From};
use std::io::Write;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Failures while setting up or playing a match.
#[derive(Debug, Display, Error, From)]
pub enum HubError {
    /// Console interaction failed.
    #[display("{}", _0)]
    Ui(#[error(source)] UiError),

    /// The word list could not be loaded.
    #[display("{}", _0)]
    Dictionary(#[error(source)] DictionaryError),
}

/// What a menu selection asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Leave the hub.
    Quit,
    /// Play one match.
    Play(Variant),
}

/// Parses a menu answer: `0` or `q` quits, `1..=n` picks a variant.
pub fn parse_menu_choice(answer: &str) -> Option<MenuChoice> {
    let answer = answer.trim();
    if answer == "0" || answer.eq_ignore_ascii_case("q") {
        return Some(MenuChoice::Quit);
    }
    let index: usize = answer.parse().ok()?;
    let variant = Variant::iter().nth(index.checked_sub(1)?)?;
    Some(MenuChoice::Play(variant))
}

/// The game hub: owns the console and the seed source for every match.
pub struct Hub<R, W> {
    config: HubConfig,
    console: Console<R, W>,
    rng: MatchRng,
}

impl<R: InputSource, W: Write> Hub<R, W> {
    /// Creates a hub over an input source and an output sink.
    #[instrument(skip_all, fields(seed = ?config.seed()))]
    pub fn new(config: HubConfig, input: R, output: W) -> Self {
        let rng = match config.seed() {
            Some(seed) => MatchRng::new(*seed),
            None => MatchRng::from_entropy(),
        };
        info!(seed = rng.seed(), "Hub ready");
        Self {
            config,
            console: Console::new(input, output),
            rng,
        }
    }

    /// The console, for inspecting output.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Shows the menu until the user quits or input ends.
    ///
    /// A dictionary failure is reported and the menu continues.
    #[instrument(skip(self))]
    pub fn run_menu(&mut self) -> Result<(), HubError> {
        loop {
            self.print_menu()?;
            let answer = match self.console.prompt("Choose a game: ") {
                Ok(answer) => answer,
                Err(UiError::InputClosed) => return Ok(()),
                Err(e) => return Err(e.into()),
            };
            match parse_menu_choice(&answer) {
                Some(MenuChoice::Quit) => {
                    self.console.say("Goodbye!")?;
                    return Ok(());
                }
                Some(MenuChoice::Play(variant)) => match self.play(variant) {
                    Ok(_) => {}
                    Err(HubError::Dictionary(e)) => {
                        warn!(error = %e, "Word variant unavailable");
                        self.console.say(&format!("Cannot start {}: {}", variant.title(), e))?;
                    }
                    Err(e) => return Err(e),
                },
                None => self.console.say("Invalid Option")?,
            }
        }
    }

    /// Plays one match of `variant` to completion.
    #[instrument(skip(self, variant), fields(%variant))]
    pub fn play(&mut self, variant: Variant) -> Result<Outcome, HubError> {
        match variant {
            Variant::Classic => self.play_board(ClassicBoard::new()),
            Variant::Misere => self.play_board(MisereBoard::new()),
            Variant::Infinity => self.play_board(InfinityBoard::new()),
            Variant::Word => {
                let dictionary = Dictionary::load(self.config.dictionary())?;
                self.play_board(WordBoard::new(dictionary))
            }
            Variant::Obstacles => {
                let board = ObstaclesBoard::new(self.rng.fork(), *self.config.obstacles_per_turn());
                self.play_board(board)
            }
            Variant::Numeric => self.play_board(NumericBoard::new()),
            Variant::Sus => self.play_board(SusBoard::new()),
            Variant::Sliding => self.play_board(SlidingBoard::new()),
            Variant::FiveByFive => self.play_board(FiveByFiveBoard::new()),
            Variant::Memory => self.play_board(MemoryBoard::new()),
            Variant::Diamond => self.play_board(DiamondBoard::new()),
            Variant::Pyramid => self.play_board(PyramidBoard::new()),
            Variant::ConnectFour => self.play_board(ConnectFourBoard::new()),
            Variant::Ultimate => self.play_board(UltimateBoard::new()),
        }
    }

    fn play_board<B: ConsolePlay>(&mut self, mut board: B) -> Result<Outcome, HubError> {
        let rng = self.rng.fork();
        let (input, output) = self.console.parts_mut();
        let mut ui = ConsoleUi::<B, _, _>::new(input, output, rng);
        let players = ui.setup_players()?;
        let outcome = GameManager::new(&mut board, &players, &mut ui).run()?;
        info!(?outcome, "Match finished");
        Ok(outcome)
    }

    fn print_menu(&mut self) -> Result<(), UiError> {
        self.console.say("Welcome to Game Hub")?;
        self.console.say("Choose a Game to play")?;
        for (i, variant) in Variant::iter().enumerate() {
            self.console.say(&format!("{}- {}", i + 1, variant.title()))?;
        }
        self.console.say("0- Exit")
    }
}
