//! Console prompts and the generic console UI.

use super::input::InputSource;
use super::render::render_grid;
use super::rng::MatchRng;
use super::{GameUi, UiError, UiSettings};
use crate::framework::{Board, Coord, Move, Player, PlayerKind};
use std::io::Write;
use std::marker::PhantomData;
use tracing::{debug, info, instrument, warn};

/// Prompting helpers over an injected input source and an output sink.
///
/// Every `ask_*` helper re-prompts until it gets a well-formed answer and
/// only fails when the input is exhausted or I/O breaks.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: InputSource, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Borrows input and output separately.
    pub fn parts_mut(&mut self) -> (&mut R, &mut W) {
        (&mut self.input, &mut self.output)
    }

    /// Consumes the console, returning input and output.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Writes a line.
    pub fn say(&mut self, text: &str) -> Result<(), UiError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Writes `text` without a newline and reads one answer line.
    pub fn prompt(&mut self, text: &str) -> Result<String, UiError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.input.next_line()?.ok_or(UiError::InputClosed)
    }

    /// Reads `count` non-negative integers from one line.
    #[instrument(skip(self))]
    pub fn ask_numbers(&mut self, text: &str, count: usize) -> Result<Vec<usize>, UiError> {
        loop {
            let line = self.prompt(text)?;
            let parsed: Result<Vec<usize>, _> = line
                .split_whitespace()
                .take(count)
                .map(str::parse::<usize>)
                .collect();
            match parsed {
                Ok(values) if values.len() == count => return Ok(values),
                _ => {
                    warn!(line, "Malformed numeric input");
                    self.say("Invalid input. Please enter whole numbers.")?;
                }
            }
        }
    }

    /// Reads a `row col` pair inside `rows × columns`.
    pub fn ask_coords(&mut self, text: &str, rows: usize, columns: usize) -> Result<Coord, UiError> {
        loop {
            let values = self.ask_numbers(text, 2)?;
            let (row, col) = (values[0], values[1]);
            if row < rows && col < columns {
                return Ok(Coord::new(row, col));
            }
            warn!(row, col, "Coordinates out of range");
            self.say(&format!(
                "Out of range. Rows are 0 to {}, columns 0 to {}.",
                rows.saturating_sub(1),
                columns.saturating_sub(1)
            ))?;
        }
    }

    /// Reads a single character accepted by `accept`, upper-cased.
    pub fn ask_char<F>(&mut self, text: &str, accept: F) -> Result<char, UiError>
    where
        F: Fn(char) -> bool,
    {
        loop {
            let line = self.prompt(text)?;
            let mut chars = line.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if accept(c.to_ascii_uppercase()) => return Ok(c.to_ascii_uppercase()),
                _ => {
                    warn!(line, "Malformed character input");
                    self.say("Please enter a valid input.")?;
                }
            }
        }
    }

    /// Reads a yes/no answer.
    pub fn confirm(&mut self, text: &str) -> Result<bool, UiError> {
        let answer = self.ask_char(text, |c| c == 'Y' || c == 'N')?;
        Ok(answer == 'Y')
    }

    /// Presents numbered options and returns the zero-based choice.
    pub fn ask_choice(&mut self, text: &str, options: &[&str]) -> Result<usize, UiError> {
        self.say(text)?;
        for (i, option) in options.iter().enumerate() {
            self.say(&format!("{}. {}", i + 1, option))?;
        }
        loop {
            let values = self.ask_numbers("Choice: ", 1)?;
            match values[0] {
                n if (1..=options.len()).contains(&n) => return Ok(n - 1),
                n => {
                    warn!(choice = n, "Choice out of range");
                    self.say("Invalid choice. Try again.")?;
                }
            }
        }
    }
}

/// Console behavior a variant supplies on top of its board rules.
pub trait ConsolePlay: Board<Cell = char> + Sized {
    /// Banner shown at the start of a match.
    const TITLE: &'static str;

    /// Rendering width of one cell.
    const CELL_WIDTH: usize = 3;

    /// Draw occupied cells as `#`.
    const HIDDEN: bool = false;

    /// Symbols for player slots 0 and 1.
    fn symbols() -> [char; 2] {
        ['X', 'O']
    }

    /// Reads a human player's move. Defaults to a `row col` pair.
    fn human_move<R, W>(&self, console: &mut Console<R, W>, player: &Player<char>) -> Result<Move<char>, UiError>
    where
        R: InputSource,
        W: Write,
    {
        let at = console.ask_coords(
            &format!(
                "{} ({}), enter your move as row col: ",
                player.name(),
                player.symbol()
            ),
            self.rows(),
            self.columns(),
        )?;
        Ok(Move::new(at.row, at.col, player.symbol()))
    }

    /// Chooses a computer player's move. Defaults to a uniform pick among playable cells.
    fn computer_move(&self, rng: &mut MatchRng, player: &Player<char>) -> Option<Move<char>> {
        rng.pick(&self.playable_cells())
            .map(|at| Move::new(at.row, at.col, player.symbol()))
    }

    /// Renders a board snapshot.
    fn render(matrix: &[Vec<char>], settings: &UiSettings) -> String {
        render_grid(matrix, settings.cell_width, settings.hidden, crate::games::EMPTY)
    }
}

/// Console UI generic over the variant it plays.
pub struct ConsoleUi<B, R, W> {
    settings: UiSettings,
    console: Console<R, W>,
    rng: MatchRng,
    _variant: PhantomData<fn() -> B>,
}

impl<B, R, W> ConsoleUi<B, R, W>
where
    B: ConsolePlay,
    R: InputSource,
    W: Write,
{
    /// Creates a UI with the variant's default settings.
    #[instrument(skip(input, output, rng), fields(title = B::TITLE, seed = rng.seed()))]
    pub fn new(input: R, output: W, rng: MatchRng) -> Self {
        Self::with_settings(UiSettings::new(B::TITLE, 2, B::CELL_WIDTH, B::HIDDEN), input, output, rng)
    }

    /// Creates a UI with explicit settings.
    pub fn with_settings(settings: UiSettings, input: R, output: W, rng: MatchRng) -> Self {
        Self {
            settings,
            console: Console::new(input, output),
            rng,
            _variant: PhantomData,
        }
    }

    /// The underlying console.
    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    /// Consumes the UI, returning the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

impl<B, R, W> GameUi<B> for ConsoleUi<B, R, W>
where
    B: ConsolePlay,
    R: InputSource,
    W: Write,
{
    fn settings(&self) -> &UiSettings {
        &self.settings
    }

    #[instrument(skip(self))]
    fn setup_players(&mut self) -> Result<[Player<char>; 2], UiError> {
        self.console.say(&self.settings.title.clone())?;
        let symbols = B::symbols();
        let mut players = Vec::with_capacity(2);
        for slot in 0..self.settings.player_slots.clamp(1, 2) {
            let label = format!("Player {}", slot + 1);
            let name = self.console.prompt(&format!("{} name: ", label))?;
            let name = match name.trim() {
                "" => label.clone(),
                trimmed => trimmed.to_string(),
            };
            let kind = match self
                .console
                .ask_choice(&format!("Choose {} type:", label), &["Human", "Computer"])?
            {
                0 => PlayerKind::Human,
                _ => PlayerKind::Computer,
            };
            players.push(<Self as GameUi<B>>::create_player(self, &name, symbols[slot], kind));
        }
        if players.len() < 2 {
            let label = "Player 2";
            players.push(<Self as GameUi<B>>::create_player(
                self,
                label,
                symbols[1],
                PlayerKind::Computer,
            ));
        }
        let second = players.pop().ok_or(UiError::InputClosed)?;
        let first = players.pop().ok_or(UiError::InputClosed)?;
        Ok([first, second])
    }

    fn create_player(&mut self, name: &str, symbol: char, kind: PlayerKind) -> Player<char> {
        info!(name, %symbol, %kind, "Creating player");
        let line = format!("Creating {} player: {} ({})", kind.to_string().to_lowercase(), name, symbol);
        if let Err(e) = self.console.say(&line) {
            warn!(error = %e, "Failed to announce player");
        }
        Player::new(name, symbol, kind)
    }

    #[instrument(skip(self, board), fields(player = %player.name()))]
    fn get_move(&mut self, player: &Player<char>, board: &B) -> Result<Move<char>, UiError> {
        match player.kind() {
            PlayerKind::Human => board.human_move(&mut self.console, player),
            PlayerKind::Computer => {
                let mv = board
                    .computer_move(&mut self.rng, player)
                    .ok_or_else(|| UiError::NoCandidateMoves(player.name().to_string()))?;
                debug!(%mv, "Computer chose move");
                self.console
                    .say(&format!("{} ({}) plays {}", player.name(), player.symbol(), mv))?;
                Ok(mv)
            }
        }
    }

    fn display_board_matrix(&mut self, matrix: &[Vec<char>]) -> Result<(), UiError> {
        let text = B::render(matrix, &self.settings);
        self.console.say(&text)
    }

    fn announce(&mut self, message: &str) -> Result<(), UiError> {
        self.console.say(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LineInput;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn console(script: &str) -> Console<LineInput<Cursor<String>>, Vec<u8>> {
        Console::new(LineInput::new(Cursor::new(script.to_string())), Vec::new())
    }

    #[test]
    fn test_malformed_input_is_logged_as_warning() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let mut console = console("one two\n9 9\n1 2\n");
        let at = tracing::subscriber::with_default(subscriber, || console.ask_coords("Move: ", 3, 3)).unwrap();
        assert_eq!(at, Coord::new(1, 2));

        let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("WARN"));
        assert!(text.contains("Malformed numeric input"));
        assert!(text.contains("Coordinates out of range"));
    }

    #[test]
    fn test_confirm_reprompts_until_yes_or_no() {
        let mut console = console("maybe\ny\n");
        assert!(console.confirm("Sure? ").unwrap());
        let shown = String::from_utf8(console.output().clone()).unwrap();
        assert!(shown.contains("Please enter a valid input."));
    }
}
