//! Game loop: the state machine driving play on a console.

use super::input::{self, InputError};
use super::{Console, ConsoleError, Tone};
use crate::games::tictactoe::{
    BoardView, Dimensions, GameBoard, MAX_SIZE, Outcome, SetupError, validate_condition,
    validate_size,
};
use tracing::{debug, info, instrument, warn};

/// Setup values fixed before play; their prompts are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presets {
    size: Option<usize>,
    winning_condition: Option<usize>,
}

impl Presets {
    /// Validates presets with the same bounds the prompts enforce.
    ///
    /// A condition without a size is checked against the largest board and
    /// again against each entered size.
    #[instrument]
    pub fn new(size: Option<usize>, winning_condition: Option<usize>) -> Result<Self, SetupError> {
        if let Some(size) = size {
            validate_size(size)?;
        }
        if let Some(condition) = winning_condition {
            validate_condition(size.unwrap_or(MAX_SIZE), condition)?;
        }
        Ok(Self {
            size,
            winning_condition,
        })
    }

    /// Preset board size.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Preset winning condition.
    pub fn winning_condition(&self) -> Option<usize> {
        self.winning_condition
    }
}

/// Active step of the loop.
#[derive(Debug)]
enum Phase {
    ReadSize,
    ReadCondition { size: usize },
    Playing(GameBoard),
    Finished(GameBoard),
    AskReplay,
    Exit,
}

impl Phase {
    fn name(&self) -> &'static str {
        match self {
            Phase::ReadSize => "read_size",
            Phase::ReadCondition { .. } => "read_condition",
            Phase::Playing(_) => "playing",
            Phase::Finished(_) => "finished",
            Phase::AskReplay => "ask_replay",
            Phase::Exit => "exit",
        }
    }
}

/// Drives games on a console until the players decline a replay.
#[derive(Debug)]
pub struct GameLoop<C> {
    console: C,
    presets: Presets,
}

impl<C: Console> GameLoop<C> {
    /// Creates a loop over the given console.
    pub fn new(console: C, presets: Presets) -> Self {
        Self { console, presets }
    }

    /// Returns the console, consuming the loop.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays games until the players decline a replay.
    ///
    /// Returns the outcome of each finished game in order.
    ///
    /// # Errors
    ///
    /// Fails only when the console does; [`ConsoleError::Closed`] means
    /// input ran out mid-game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Outcome>, ConsoleError> {
        info!("Starting game loop");
        let mut outcomes = Vec::new();
        let mut phase = Phase::ReadSize;

        loop {
            phase = match phase {
                Phase::ReadSize => Phase::ReadCondition {
                    size: self.read_size()?,
                },
                Phase::ReadCondition { size } => {
                    let board = GameBoard::new(self.read_condition(size)?);
                    self.render(&board)?;
                    Phase::Playing(board)
                }
                Phase::Playing(mut board) => {
                    self.play_turn(&mut board)?;
                    if board.is_finished() {
                        Phase::Finished(board)
                    } else {
                        Phase::Playing(board)
                    }
                }
                Phase::Finished(board) => {
                    if let Some(outcome) = board.outcome() {
                        info!(%outcome, turns = board.history().len(), "Game finished");
                        self.console.println(Tone::Plain, &outcome.to_string())?;
                        outcomes.push(outcome);
                    }
                    Phase::AskReplay
                }
                Phase::AskReplay => {
                    if self.ask_replay()? {
                        self.console.clear()?;
                        Phase::ReadSize
                    } else {
                        self.console.println(Tone::Plain, "Press any key to exit...")?;
                        self.console.wait_for_key()?;
                        Phase::Exit
                    }
                }
                Phase::Exit => {
                    info!(games = outcomes.len(), "Game loop finished");
                    return Ok(outcomes);
                }
            };
            debug!(phase = phase.name(), "Phase transition");
        }
    }

    #[instrument(skip(self))]
    fn read_size(&mut self) -> Result<usize, ConsoleError> {
        if let Some(size) = self.presets.size {
            return Ok(size);
        }
        self.console.print(Tone::Plain, "Enter board size: ")?;
        loop {
            let line = self.console.read_line()?;
            match input::parse_size(&line) {
                Ok(size) => return Ok(size),
                Err(err) => {
                    warn!(error = %err, "Rejected board size");
                    self.console.print(Tone::Error, "Invalid size, retry: ")?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn read_condition(&mut self, size: usize) -> Result<Dimensions, ConsoleError> {
        if let Some(condition) = self.presets.winning_condition
            && let Ok(dims) = Dimensions::new(size, condition)
        {
            return Ok(dims);
        }
        self.console.print(Tone::Plain, "Enter winning condition: ")?;
        loop {
            let line = self.console.read_line()?;
            match input::parse_condition(&line, size) {
                Ok(dims) => return Ok(dims),
                Err(err) => {
                    warn!(error = %err, "Rejected winning condition");
                    self.console
                        .println(Tone::Error, "Invalid condition, please retry")?;
                    self.console
                        .print(Tone::Plain, &format!("Board size \"{}\", condition: ", size))?;
                }
            }
        }
    }

    /// Prompts the player to move and applies the answer.
    #[instrument(skip(self, board), fields(turn = board.turn()))]
    fn play_turn(&mut self, board: &mut GameBoard) -> Result<(), ConsoleError> {
        let prompt = format!("Player \"{}\": ", board.current_mark());
        self.console.print(Tone::Plain, &prompt)?;
        let line = self.console.read_line()?;

        let placed = input::parse_cell(&line)
            .and_then(|index| board.place(index).map_err(InputError::from));

        self.console.clear()?;
        match placed {
            Ok(mark) => debug!(%mark, "Move accepted"),
            Err(err) => {
                warn!(error = %err, "Move rejected");
                self.console.println(Tone::Error, rejection_message(&err))?;
            }
        }
        self.render(board)
    }

    #[instrument(skip(self))]
    fn ask_replay(&mut self) -> Result<bool, ConsoleError> {
        self.console.print(Tone::Plain, "Play again? (Y/N): ")?;
        loop {
            let line = self.console.read_line()?;
            match input::parse_confirmation(&line) {
                Ok(again) => return Ok(again),
                Err(err) => {
                    warn!(error = %err, "Rejected replay answer");
                    self.console
                        .println(Tone::Error, "Invalid input, retry (Y/N)")?;
                }
            }
        }
    }

    fn render(&mut self, board: &GameBoard) -> Result<(), ConsoleError> {
        let view = BoardView::new(board);
        self.console.println(Tone::Plain, "")?;
        self.console.println(Tone::Highlight, &view.header)?;
        self.console.println(Tone::Plain, &view.guide)?;
        for row in &view.rows {
            self.console.println(Tone::Plain, row)?;
        }
        Ok(())
    }
}

/// Message shown above the board after a rejected move.
fn rejection_message(err: &InputError) -> &'static str {
    match err {
        InputError::CellOutOfRange(_) => "\nNon-existent, retry",
        InputError::Occupied(_) => "\nOccupied, retry",
        InputError::Finished => "\nGame is already over",
        _ => "Invalid input",
    }
}
