//! Interactive text console.
//!
//! The game loop talks to a [`Console`] rather than to stdin/stdout so the
//! same loop drives a real terminal and scripted test transcripts.

mod game_loop;
mod input;

pub use game_loop::{GameLoop, Presets};
pub use input::{
    InputError, parse_cell, parse_condition, parse_confirmation, parse_integer, parse_size,
};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};
use derive_more::{Display, Error};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// How a piece of text is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    /// Regular prompts and board rows.
    #[default]
    Plain,
    /// Rejected input.
    Error,
    /// The board header.
    Highlight,
}

/// Line-oriented terminal the game loop reads from and writes to.
pub trait Console {
    /// Reads one line of input without its line terminator.
    ///
    /// Returns [`ConsoleError::Closed`] once input is exhausted.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes text without a trailing newline.
    fn print(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError>;

    /// Writes text followed by a newline.
    fn println(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        self.print(tone, text)?;
        self.print(Tone::Plain, "\n")
    }

    /// Clears the screen.
    fn clear(&mut self) -> Result<(), ConsoleError>;

    /// Blocks until the player presses a key.
    fn wait_for_key(&mut self) -> Result<(), ConsoleError>;
}

/// Console failure.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),
    /// Input reached end of file.
    #[display("Console input closed")]
    Closed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Presentation switches for a [`StreamConsole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSettings {
    /// Style error and highlight text with ANSI colors.
    pub color: bool,
    /// Clear the screen between turns.
    pub clear_screen: bool,
    /// Read single key presses in raw mode; otherwise wait for a line.
    pub raw_keys: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            color: true,
            clear_screen: true,
            raw_keys: false,
        }
    }
}

impl ConsoleSettings {
    /// Plain settings for transcripts: no color, no clearing, line input.
    pub fn plain() -> Self {
        Self {
            color: false,
            clear_screen: false,
            raw_keys: false,
        }
    }
}

/// Console over any buffered reader and writer.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
    settings: ConsoleSettings,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, settings: ConsoleSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Returns the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_key(&mut self) -> Result<(), ConsoleError> {
        terminal::enable_raw_mode()?;
        let pressed = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(()),
                Ok(_) => continue,
                Err(err) => break Err(err),
            }
        };
        terminal::disable_raw_mode()?;
        pressed.map_err(ConsoleError::from)
    }
}

impl StreamConsole<StdinLock<'static>, Stdout> {
    /// Creates a console on the process's stdin and stdout.
    #[instrument]
    pub fn stdio(settings: ConsoleSettings) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), settings)
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.output.flush()?;
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            debug!("Console input reached end of file");
            return Err(ConsoleError::Closed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, tone: Tone, text: &str) -> Result<(), ConsoleError> {
        match (self.settings.color, tone) {
            (true, Tone::Error) => write!(self.output, "{}", text.red())?,
            (true, Tone::Highlight) => write!(self.output, "{}", text.green())?,
            _ => write!(self.output, "{}", text)?,
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.settings.clear_screen {
            crossterm::queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<(), ConsoleError> {
        self.output.flush()?;
        if self.settings.raw_keys {
            return self.read_key();
        }
        match self.read_line() {
            Ok(_) | Err(ConsoleError::Closed) => Ok(()),
            Err(err) => Err(err),
        }
    }
}
