//! Line-oriented prompter over any reader and writer.

use std::io::{BufRead, Write};
use strictly_box_puzzle::{CornerChoices, Direction, InteractionError, Prompter};
use tracing::{debug, instrument};

/// Reads answers line by line, re-asking on anything unexpected.
#[derive(Debug)]
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    /// Creates a prompter reading from `input` and echoing prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the prompter, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows `message` and reads one trimmed line.
    fn ask(&mut self, message: &str) -> Result<String, InteractionError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InteractionError::new("Input closed before the game finished"));
        }
        Ok(line.trim().to_string())
    }

    /// Asks until the answer is `1` or `2`.
    fn choose(&mut self, message: &str, retry: &str) -> Result<bool, InteractionError> {
        loop {
            match self.ask(message)?.as_str() {
                "1" => return Ok(true),
                "2" => return Ok(false),
                other => {
                    debug!(answer = other, "Unexpected menu answer");
                    writeln!(self.output, "{}", retry)?;
                }
            }
        }
    }
}

fn horizontal_text(direction: Direction) -> &'static str {
    match direction {
        Direction::Right => "right",
        _ => "left",
    }
}

fn vertical_text(direction: Direction) -> &'static str {
    match direction {
        Direction::Down => "downwards",
        _ => "upwards",
    }
}

impl<R: BufRead, W: Write> Prompter for ConsolePrompter<R, W> {
    #[instrument(skip(self))]
    fn coordinate(&mut self, message: &str) -> Result<String, InteractionError> {
        self.ask(message)
    }

    #[instrument(skip(self))]
    fn yes_no(&mut self, message: &str) -> Result<bool, InteractionError> {
        let full = format!("{} [1] Yes or [2] No? ", message);
        self.choose(&full, "Invalid input! Please enter 1 or 2.")
    }

    #[instrument(skip(self))]
    fn direction(&mut self, choices: &CornerChoices) -> Result<Direction, InteractionError> {
        let message = format!(
            "The chosen box can be rolled to either [1] {} or [2] {}: ",
            horizontal_text(choices.horizontal()),
            vertical_text(choices.vertical())
        );
        if self.choose(&message, "Invalid input. Please enter 1 or 2.")? {
            Ok(choices.horizontal())
        } else {
            Ok(choices.vertical())
        }
    }
}
