//! Input and display collaborators the session talks through.

use std::io::{BufRead, Write};

use combat_core::LoadoutError;
use thiserror::Error;

pub const INVALID_CHOICE_PROMPT: &str = "Please enter a valid number:";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),
    #[error("cannot choose from the empty range {min}..={max}")]
    EmptyRange { min: u32, max: u32 },
    #[error("no menu action for choice {0}")]
    UnknownAction(u32),
    #[error(transparent)]
    Loadout(#[from] LoadoutError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Supplies validated numbers and free text.
pub trait InputSource {
    /// Returns a value in `min..=max`, retrying on anything else.
    fn read_choice(&mut self, min: u32, max: u32) -> Result<u32, SessionError>;

    fn read_line(&mut self) -> Result<String, SessionError>;
}

/// Receives human-readable status lines.
pub trait DisplaySink {
    fn show(&mut self, line: &str) -> Result<(), SessionError>;
}

/// Line-oriented console input. Reprompts through `writer` until a number in
/// range arrives.
pub struct PromptInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PromptInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn next_line(&mut self, waiting_for: &'static str) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed(waiting_for));
        }
        Ok(line.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> InputSource for PromptInput<R, W> {
    fn read_choice(&mut self, min: u32, max: u32) -> Result<u32, SessionError> {
        if min > max {
            return Err(SessionError::EmptyRange { min, max });
        }
        loop {
            let line = self.next_line("a number")?;
            match line.parse::<u32>() {
                Ok(choice) if (min..=max).contains(&choice) => return Ok(choice),
                _ => {
                    writeln!(self.writer, "{INVALID_CHOICE_PROMPT}")?;
                    self.writer.flush()?;
                }
            }
        }
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        self.next_line("a line of text")
    }
}

pub struct WriterDisplay<W> {
    writer: W,
}

impl<W: Write> WriterDisplay<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> DisplaySink for WriterDisplay<W> {
    fn show(&mut self, line: &str) -> Result<(), SessionError> {
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Keeps every shown line in memory.
#[derive(Debug, Default)]
pub struct BufferDisplay {
    lines: Vec<String>,
}

impl BufferDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl DisplaySink for BufferDisplay {
    fn show(&mut self, line: &str) -> Result<(), SessionError> {
        self.lines.push(line.to_owned());
        Ok(())
    }
}
