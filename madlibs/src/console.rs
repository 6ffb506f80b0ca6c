//! Console collaborators
//!
//! The game only talks to the user through [`Console`]. Two implementations
//! exist: [`LineConsole`] over any reader/writer pair (piped stdin, tests) and
//! [`ReadlineConsole`] for interactive terminals.

use std::fs::File;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::error::{MadLibError, Result};

/// Shown when a yes/no answer is not understood
pub const YES_NO_REPROMPT: &str = "Please type a word that starts with 'Y' or 'N'.";

/// Line-oriented user interaction
pub trait Console {
    /// Show `prompt` and read one line of input, without its line terminator
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print one line of output
    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Print a line that tells the user their input was rejected
    fn write_notice(&mut self, text: &str) -> Result<()> {
        self.write_line(text)
    }

    fn blank_line(&mut self) -> Result<()> {
        self.write_line("")
    }

    /// Ask a yes/no question until the answer starts with Y or N
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.read_line(prompt)?;
            match answer.trim_start().chars().next().map(|c| c.to_ascii_lowercase()) {
                Some('y') => return Ok(true),
                Some('n') => return Ok(false),
                _ => self.write_notice(YES_NO_REPROMPT)?,
            }
        }
    }

    /// Ask for a file name until one names a readable file
    ///
    /// Relative names are resolved against `base_dir` when one is given.
    fn prompt_for_file(&mut self, prompt: &str, error_message: &str, base_dir: Option<&Path>) -> Result<PathBuf> {
        loop {
            let answer = self.read_line(prompt)?;
            let path = resolve_path(answer.trim(), base_dir);
            if is_readable_file(&path) {
                debug!(path = %path.display(), "Accepted template file");
                return Ok(path);
            }
            debug!(path = %path.display(), "Rejected template file");
            self.write_notice(error_message)?;
        }
    }
}

fn resolve_path(name: &str, base_dir: Option<&Path>) -> PathBuf {
    let path = PathBuf::from(name);
    match base_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path,
    }
}

fn is_readable_file(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file() && File::open(path).is_ok()
}

/// Console over a plain reader and writer
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and hand back everything written to it
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MadLibError::InputClosed);
        }
        // Echo the newline a terminal would have shown
        writeln!(self.writer)?;

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }
}

/// Interactive console with line editing
pub struct ReadlineConsole {
    editor: DefaultEditor,
}

impl ReadlineConsole {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().map_err(|e| MadLibError::Readline(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl Console for ReadlineConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            // Ctrl+C and Ctrl+D both end the game
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(MadLibError::InputClosed),
            Err(err) => Err(MadLibError::Readline(err.to_string())),
        }
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }

    fn write_notice(&mut self, text: &str) -> Result<()> {
        println!("{}", text.yellow());
        Ok(())
    }
}
