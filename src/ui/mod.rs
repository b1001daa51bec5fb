//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use crate::error::Result;
use crate::version::VersionSource;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run_plan, display_error, display_partial_state, display_release_warning,
    display_status, display_success, format_file_updated, format_file_would_update,
    format_modified_files, format_release_success,
};

/// Reads operator input from the terminal.
///
/// Blocks until a line is entered; there is no timeout.
pub struct TerminalInput<R> {
    reader: R,
}

impl TerminalInput<io::StdinLock<'static>> {
    /// Read from the process's standard input
    pub fn stdin() -> Self {
        TerminalInput {
            reader: io::stdin().lock(),
        }
    }
}

impl<R: BufRead> TerminalInput<R> {
    /// Read from any buffered reader
    pub fn from_reader(reader: R) -> Self {
        TerminalInput { reader }
    }
}

impl<R: BufRead> VersionSource for TerminalInput<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input))
    }
}
