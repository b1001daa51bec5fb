use crate::error::{ReleaseError, Result};

/// Prompt shown when no version was given on the command line
pub const VERSION_PROMPT: &str = "Enter the new version number (e.g., 1.0.2): ";

/// Source of a line of operator input.
///
/// The terminal implementation lives in [`crate::ui::TerminalInput`]; tests
/// use [`FixedInput`].
pub trait VersionSource {
    /// Show `prompt` and return one line, or `None` when input is exhausted
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Input source answering every prompt from a queue of canned lines
#[derive(Debug, Default)]
pub struct FixedInput {
    lines: Vec<String>,
    prompts: Vec<String>,
}

impl FixedInput {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        lines.reverse();
        FixedInput {
            lines,
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, oldest first
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl VersionSource for FixedInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop())
    }
}

/// Resolves the release version.
///
/// An argument is used verbatim. Without one the operator is prompted once;
/// only the line terminator is removed from the answer, so an empty or
/// malformed string is accepted as-is.
///
/// # Returns
/// * `Ok(String)` - The version to release
/// * `Err` - If the prompt hit end of input before any line was read
pub fn resolve_version(argument: Option<String>, source: &mut dyn VersionSource) -> Result<String> {
    if let Some(version) = argument {
        return Ok(version);
    }

    match source.read_line(VERSION_PROMPT)? {
        Some(line) => Ok(strip_line_ending(&line).to_string()),
        None => Err(ReleaseError::input("no version provided (end of input)")),
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
