use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: `{command}` {}: {detail}", describe_status(.code))]
    Git {
        command: String,
        code: Option<i32>,
        detail: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Cannot update {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-runner
pub type Result<T> = std::result::Result<T, ReleaseError>;

fn describe_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

impl ReleaseError {
    /// Create a git command error
    pub fn git(command: impl Into<String>, code: Option<i32>, detail: impl Into<String>) -> Self {
        ReleaseError::Git {
            command: command.into(),
            code,
            detail: detail.into(),
        }
    }

    /// Create a file access error naming the target
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReleaseError::File {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        ReleaseError::Input(msg.into())
    }
}
