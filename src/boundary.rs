use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions met during a release.
/// These are reported to the operator; the run continues.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// Optional target file does not exist
    MissingOptionalFile { path: PathBuf },
    /// Target file exists but contains no version declaration
    NoVersionDeclaration { path: PathBuf },
    /// `git commit` failed and the run went on to tagging
    CommitFailed { detail: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::MissingOptionalFile { path } => {
                let name = path.display();
                write!(f, "{} file not found. Skipping update for {}.", name, name)
            }
            ReleaseWarning::NoVersionDeclaration { path } => {
                write!(
                    f,
                    "No version declaration found in {}; file left unchanged",
                    path.display()
                )
            }
            ReleaseWarning::CommitFailed { detail } => {
                write!(f, "Commit failed, continuing with tag and push: {}", detail)
            }
        }
    }
}
