use git2::Repository;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// Facts about the repository a release runs in, gathered through git2
/// before any file is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryInfo {
    /// Working tree root of the enclosing repository
    pub workdir: PathBuf,
    /// Checked-out branch, `None` when HEAD is detached or unborn
    pub branch: Option<String>,
}

impl RepositoryInfo {
    /// Discover the repository enclosing `path`.
    ///
    /// # Returns
    /// * `Ok(RepositoryInfo)` - Path is inside a non-bare repository
    /// * `Err` - Not inside a repository, or the repository is bare
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|e| {
            ReleaseError::config(format!(
                "Not in a git repository ({}): {}",
                path.display(),
                e.message()
            ))
        })?;

        let workdir = repo
            .workdir()
            .map(Path::to_path_buf)
            .ok_or_else(|| ReleaseError::config("Cannot release from a bare repository"))?;

        let branch = match repo.head() {
            Ok(head) if head.is_branch() => head.shorthand().map(str::to_string),
            _ => None,
        };

        Ok(RepositoryInfo { workdir, branch })
    }
}
