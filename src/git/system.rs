use log::debug;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{ReleaseError, Result};
use crate::git::{StageSet, VersionControl};

/// Version control backed by the system `git` executable.
///
/// Every command runs with the release root as its working directory, so the
/// process cwd never matters.
pub struct SystemGit {
    root: PathBuf,
    remote: Option<String>,
}

impl SystemGit {
    /// Create a backend operating on `root`, pushing to `remote` when given
    pub fn new(root: impl Into<PathBuf>, remote: Option<String>) -> Self {
        SystemGit {
            root: root.into(),
            remote,
        }
    }

    /// Arguments for `git push`, optionally naming the remote
    fn push_args(&self, extra: &[&str]) -> Vec<String> {
        let mut args = vec!["push".to_string()];
        if let Some(remote) = &self.remote {
            args.push(remote.clone());
        }
        args.extend(extra.iter().map(|s| s.to_string()));
        args
    }

    fn run(&self, args: &[String]) -> Result<()> {
        let command_line = format!("git {}", args.join(" "));
        debug!("running `{}` in {}", command_line, self.root.display());

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .map_err(|e| ReleaseError::git(&command_line, None, format!("cannot run git: {}", e)))?;

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let stdout = String::from_utf8_lossy(&output.stdout);
        // `git commit` reports "nothing to commit" on stdout
        let detail = if stderr.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            stderr.trim().to_string()
        };

        Err(ReleaseError::git(command_line, output.status.code(), detail))
    }
}

impl VersionControl for SystemGit {
    fn stage(&self, set: &StageSet) -> Result<()> {
        let mut args = vec!["add".to_string()];
        match set {
            StageSet::All => args.push(".".to_string()),
            StageSet::Paths(paths) => {
                args.push("--".to_string());
                args.extend(paths.iter().map(|p| p.to_string_lossy().into_owned()));
            }
        }
        self.run(&args)
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit".to_string(), "-m".to_string(), message.to_string()])
    }

    fn tag(&self, name: &str) -> Result<()> {
        // `--` keeps a version such as `--list` from being read as an option
        self.run(&["tag".to_string(), "--".to_string(), name.to_string()])
    }

    fn push(&self) -> Result<()> {
        self.run(&self.push_args(&[]))
    }

    fn push_tags(&self) -> Result<()> {
        self.run(&self.push_args(&["--tags"]))
    }
}
