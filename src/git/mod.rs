//! Version-control abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations a
//! release needs, allowing the publish sequence to run against the real
//! `git` executable or against a mock in tests.
//!
//! # Overview
//!
//! - [system::SystemGit]: runs the `git` executable in the release root
//! - [mock::MockVersionControl]: records calls and injects failures
//! - [repository::RepositoryInfo]: read-only preflight through `git2`
//!
//! ```rust
//! # use release_runner::git::VersionControl;
//! # fn example<V: VersionControl>(vcs: &V) -> release_runner::Result<()> {
//! vcs.tag("2.0.0")?;
//! vcs.push_tags()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;
pub mod system;

pub use mock::MockVersionControl;
pub use repository::RepositoryInfo;
pub use system::SystemGit;

use std::path::PathBuf;

use crate::error::Result;

/// What to hand to `git add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageSet {
    /// Every pending change in the working tree
    All,
    /// Only these paths, relative to the release root
    Paths(Vec<PathBuf>),
}

/// Capability interface over the external version-control tool.
///
/// Every method maps to one external command. A nonzero exit surfaces as
/// [crate::error::ReleaseError::Git] carrying the command line and status.
///
/// ## Implementations
///
/// - [SystemGit](system::SystemGit): Real implementation invoking `git`
/// - [MockVersionControl](mock::MockVersionControl): Test implementation
pub trait VersionControl: Send + Sync {
    /// Stage changes (`git add`)
    fn stage(&self, set: &StageSet) -> Result<()>;

    /// Commit staged changes (`git commit -m <message>`)
    fn commit(&self, message: &str) -> Result<()>;

    /// Create a lightweight tag on HEAD (`git tag <name>`)
    ///
    /// Fails if the tag already exists.
    fn tag(&self, name: &str) -> Result<()>;

    /// Push commits to the configured remote (`git push`)
    fn push(&self) -> Result<()>;

    /// Push tags to the configured remote (`git push --tags`)
    fn push_tags(&self) -> Result<()>;
}
