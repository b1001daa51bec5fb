use std::collections::HashSet;
use std::sync::Mutex;

use crate::domain::PublishStep;
use crate::error::{ReleaseError, Result};
use crate::git::{StageSet, VersionControl};

/// A call received by [MockVersionControl]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VcsCall {
    Stage(StageSet),
    Commit(String),
    Tag(String),
    Push,
    PushTags,
}

/// Mock version control for testing without running git
#[derive(Default)]
pub struct MockVersionControl {
    calls: Mutex<Vec<VcsCall>>,
    failing: HashSet<PublishStep>,
}

impl MockVersionControl {
    /// Create a mock where every operation succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `step` exit nonzero
    pub fn fail_on(mut self, step: PublishStep) -> Self {
        self.failing.insert(step);
        self
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<VcsCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, step: PublishStep, call: VcsCall, command: String) -> Result<()> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        if self.failing.contains(&step) {
            return Err(ReleaseError::git(command, Some(1), "simulated failure"));
        }
        Ok(())
    }
}

impl VersionControl for MockVersionControl {
    fn stage(&self, set: &StageSet) -> Result<()> {
        self.record(PublishStep::Stage, VcsCall::Stage(set.clone()), "git add".into())
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(
            PublishStep::Commit,
            VcsCall::Commit(message.to_string()),
            format!("git commit -m {}", message),
        )
    }

    fn tag(&self, name: &str) -> Result<()> {
        self.record(
            PublishStep::Tag,
            VcsCall::Tag(name.to_string()),
            format!("git tag {}", name),
        )
    }

    fn push(&self) -> Result<()> {
        self.record(PublishStep::Push, VcsCall::Push, "git push".into())
    }

    fn push_tags(&self) -> Result<()> {
        self.record(PublishStep::PushTags, VcsCall::PushTags, "git push --tags".into())
    }
}
