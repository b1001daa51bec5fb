//! Stage, commit, tag and push a release through a [VersionControl] delegate.

use log::{debug, warn};
use std::path::PathBuf;
use thiserror::Error;

use crate::config::StagePolicy;
use crate::domain::PublishStep;
use crate::error::ReleaseError;
use crate::git::{StageSet, VersionControl};

/// Inputs for one publish sequence
#[derive(Debug, Clone)]
pub struct PublishPlan {
    /// Tag name, the literal version string
    pub tag: String,
    pub commit_message: String,
    pub stage: StagePolicy,
    /// Files rewritten by the updater, relative to the release root
    pub files: Vec<PathBuf>,
    /// Carry on to tagging when the commit exits nonzero
    pub allow_commit_failure: bool,
}

impl PublishPlan {
    /// What `git add` should receive, `None` when there is nothing to stage
    pub fn stage_set(&self) -> Option<StageSet> {
        match self.stage {
            StagePolicy::All => Some(StageSet::All),
            StagePolicy::Files if self.files.is_empty() => None,
            StagePolicy::Files => Some(StageSet::Paths(self.files.clone())),
        }
    }
}

/// Progress of a publish sequence
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Steps that ran and succeeded, in order
    pub completed: Vec<PublishStep>,
    /// Commit failure that was tolerated, if any
    pub commit_error: Option<ReleaseError>,
}

impl PublishReport {
    pub fn committed(&self) -> bool {
        self.completed.contains(&PublishStep::Commit)
    }
}

/// A fatal step failure, together with what had already happened.
///
/// Nothing is rolled back: `report` describes the partial state left behind.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct PublishFailure {
    pub step: PublishStep,
    pub report: PublishReport,
    #[source]
    pub source: ReleaseError,
}

/// Runs stage, commit, tag, push and push-tags in that order.
///
/// Each step only runs once the previous one succeeded. The commit step is
/// the exception when `allow_commit_failure` is set: its error is kept in
/// the report and tagging proceeds. Stage, tag and push failures stop the
/// sequence.
pub fn publish(
    vcs: &dyn VersionControl,
    plan: &PublishPlan,
) -> std::result::Result<PublishReport, PublishFailure> {
    let mut report = PublishReport::default();

    for step in PublishStep::SEQUENCE {
        let result = match step {
            PublishStep::Stage => match plan.stage_set() {
                Some(set) => vcs.stage(&set),
                None => {
                    debug!("no files to stage");
                    continue;
                }
            },
            PublishStep::Commit => vcs.commit(&plan.commit_message),
            PublishStep::Tag => vcs.tag(&plan.tag),
            PublishStep::Push => vcs.push(),
            PublishStep::PushTags => vcs.push_tags(),
        };

        match result {
            Ok(()) => {
                debug!("{} step completed", step);
                report.completed.push(step);
            }
            Err(e) if step == PublishStep::Commit && plan.allow_commit_failure => {
                warn!("commit failed, continuing: {}", e);
                report.commit_error = Some(e);
            }
            Err(source) => {
                return Err(PublishFailure {
                    step,
                    report,
                    source,
                })
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::{MockVersionControl, VcsCall};

    fn plan(files: &[&str]) -> PublishPlan {
        PublishPlan {
            tag: "2.0.0".to_string(),
            commit_message: "Release version 2.0.0".to_string(),
            stage: StagePolicy::Files,
            files: files.iter().map(PathBuf::from).collect(),
            allow_commit_failure: true,
        }
    }

    #[test]
    fn test_full_sequence_in_order() {
        let vcs = MockVersionControl::new();
        let report = publish(&vcs, &plan(&["build.gradle"])).unwrap();

        assert_eq!(report.completed, PublishStep::SEQUENCE.to_vec());
        assert_eq!(
            vcs.calls(),
            vec![
                VcsCall::Stage(StageSet::Paths(vec![PathBuf::from("build.gradle")])),
                VcsCall::Commit("Release version 2.0.0".to_string()),
                VcsCall::Tag("2.0.0".to_string()),
                VcsCall::Push,
                VcsCall::PushTags,
            ]
        );
    }

    #[test]
    fn test_stage_all_policy() {
        let vcs = MockVersionControl::new();
        let mut plan = plan(&[]);
        plan.stage = StagePolicy::All;

        publish(&vcs, &plan).unwrap();

        assert_eq!(vcs.calls()[0], VcsCall::Stage(StageSet::All));
    }

    #[test]
    fn test_nothing_to_stage_skips_stage() {
        let vcs = MockVersionControl::new();
        let report = publish(&vcs, &plan(&[])).unwrap();

        assert!(!report.completed.contains(&PublishStep::Stage));
        assert_eq!(vcs.calls()[0], VcsCall::Commit("Release version 2.0.0".to_string()));
    }

    #[test]
    fn test_commit_failure_tolerated() {
        let vcs = MockVersionControl::new().fail_on(PublishStep::Commit);
        let report = publish(&vcs, &plan(&["build.gradle"])).unwrap();

        assert!(!report.committed());
        assert!(report.commit_error.is_some());
        assert_eq!(
            report.completed,
            vec![
                PublishStep::Stage,
                PublishStep::Tag,
                PublishStep::Push,
                PublishStep::PushTags
            ]
        );
    }

    #[test]
    fn test_commit_failure_fatal_when_not_allowed() {
        let vcs = MockVersionControl::new().fail_on(PublishStep::Commit);
        let mut plan = plan(&["build.gradle"]);
        plan.allow_commit_failure = false;

        let failure = publish(&vcs, &plan).unwrap_err();

        assert_eq!(failure.step, PublishStep::Commit);
        assert!(!vcs.calls().contains(&VcsCall::Tag("2.0.0".to_string())));
    }

    #[test]
    fn test_tag_failure_stops_before_push() {
        let vcs = MockVersionControl::new().fail_on(PublishStep::Tag);
        let failure = publish(&vcs, &plan(&["build.gradle"])).unwrap_err();

        assert_eq!(failure.step, PublishStep::Tag);
        assert_eq!(
            failure.report.completed,
            vec![PublishStep::Stage, PublishStep::Commit]
        );
        assert!(failure.to_string().contains("git tag 2.0.0"));
        let calls = vcs.calls();
        assert!(!calls.contains(&VcsCall::Push));
        assert!(!calls.contains(&VcsCall::PushTags));
    }

    #[test]
    fn test_push_failure_skips_push_tags() {
        let vcs = MockVersionControl::new().fail_on(PublishStep::Push);
        let failure = publish(&vcs, &plan(&["build.gradle"])).unwrap_err();

        assert_eq!(failure.step, PublishStep::Push);
        assert!(!vcs.calls().contains(&VcsCall::PushTags));
    }

    #[test]
    fn test_stage_failure_is_fatal() {
        let vcs = MockVersionControl::new().fail_on(PublishStep::Stage);
        let failure = publish(&vcs, &plan(&["build.gradle"])).unwrap_err();

        assert_eq!(failure.step, PublishStep::Stage);
        assert!(failure.report.completed.is_empty());
        assert_eq!(vcs.calls().len(), 1);
    }
}
