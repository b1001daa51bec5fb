//! Main release workflow orchestration logic
//!
//! Keeps the pipeline (resolve version, rewrite files, publish) apart from
//! CLI argument parsing so it can run against a mock version control and a
//! scripted input source.

use log::info;
use std::path::PathBuf;
use thiserror::Error;

use crate::boundary::ReleaseWarning;
use crate::config::Config;
use crate::error::ReleaseError;
use crate::git::VersionControl;
use crate::publisher::{publish, PublishFailure, PublishPlan, PublishReport};
use crate::ui;
use crate::updater::{update_target, UpdateOutcome};
use crate::version::{resolve_version, VersionSource};

/// Arguments for the release workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Version given on the command line; prompted for when `None`
    pub version: Option<String>,

    /// Directory holding the target files and the git working tree
    pub root: PathBuf,

    /// Report planned changes without writing files or running git
    pub dry_run: bool,
}

/// Result of a successful release workflow
#[derive(Debug)]
pub struct WorkflowResult {
    /// The version that was released
    pub version: String,

    /// One entry per configured target, in configuration order
    pub outcomes: Vec<UpdateOutcome>,

    /// Non-fatal conditions met along the way
    pub warnings: Vec<ReleaseWarning>,

    /// Git progress; `None` for a dry run
    pub publish: Option<PublishReport>,
}

impl WorkflowResult {
    /// Targets that were rewritten
    pub fn updated_files(&self) -> Vec<PathBuf> {
        updated_paths(&self.outcomes)
    }
}

/// Why a release run stopped
#[derive(Error, Debug)]
pub enum WorkflowError {
    /// Failure before any file was written
    #[error(transparent)]
    Release(#[from] ReleaseError),

    /// A target could not be rewritten; files in `modified` keep the new version
    #[error("{error}")]
    Update {
        #[source]
        error: ReleaseError,
        modified: Vec<PathBuf>,
    },

    /// A fatal git step; files in `modified` keep the new version
    #[error("Error occurred during Git operations: {failure}")]
    Publish {
        #[source]
        failure: PublishFailure,
        modified: Vec<PathBuf>,
    },
}

/// Main release workflow
///
/// 1. Resolve the version (argument or prompt)
/// 2. Check every required target exists
/// 3. Rewrite the version declaration of each target
/// 4. Stage, commit, tag and push through `vcs`
///
/// Required files are checked before anything is written, so a missing one
/// leaves the tree untouched. After that no step is rolled back.
pub fn run_release_workflow(
    args: ReleaseWorkflowArgs,
    config: &Config,
    input: &mut dyn VersionSource,
    vcs: &dyn VersionControl,
) -> Result<WorkflowResult, WorkflowError> {
    let version = resolve_version(args.version, input)?;
    info!("releasing version {:?} from {}", version, args.root.display());

    for target in config.targets.iter().filter(|t| t.required) {
        if !args.root.join(&target.path).exists() {
            return Err(ReleaseError::MissingFile(target.path.clone()).into());
        }
    }

    let mut outcomes = Vec::with_capacity(config.targets.len());
    let mut warnings = Vec::new();

    for target in &config.targets {
        let outcome = match update_target(&args.root, target, &version, args.dry_run) {
            Ok(outcome) => outcome,
            Err(error) => {
                let modified = if args.dry_run {
                    Vec::new()
                } else {
                    updated_paths(&outcomes)
                };
                return Err(WorkflowError::Update { error, modified });
            }
        };

        let warning = match &outcome {
            UpdateOutcome::Updated { path, replacements } => {
                if args.dry_run {
                    ui::display_status(&ui::format_file_would_update(
                        path,
                        &version,
                        *replacements,
                    ));
                } else {
                    ui::display_success(&ui::format_file_updated(path, &version));
                }
                (*replacements == 0)
                    .then(|| ReleaseWarning::NoVersionDeclaration { path: path.clone() })
            }
            UpdateOutcome::Skipped { path } => {
                Some(ReleaseWarning::MissingOptionalFile { path: path.clone() })
            }
        };

        if let Some(warning) = warning {
            ui::display_release_warning(&warning);
            warnings.push(warning);
        }
        outcomes.push(outcome);
    }

    let modified = updated_paths(&outcomes);
    let plan = PublishPlan {
        tag: version.clone(),
        commit_message: config.commit_message_for(&version),
        stage: config.stage,
        files: modified.clone(),
        allow_commit_failure: config.allow_commit_failure,
    };

    if args.dry_run {
        ui::display_dry_run_plan(
            plan.stage_set().as_ref(),
            &plan.commit_message,
            &plan.tag,
            config.remote.as_deref(),
        );
        return Ok(WorkflowResult {
            version,
            outcomes,
            warnings,
            publish: None,
        });
    }

    let report = match publish(vcs, &plan) {
        Ok(report) => report,
        Err(failure) => return Err(WorkflowError::Publish { failure, modified }),
    };

    if let Some(error) = &report.commit_error {
        let warning = ReleaseWarning::CommitFailed {
            detail: error.to_string(),
        };
        ui::display_release_warning(&warning);
        warnings.push(warning);
    }

    ui::display_success(&ui::format_release_success(&version));

    Ok(WorkflowResult {
        version,
        outcomes,
        warnings,
        publish: Some(report),
    })
}

fn updated_paths(outcomes: &[UpdateOutcome]) -> Vec<PathBuf> {
    outcomes
        .iter()
        .filter(|o| o.is_updated())
        .map(|o| o.path().to_path_buf())
        .collect()
}
