use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use release_runner::cli::{run_release_workflow, ReleaseWorkflowArgs, WorkflowError};
use release_runner::config;
use release_runner::git::{RepositoryInfo, SystemGit};
use release_runner::ui::{self, TerminalInput};

#[derive(clap::Parser)]
#[command(
    name = "release",
    version,
    about = "Bump the version in build files, then commit, tag and push the release"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "Version to release; prompted for when omitted")]
    release_version: Option<String>,

    #[arg(short, long, help = "Project directory (defaults to the current directory)")]
    dir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let root = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let config = config::load_config(args.config.as_deref(), &root)?;

    let repo = RepositoryInfo::discover(&root)?;
    match &repo.branch {
        Some(branch) => ui::display_status(&format!(
            "Releasing from branch '{}' in {}",
            branch,
            repo.workdir.display()
        )),
        None => ui::display_status(&format!(
            "Releasing from {} (no branch checked out)",
            repo.workdir.display()
        )),
    }

    let vcs = SystemGit::new(&root, config.remote.clone());
    let mut input = TerminalInput::stdin();
    let workflow_args = ReleaseWorkflowArgs {
        version: args.release_version,
        root,
        dry_run: args.dry_run,
    };

    match run_release_workflow(workflow_args, &config, &mut input, &vcs) {
        Ok(_) => Ok(()),
        Err(WorkflowError::Publish { failure, modified }) => {
            ui::display_error(&format!("Error occurred during Git operations: {}", failure));
            ui::display_partial_state(&modified, &failure.report.completed, failure.step);
            std::process::exit(1);
        }
        Err(WorkflowError::Update { error, modified }) => {
            ui::display_error(&error.to_string());
            if let Some(line) = ui::format_modified_files(&modified) {
                ui::display_status(&line);
            }
            std::process::exit(1);
        }
        Err(WorkflowError::Release(e)) => Err(e.into()),
    }
}
