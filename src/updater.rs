//! Rewrites version declarations inside target files.

use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::config::VersionTarget;
use crate::error::{ReleaseError, Result};

/// What happened to a single target file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// File was (or in a dry run, would be) rewritten
    Updated {
        path: PathBuf,
        replacements: usize,
    },
    /// Optional file was absent
    Skipped { path: PathBuf },
}

impl UpdateOutcome {
    /// Target path as configured, relative to the release root
    pub fn path(&self) -> &Path {
        match self {
            UpdateOutcome::Updated { path, .. } | UpdateOutcome::Skipped { path } => path,
        }
    }

    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// Rewrites the version declaration of one target below `root`.
///
/// The whole file is read, substituted and written back in full, even when
/// nothing matched. With `dry_run` the substitution is computed but the file
/// is left untouched.
///
/// # Returns
/// * `Ok(UpdateOutcome::Updated)` - File rewritten
/// * `Ok(UpdateOutcome::Skipped)` - Optional file does not exist
/// * `Err(ReleaseError::MissingFile)` - Required file does not exist
/// * `Err(ReleaseError::File)` - Read or write failure, naming the target
pub fn update_target(
    root: &Path,
    target: &VersionTarget,
    version: &str,
    dry_run: bool,
) -> Result<UpdateOutcome> {
    let full_path = root.join(&target.path);

    let content = match fs::read_to_string(&full_path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            if target.required {
                return Err(ReleaseError::MissingFile(target.path.clone()));
            }
            debug!("optional target {} is absent", full_path.display());
            return Ok(UpdateOutcome::Skipped {
                path: target.path.clone(),
            });
        }
        Err(e) => return Err(ReleaseError::file(&target.path, e)),
    };

    let substitution = target.style.substitute(&content, version)?;
    debug!(
        "{}: {} declaration(s) matched {}",
        full_path.display(),
        substitution.replacements,
        target.style.pattern()
    );

    if !dry_run {
        fs::write(&full_path, substitution.content)
            .map_err(|e| ReleaseError::file(&target.path, e))?;
    }

    Ok(UpdateOutcome::Updated {
        path: target.path.clone(),
        replacements: substitution.replacements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DeclarationStyle;
    use tempfile::TempDir;

    fn gradle_target(required: bool) -> VersionTarget {
        VersionTarget::new("build.gradle", DeclarationStyle::Gradle, required)
    }

    #[test]
    fn test_updates_file_in_place() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("build.gradle"), "version = '1.0.1'\n").unwrap();

        let outcome = update_target(dir.path(), &gradle_target(true), "2.0.0", false).unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                path: PathBuf::from("build.gradle"),
                replacements: 1
            }
        );
        let content = fs::read_to_string(dir.path().join("build.gradle")).unwrap();
        assert_eq!(content, "version = '2.0.0'\n");
    }

    #[test]
    fn test_missing_optional_file_skipped() {
        let dir = TempDir::new().unwrap();
        let target = VersionTarget::new("gradle.properties", DeclarationStyle::Properties, false);

        let outcome = update_target(dir.path(), &target, "2.0.0", false).unwrap();

        assert_eq!(
            outcome,
            UpdateOutcome::Skipped {
                path: PathBuf::from("gradle.properties")
            }
        );
        assert!(!dir.path().join("gradle.properties").exists());
    }

    #[test]
    fn test_missing_required_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = update_target(dir.path(), &gradle_target(true), "2.0.0", false).unwrap_err();
        assert!(matches!(err, ReleaseError::MissingFile(ref p) if p == Path::new("build.gradle")));
    }

    #[test]
    fn test_no_match_leaves_content_unchanged() {
        let dir = TempDir::new().unwrap();
        let original = "plugins {\n    id 'java'\n}\n";
        fs::write(dir.path().join("build.gradle"), original).unwrap();

        let outcome = update_target(dir.path(), &gradle_target(true), "2.0.0", false).unwrap();

        assert!(matches!(
            outcome,
            UpdateOutcome::Updated { replacements: 0, .. }
        ));
        assert_eq!(
            fs::read_to_string(dir.path().join("build.gradle")).unwrap(),
            original
        );
    }

    #[test]
    fn test_unreadable_target_names_path() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("build.gradle"), [0xff, 0xfe, 0x00, b'\n']).unwrap();

        let err = update_target(dir.path(), &gradle_target(false), "2.0.0", false).unwrap_err();

        assert!(matches!(err, ReleaseError::File { ref path, .. } if path == Path::new("build.gradle")));
        assert!(err.to_string().starts_with("Cannot update build.gradle"));
    }

    #[test]
    fn test_directory_at_target_path_is_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("build.gradle")).unwrap();

        let err = update_target(dir.path(), &gradle_target(true), "2.0.0", false).unwrap_err();

        assert!(matches!(err, ReleaseError::File { .. }));
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("build.gradle"), "version = '1.0'\n").unwrap();

        let outcome = update_target(dir.path(), &gradle_target(true), "9.9", true).unwrap();

        assert!(outcome.is_updated());
        assert_eq!(
            fs::read_to_string(dir.path().join("build.gradle")).unwrap(),
            "version = '1.0'\n"
        );
    }
}
