use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{DeclarationStyle, VERSION_PLACEHOLDER};
use crate::error::{ReleaseError, Result};

/// File name looked up in the release root directory
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// File name looked up in the user configuration directory
pub const USER_CONFIG_FILE_NAME: &str = ".release.toml";

/// Represents the complete configuration for a release run.
///
/// Contains the files whose version declaration is rewritten and the
/// policy applied when publishing through git.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_targets")]
    pub targets: Vec<VersionTarget>,

    #[serde(default)]
    pub stage: StagePolicy,

    #[serde(default = "default_allow_commit_failure")]
    pub allow_commit_failure: bool,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Remote used for both pushes; `None` lets git pick the upstream
    #[serde(default)]
    pub remote: Option<String>,
}

/// A file carrying a version declaration.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionTarget {
    /// Path relative to the release root
    pub path: PathBuf,

    #[serde(flatten)]
    pub style: DeclarationStyle,

    /// A missing required file aborts the run; a missing optional one is skipped
    #[serde(default)]
    pub required: bool,
}

impl VersionTarget {
    pub fn new(path: impl Into<PathBuf>, style: DeclarationStyle, required: bool) -> Self {
        VersionTarget {
            path: path.into(),
            style,
            required,
        }
    }
}

/// Which changes `git add` picks up before the release commit.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StagePolicy {
    /// Only the target files that were rewritten
    #[default]
    Files,
    /// Everything pending in the working tree (`git add .`)
    All,
}

fn default_targets() -> Vec<VersionTarget> {
    vec![
        VersionTarget::new("build.gradle", DeclarationStyle::Gradle, true),
        VersionTarget::new("gradle.properties", DeclarationStyle::Properties, false),
    ]
}

fn default_allow_commit_failure() -> bool {
    true
}

fn default_commit_message() -> String {
    format!("Release version {}", VERSION_PLACEHOLDER)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            targets: default_targets(),
            stage: StagePolicy::default(),
            allow_commit_failure: default_allow_commit_failure(),
            commit_message: default_commit_message(),
            remote: None,
        }
    }
}

impl Config {
    /// Parse a configuration document and validate it.
    pub fn from_toml(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)
            .map_err(|e| ReleaseError::config(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that could never produce a sensible release.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(ReleaseError::config("At least one target file must be configured"));
        }

        for target in &self.targets {
            target.style.validate().map_err(|e| {
                ReleaseError::config(format!("Target '{}': {}", target.path.display(), e))
            })?;
        }

        if matches!(self.remote.as_deref(), Some(remote) if remote.trim().is_empty()) {
            return Err(ReleaseError::config("Remote name must not be empty"));
        }

        Ok(())
    }

    /// Render the commit message for `version`
    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace(VERSION_PLACEHOLDER, version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the release root
/// 3. `.release.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>, root: &Path) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(root),
    };

    let Some(path) = path else {
        debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    debug!("loading configuration from {}", path.display());
    let source = fs::read_to_string(&path).map_err(|e| {
        ReleaseError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    Config::from_toml(&source)
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    let local = root.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}
