use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{ReleaseError, Result};

/// Placeholder substituted with the release version in templates
pub const VERSION_PLACEHOLDER: &str = "{version}";

const GRADLE_PATTERN: &str = r"version\s*=\s*'.*'";
const GRADLE_TEMPLATE: &str = "version = '{version}'";

const PROPERTIES_PATTERN: &str = r"(?m)^version\s*=[^\r\n]*";
const PROPERTIES_TEMPLATE: &str = "version={version}";

/// How a version is declared inside a target file.
///
/// Selected per target in `release.toml` through the `style` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// Gradle build script: `version = '1.2.3'`, matched anywhere on a line
    Gradle,
    /// Properties file: `version=1.2.3` at the start of a line, written unquoted
    Properties,
    /// Operator-supplied regex and `{version}` template
    Custom { pattern: String, template: String },
}

/// Result of applying a declaration style to file content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub content: String,
    pub replacements: usize,
}

impl DeclarationStyle {
    /// Regex source matching one version declaration
    pub fn pattern(&self) -> &str {
        match self {
            DeclarationStyle::Gradle => GRADLE_PATTERN,
            DeclarationStyle::Properties => PROPERTIES_PATTERN,
            DeclarationStyle::Custom { pattern, .. } => pattern,
        }
    }

    /// Replacement template containing the `{version}` placeholder
    pub fn template(&self) -> &str {
        match self {
            DeclarationStyle::Gradle => GRADLE_TEMPLATE,
            DeclarationStyle::Properties => PROPERTIES_TEMPLATE,
            DeclarationStyle::Custom { template, .. } => template,
        }
    }

    /// Check that a custom pattern compiles and its template carries the placeholder
    pub fn validate(&self) -> Result<()> {
        self.compile()?;
        if !self.template().contains(VERSION_PLACEHOLDER) {
            return Err(ReleaseError::config(format!(
                "Template '{}' must contain a {} placeholder",
                self.template(),
                VERSION_PLACEHOLDER
            )));
        }
        Ok(())
    }

    /// Render the declaration line for `version`
    pub fn render(&self, version: &str) -> String {
        self.template().replace(VERSION_PLACEHOLDER, version)
    }

    /// Replace every declaration in `content` with one carrying `version`.
    ///
    /// The version is inserted literally; `$` sequences are not expanded as
    /// capture group references. Content without a match comes back unchanged
    /// with `replacements == 0`.
    pub fn substitute(&self, content: &str, version: &str) -> Result<Substitution> {
        let re = self.compile()?;
        let replacements = re.find_iter(content).count();
        let rendered = self.render(version);
        let content = re.replace_all(content, NoExpand(&rendered)).into_owned();

        Ok(Substitution {
            content,
            replacements,
        })
    }

    fn compile(&self) -> Result<Regex> {
        Regex::new(self.pattern()).map_err(|e| {
            ReleaseError::config(format!("Invalid version pattern '{}': {}", self.pattern(), e))
        })
    }
}
