// tests/config_test.rs
use release_runner::config::{load_config, Config, StagePolicy, CONFIG_FILE_NAME};
use release_runner::domain::DeclarationStyle;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_explicit_path() {
    let root = TempDir::new().unwrap();
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
stage = "all"
remote = "origin"
commit_message = "chore: release {version}"

[[targets]]
path = "app/build.gradle"
style = "gradle"
required = true
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path()), root.path()).unwrap();

    assert_eq!(config.stage, StagePolicy::All);
    assert_eq!(config.remote.as_deref(), Some("origin"));
    assert_eq!(config.commit_message_for("1.4.0"), "chore: release 1.4.0");
    assert_eq!(config.targets.len(), 1);
    assert_eq!(config.targets[0].path, PathBuf::from("app/build.gradle"));
    assert_eq!(config.targets[0].style, DeclarationStyle::Gradle);
}

#[test]
fn test_load_from_root_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        "allow_commit_failure = false\n",
    )
    .unwrap();

    let config = load_config(None, root.path()).unwrap();

    assert!(!config.allow_commit_failure);
    assert_eq!(config.targets, Config::default().targets);
}

#[test]
fn test_missing_explicit_path_is_error() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("nope.toml");

    let err = load_config(Some(missing.as_path()), root.path()).unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}

#[test]
fn test_invalid_custom_pattern_is_error() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        r#"
[[targets]]
path = "VERSION"
style = "custom"
pattern = "[unclosed"
template = "{version}"
"#,
    )
    .unwrap();

    let err = load_config(None, root.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("VERSION"), "got: {}", msg);
    assert!(msg.contains("Invalid version pattern"), "got: {}", msg);
}
